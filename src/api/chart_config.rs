use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::validation::{validate_fixed_height, validate_min_x_tick_width};

pub const DEFAULT_MIN_X_TICK_WIDTH: f64 = 150.0;
pub const DEFAULT_FIXED_HEIGHT: f64 = 350.0;

/// How the surface width is derived while in scroll mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeTargetPolicy {
    /// `tick_count * min_x_tick_width`.
    #[default]
    TickSpan,
    /// Tick span plus the surface's axis gutter, so the plot area itself gets
    /// the full tick span. The gutter counts as zero until the surface
    /// reports it.
    TickSpanPlusAxisGutter,
}

/// Sizing configuration supplied by the caller.
///
/// Serializable so hosts can keep it next to their chart options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollableChartConfig {
    #[serde(default = "default_min_x_tick_width")]
    pub min_x_tick_width: f64,
    #[serde(default = "default_fixed_height")]
    pub fixed_height: f64,
    #[serde(default)]
    pub resize_policy: ResizeTargetPolicy,
}

impl Default for ScrollableChartConfig {
    fn default() -> Self {
        Self {
            min_x_tick_width: default_min_x_tick_width(),
            fixed_height: default_fixed_height(),
            resize_policy: ResizeTargetPolicy::default(),
        }
    }
}

impl ScrollableChartConfig {
    #[must_use]
    pub fn new(min_x_tick_width: f64) -> Self {
        Self {
            min_x_tick_width,
            ..Self::default()
        }
    }

    /// Sets the height used for explicit scroll-mode resizes.
    #[must_use]
    pub fn with_fixed_height(mut self, fixed_height: f64) -> Self {
        self.fixed_height = fixed_height;
        self
    }

    #[must_use]
    pub fn with_resize_policy(mut self, policy: ResizeTargetPolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_min_x_tick_width(self.min_x_tick_width)?;
        validate_fixed_height(self.fixed_height)?;
        Ok(self)
    }

    /// Parses and validates a config from JSON. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse sizing config: {e}")))?;
        config.validate()
    }
}

fn default_min_x_tick_width() -> f64 {
    DEFAULT_MIN_X_TICK_WIDTH
}

fn default_fixed_height() -> f64 {
    DEFAULT_FIXED_HEIGHT
}
