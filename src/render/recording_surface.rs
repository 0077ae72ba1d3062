use serde::{Deserialize, Serialize};

use crate::core::{ChartData, ChartOptions};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartSurface, validate_surface_size};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

/// Surface that keeps the full history of commands it received.
///
/// Used by the trace tool and by tests that assert on exact resize sequences.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub resize_calls: Vec<SurfaceSize>,
    pub update_count: usize,
    pub last_options: Option<ChartOptions>,
    pub last_tick_count: usize,
    axis_gutter: Option<f64>,
    fail_resize: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a measured axis gutter of `gutter` pixels.
    #[must_use]
    pub fn with_axis_gutter(mut self, gutter: f64) -> Self {
        self.axis_gutter = Some(gutter);
        self
    }

    /// Makes every resize request fail after being recorded.
    #[must_use]
    pub fn failing_resize(mut self) -> Self {
        self.fail_resize = true;
        self
    }

    #[must_use]
    pub fn last_resize(&self) -> Option<SurfaceSize> {
        self.resize_calls.last().copied()
    }

    pub fn clear(&mut self) {
        self.resize_calls.clear();
        self.update_count = 0;
        self.last_options = None;
    }
}

impl ChartSurface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        validate_surface_size(width, height)?;
        self.resize_calls.push(SurfaceSize { width, height });
        if self.fail_resize {
            return Err(ChartError::Surface("resize rejected by surface".to_owned()));
        }
        Ok(())
    }

    fn update(&mut self, data: &ChartData, options: &ChartOptions) -> ChartResult<()> {
        self.update_count += 1;
        self.last_tick_count = data.tick_count();
        self.last_options = Some(options.clone());
        Ok(())
    }

    fn axis_gutter_width(&self) -> Option<f64> {
        self.axis_gutter
    }
}
