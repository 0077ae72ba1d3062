use serde::{Deserialize, Serialize};

use crate::core::LayoutMode;
use crate::render::ChartSurface;

use super::{ChartSizingController, ResizeTargetPolicy};

/// Serializable view of the controller's derived sizing state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingSnapshot {
    pub mode: LayoutMode,
    pub tick_count: usize,
    pub min_x_tick_width: f64,
    pub fixed_height: f64,
    pub resize_policy: ResizeTargetPolicy,
    pub container_width: Option<f64>,
    pub target_render_width: Option<f64>,
    pub responsive: bool,
    pub surface_mounted: bool,
}

impl<S: ChartSurface> ChartSizingController<S> {
    #[must_use]
    pub fn snapshot(&self) -> SizingSnapshot {
        SizingSnapshot {
            mode: self.mode,
            tick_count: self.data.tick_count(),
            min_x_tick_width: self.config.min_x_tick_width,
            fixed_height: self.config.fixed_height,
            resize_policy: self.config.resize_policy,
            container_width: self.last_container_width,
            target_render_width: self.target_render_width(),
            responsive: self.responsive(),
            surface_mounted: self.surface.is_some(),
        }
    }
}
