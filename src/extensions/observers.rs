use serde::{Deserialize, Serialize};

use crate::core::LayoutMode;

/// Read-only sizing snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingContext {
    pub mode: LayoutMode,
    pub tick_count: usize,
    pub min_x_tick_width: f64,
    pub container_width: Option<f64>,
    pub surface_mounted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeSkipReason {
    /// No surface is attached yet; the next trigger retries.
    SurfaceNotMounted,
    /// The data has no ticks, so there is no width to give the surface.
    EmptyTickSpan,
}

/// Event stream exposed to sizing observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingEvent {
    ModeChanged { from: LayoutMode, to: LayoutMode },
    SurfaceResized { width: f64, height: f64 },
    ResizeSkipped { reason: ResizeSkipReason },
    SurfaceMounted,
    SurfaceUnmounted,
}

/// Hook interface for hosts that want to follow sizing decisions.
///
/// Observers are registered per controller and only see copies of its
/// state, so there is no shared handle to the chart outside the controller.
pub trait SizingObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SizingEvent, context: SizingContext);
}
