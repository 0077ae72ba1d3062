mod null_surface;
mod recording_surface;

pub use null_surface::NullSurface;
pub use recording_surface::{RecordingSurface, SurfaceSize};

use crate::core::{ChartData, ChartOptions};
use crate::error::ChartResult;

/// Contract implemented by the chart widget the controller sizes.
///
/// The surface owns drawing; the controller only hands it the data/options
/// payload and, in scroll mode, an explicit pixel size.
pub trait ChartSurface {
    /// Forces the surface to the given pixel size.
    fn resize(&mut self, width: f64, height: f64) -> ChartResult<()>;

    /// Receives the current data and the effective options.
    fn update(&mut self, data: &ChartData, options: &ChartOptions) -> ChartResult<()>;

    /// Horizontal space the surface spends outside its plot area (axis labels,
    /// padding). `None` until the surface has measured its own chart area.
    fn axis_gutter_width(&self) -> Option<f64> {
        None
    }
}

pub(crate) fn validate_surface_size(width: f64, height: f64) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(crate::error::ChartError::InvalidSurfaceSize { width, height });
    }
    Ok(())
}
