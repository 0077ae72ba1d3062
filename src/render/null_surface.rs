use crate::core::{ChartData, ChartOptions};
use crate::error::ChartResult;
use crate::render::{ChartSurface, validate_surface_size};

/// No-op surface used by tests and headless usage.
///
/// It still validates resize requests so tests catch degenerate sizes before
/// a real widget is attached.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub last_size: Option<(f64, f64)>,
    pub resize_count: usize,
    pub last_tick_count: usize,
    pub last_responsive: Option<bool>,
}

impl ChartSurface for NullSurface {
    fn resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        validate_surface_size(width, height)?;
        self.last_size = Some((width, height));
        self.resize_count += 1;
        Ok(())
    }

    fn update(&mut self, data: &ChartData, options: &ChartOptions) -> ChartResult<()> {
        self.last_tick_count = data.tick_count();
        self.last_responsive = options.responsive();
        Ok(())
    }
}
