use crate::error::{ChartError, ChartResult};

pub(super) fn validate_min_x_tick_width(width: f64) -> ChartResult<f64> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "min_x_tick_width must be finite and > 0, got {width}"
        )));
    }
    Ok(width)
}

pub(super) fn validate_fixed_height(height: f64) -> ChartResult<f64> {
    if !height.is_finite() || height <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "fixed_height must be finite and > 0, got {height}"
        )));
    }
    Ok(height)
}

pub(super) fn validate_observer_id(id: &str) -> ChartResult<()> {
    if id.is_empty() {
        return Err(ChartError::InvalidConfig(
            "observer id must not be empty".to_owned(),
        ));
    }
    Ok(())
}
