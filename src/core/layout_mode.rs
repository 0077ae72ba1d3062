use serde::{Deserialize, Serialize};

/// Active layout of the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Surface sizes itself to the container; every tick is squeezed to fit.
    #[default]
    Regular,
    /// Surface gets a fixed width proportional to the tick count and the
    /// container scrolls horizontally.
    Scroll,
}

impl LayoutMode {
    #[must_use]
    pub fn is_scroll(self) -> bool {
        matches!(self, Self::Scroll)
    }

    /// Value of the surface `responsive` option for this mode.
    #[must_use]
    pub fn responsive(self) -> bool {
        !self.is_scroll()
    }
}

/// Decides which layout mode fits the given inputs.
///
/// Falls back to `Scroll` when there are no ticks or the container has not
/// been measured yet (`None`, zero, negative or non-finite width). Otherwise
/// the chart scrolls when the width each tick would get in a responsive
/// layout is below `min_tick_width`. A per-tick width exactly equal to the
/// minimum stays `Regular`.
#[must_use]
pub fn decide_layout_mode(
    min_tick_width: f64,
    tick_count: usize,
    container_width: Option<f64>,
) -> LayoutMode {
    let Some(container_width) = container_width.filter(|w| w.is_finite() && *w > 0.0) else {
        return LayoutMode::Scroll;
    };
    if tick_count == 0 {
        return LayoutMode::Scroll;
    }

    let width_per_tick = container_width / tick_count as f64;
    if width_per_tick < min_tick_width {
        LayoutMode::Scroll
    } else {
        LayoutMode::Regular
    }
}

/// Width the surface needs so every tick gets `min_tick_width` pixels.
#[must_use]
pub fn scroll_target_width(tick_count: usize, min_tick_width: f64) -> f64 {
    tick_count as f64 * min_tick_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_container_scrolls() {
        assert_eq!(decide_layout_mode(150.0, 8, None), LayoutMode::Scroll);
        assert_eq!(decide_layout_mode(150.0, 8, Some(0.0)), LayoutMode::Scroll);
        assert_eq!(
            decide_layout_mode(150.0, 8, Some(f64::NAN)),
            LayoutMode::Scroll
        );
    }

    #[test]
    fn exact_fit_stays_regular() {
        assert_eq!(decide_layout_mode(150.0, 8, Some(1200.0)), LayoutMode::Regular);
        assert_eq!(decide_layout_mode(150.0, 8, Some(1199.0)), LayoutMode::Scroll);
    }

    #[test]
    fn responsive_flag_follows_mode() {
        assert!(LayoutMode::Regular.responsive());
        assert!(!LayoutMode::Scroll.responsive());
        assert_eq!(LayoutMode::default(), LayoutMode::Regular);
    }
}
