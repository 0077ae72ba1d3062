use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerPosition {
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerOverflow {
    Scroll,
}

/// Layout of the element wrapping the chart surface.
///
/// The container always allows horizontal scrolling; in regular mode the
/// surface simply never overflows it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub position: ContainerPosition,
    pub min_height_px: f64,
    pub width_percent: f64,
    pub overflow_x: ContainerOverflow,
}

impl ContainerLayout {
    #[must_use]
    pub fn new(min_height_px: f64) -> Self {
        Self {
            position: ContainerPosition::Relative,
            min_height_px,
            width_percent: 100.0,
            overflow_x: ContainerOverflow::Scroll,
        }
    }

    /// Inline CSS declaration for web hosts.
    #[must_use]
    pub fn to_style_string(&self) -> String {
        let position = match self.position {
            ContainerPosition::Relative => "relative",
        };
        let overflow = match self.overflow_x {
            ContainerOverflow::Scroll => "scroll",
        };
        format!(
            "position: {position}; min-height: {}px; width: {}%; overflow-x: {overflow};",
            self.min_height_px, self.width_percent
        )
    }
}
