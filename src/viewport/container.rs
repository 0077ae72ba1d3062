use std::cell::Cell;
use std::rc::Rc;

/// Reads the current width of the element wrapping the chart.
///
/// Returns `None` while the container is not mounted or not laid out.
pub trait ContainerMeasure {
    fn measure_width(&self) -> Option<f64>;
}

/// Shared, host-updated container width.
///
/// Clones share the same cell: the host keeps one handle and writes the
/// measured width while the controller reads it through another.
#[derive(Debug, Clone, Default)]
pub struct MeasuredContainer {
    width: Rc<Cell<Option<f64>>>,
}

impl MeasuredContainer {
    /// Creates an unmeasured container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_width(width: f64) -> Self {
        let container = Self::new();
        container.set_width(width);
        container
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(Some(width));
    }

    /// Marks the container as unmeasured again, e.g. after it was detached.
    pub fn clear(&self) {
        self.width.set(None);
    }

    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.width.get()
    }
}

impl ContainerMeasure for MeasuredContainer {
    fn measure_width(&self) -> Option<f64> {
        self.width.get()
    }
}
