use tracing::debug;

use crate::core::{ChartData, ChartOptions, LayoutMode};
use crate::error::ChartResult;
use crate::extensions::{SizingEvent, SizingObserver};
use crate::render::ChartSurface;
use crate::viewport::ContainerMeasure;

use super::ScrollableChartConfig;
use super::validation::validate_min_x_tick_width;

/// Keeps a chart surface's size and layout mode in sync with its container.
///
/// All decisions go through [`ChartSizingController::refresh`], which is
/// invoked from the two triggers: input changes (data, tick width) and
/// viewport resize notifications. Mode is re-derived from the current inputs
/// on every trigger.
pub struct ChartSizingController<S: ChartSurface> {
    pub(super) config: ScrollableChartConfig,
    pub(super) data: ChartData,
    pub(super) options: ChartOptions,
    pub(super) container: Box<dyn ContainerMeasure>,
    pub(super) surface: Option<S>,
    pub(super) mode: LayoutMode,
    pub(super) last_container_width: Option<f64>,
    pub(super) observers: Vec<Box<dyn SizingObserver>>,
}

impl<S: ChartSurface> ChartSizingController<S> {
    /// Creates a controller in `Regular` mode with no data and no surface.
    ///
    /// No decision is made until the first trigger.
    pub fn new(
        config: ScrollableChartConfig,
        container: impl ContainerMeasure + 'static,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            data: ChartData::default(),
            options: ChartOptions::default(),
            container: Box::new(container),
            surface: None,
            mode: LayoutMode::Regular,
            last_container_width: None,
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> ScrollableChartConfig {
        self.config
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.data.tick_count()
    }

    #[must_use]
    pub fn min_x_tick_width(&self) -> f64 {
        self.config.min_x_tick_width
    }

    /// Container width read by the most recent trigger.
    #[must_use]
    pub fn last_container_width(&self) -> Option<f64> {
        self.last_container_width
    }

    #[must_use]
    pub fn responsive(&self) -> bool {
        self.mode.responsive()
    }

    /// Caller options merged with the controlled `responsive` flag.
    #[must_use]
    pub fn effective_options(&self) -> ChartOptions {
        self.options.with_responsive(self.responsive())
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Replaces the chart data.
    ///
    /// Re-runs the layout decision when the tick count changed; otherwise only
    /// the new payload is pushed to the surface.
    pub fn set_data(&mut self, data: ChartData) -> ChartResult<()> {
        data.validate()?;
        let previous_tick_count = self.data.tick_count();
        self.data = data;
        let tick_count = self.data.tick_count();
        debug!(previous_tick_count, tick_count, "set chart data");
        if tick_count != previous_tick_count {
            self.refresh();
        } else {
            self.push_surface_payload();
        }
        Ok(())
    }

    /// Updates the minimum per-tick width and re-runs the decision if it moved.
    pub fn set_min_x_tick_width(&mut self, min_x_tick_width: f64) -> ChartResult<()> {
        let min_x_tick_width = validate_min_x_tick_width(min_x_tick_width)?;
        if min_x_tick_width == self.config.min_x_tick_width {
            return Ok(());
        }
        debug!(
            previous = self.config.min_x_tick_width,
            next = min_x_tick_width,
            "set min x tick width"
        );
        self.config.min_x_tick_width = min_x_tick_width;
        self.refresh();
        Ok(())
    }

    /// Replaces the whole sizing config and re-runs the decision.
    pub fn set_config(&mut self, config: ScrollableChartConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        self.refresh();
        Ok(())
    }

    /// Replaces the pass-through options. Layout is unaffected.
    pub fn set_options(&mut self, options: ChartOptions) {
        self.options = options;
        self.push_surface_payload();
    }

    /// Viewport resize trigger. Every call re-measures and re-decides.
    pub fn on_viewport_resize(&mut self) -> LayoutMode {
        self.refresh()
    }

    /// Attaches the chart surface and runs a trigger so it gets sized.
    ///
    /// Returns the previously attached surface, if any.
    pub fn mount_surface(&mut self, surface: S) -> Option<S> {
        let previous = self.surface.replace(surface);
        self.emit_sizing_event(SizingEvent::SurfaceMounted);
        self.refresh();
        previous
    }

    /// Detaches the surface. Later resize commands become no-ops.
    pub fn unmount_surface(&mut self) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() {
            self.emit_sizing_event(SizingEvent::SurfaceUnmounted);
        }
        surface
    }
}
