use tracing::{debug, trace, warn};

use crate::core::{LayoutMode, decide_layout_mode, scroll_target_width};
use crate::extensions::{ResizeSkipReason, SizingEvent};
use crate::render::ChartSurface;

use super::{ChartSizingController, ResizeTargetPolicy};

impl<S: ChartSurface> ChartSizingController<S> {
    /// Runs one measure → decide → resize cycle and returns the new mode.
    ///
    /// Scroll mode re-issues the resize command on every cycle, even when the
    /// mode did not change, since tick count or tick width may have moved the
    /// target width. Regular mode never resizes the surface explicitly.
    pub fn refresh(&mut self) -> LayoutMode {
        let container_width = self.container.measure_width();
        let tick_count = self.data.tick_count();
        trace!(?container_width, tick_count, "measured chart container");
        self.last_container_width = container_width;

        let next = decide_layout_mode(self.config.min_x_tick_width, tick_count, container_width);
        // Mode is committed first so resize events carry the mode they belong to.
        self.apply_mode(next);
        if next.is_scroll() {
            self.resize_surface_for_scroll();
        }
        self.push_surface_payload();
        next
    }

    /// Width the surface gets in scroll mode, `None` outside scroll mode.
    #[must_use]
    pub fn target_render_width(&self) -> Option<f64> {
        self.mode.is_scroll().then(|| self.scroll_width())
    }

    fn scroll_width(&self) -> f64 {
        let span = scroll_target_width(self.data.tick_count(), self.config.min_x_tick_width);
        match self.config.resize_policy {
            ResizeTargetPolicy::TickSpan => span,
            ResizeTargetPolicy::TickSpanPlusAxisGutter => {
                let gutter = self
                    .surface
                    .as_ref()
                    .and_then(S::axis_gutter_width)
                    .filter(|gutter| gutter.is_finite() && *gutter >= 0.0)
                    .unwrap_or(0.0);
                span + gutter
            }
        }
    }

    fn resize_surface_for_scroll(&mut self) {
        if self.data.tick_count() == 0 {
            debug!("no ticks to lay out; keeping surface size");
            self.emit_sizing_event(SizingEvent::ResizeSkipped {
                reason: ResizeSkipReason::EmptyTickSpan,
            });
            return;
        }

        let width = self.scroll_width();
        let height = self.config.fixed_height;
        let Some(surface) = self.surface.as_mut() else {
            debug!(width, height, "surface not mounted; resize deferred");
            self.emit_sizing_event(SizingEvent::ResizeSkipped {
                reason: ResizeSkipReason::SurfaceNotMounted,
            });
            return;
        };

        match surface.resize(width, height) {
            Ok(()) => {
                debug!(width, height, "resized chart surface for scroll mode");
                self.emit_sizing_event(SizingEvent::SurfaceResized { width, height });
            }
            Err(err) => warn!(error = %err, width, height, "chart surface rejected resize"),
        }
    }

    fn apply_mode(&mut self, next: LayoutMode) {
        let previous = self.mode;
        self.mode = next;
        if previous != next {
            debug!(?previous, ?next, "layout mode changed");
            self.emit_sizing_event(SizingEvent::ModeChanged {
                from: previous,
                to: next,
            });
        }
    }

    pub(super) fn push_surface_payload(&mut self) {
        let options = self.effective_options();
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Err(err) = surface.update(&self.data, &options) {
            warn!(error = %err, "chart surface rejected data/options update");
        }
    }
}
