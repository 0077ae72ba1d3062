use crate::error::{ChartError, ChartResult};
use crate::extensions::{SizingContext, SizingEvent, SizingObserver};
use crate::render::ChartSurface;

use super::ChartSizingController;
use super::validation::validate_observer_id;

impl<S: ChartSurface> ChartSizingController<S> {
    /// Registers an observer with a unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn SizingObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        validate_observer_id(&observer_id)?;
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidConfig(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    #[must_use]
    pub fn sizing_context(&self) -> SizingContext {
        SizingContext {
            mode: self.mode,
            tick_count: self.data.tick_count(),
            min_x_tick_width: self.config.min_x_tick_width,
            container_width: self.last_container_width,
            surface_mounted: self.surface.is_some(),
        }
    }

    pub(super) fn emit_sizing_event(&mut self, event: SizingEvent) {
        let context = self.sizing_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
