use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::{ChartData, ChartOptions, LayoutMode};
use crate::error::ChartResult;
use crate::render::ChartSurface;
use crate::viewport::{ResizeSubscription, ViewportWatcher};

use super::{ChartSizingController, ContainerLayout};

/// Mounted chart component.
///
/// Owns the sizing controller and its viewport subscription. The subscription
/// lives exactly as long as the component: [`ScrollableChart::unmount`] and
/// plain drops both release it.
pub struct ScrollableChart<S: ChartSurface + 'static> {
    controller: Rc<RefCell<ChartSizingController<S>>>,
    subscription: ResizeSubscription,
}

impl<S: ChartSurface + 'static> ScrollableChart<S> {
    /// Subscribes the controller to `watcher` and runs the initial trigger.
    pub fn mount(controller: ChartSizingController<S>, watcher: &ViewportWatcher) -> Self {
        let controller = Rc::new(RefCell::new(controller));
        let listener_target = Rc::downgrade(&controller);
        let subscription = watcher.subscribe(move || {
            let Some(controller) = listener_target.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.on_viewport_resize();
                }
                Err(_) => warn!("chart controller busy; viewport resize ignored"),
            }
        });
        debug!(subscription = subscription.id(), "scrollable chart mounted");
        controller.borrow_mut().refresh();
        Self {
            controller,
            subscription,
        }
    }

    /// Tears the component down and hands back its controller.
    pub fn unmount(self) -> Option<ChartSizingController<S>> {
        let Self {
            controller,
            subscription,
        } = self;
        debug!(subscription = subscription.id(), "scrollable chart unmounted");
        subscription.unsubscribe();
        Rc::try_unwrap(controller).ok().map(RefCell::into_inner)
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }

    #[must_use]
    pub fn controller(&self) -> Ref<'_, ChartSizingController<S>> {
        self.controller.borrow()
    }

    pub fn controller_mut(&self) -> RefMut<'_, ChartSizingController<S>> {
        self.controller.borrow_mut()
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.controller.borrow().mode()
    }

    #[must_use]
    pub fn effective_options(&self) -> ChartOptions {
        self.controller.borrow().effective_options()
    }

    #[must_use]
    pub fn container_layout(&self) -> ContainerLayout {
        ContainerLayout::new(self.controller.borrow().config().fixed_height)
    }

    pub fn set_data(&self, data: ChartData) -> ChartResult<()> {
        self.controller.borrow_mut().set_data(data)
    }

    pub fn set_min_x_tick_width(&self, min_x_tick_width: f64) -> ChartResult<()> {
        self.controller
            .borrow_mut()
            .set_min_x_tick_width(min_x_tick_width)
    }

    pub fn set_options(&self, options: ChartOptions) {
        self.controller.borrow_mut().set_options(options);
    }
}
