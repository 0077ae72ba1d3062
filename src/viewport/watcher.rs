use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{trace, warn};

type Listener = Rc<RefCell<dyn FnMut()>>;

#[derive(Default)]
struct WatcherState {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Source of viewport `resize` notifications.
///
/// Every dispatch reaches every subscribed listener; there is no debouncing.
/// Cloned watchers share their listener list.
#[derive(Clone, Default)]
pub struct ViewportWatcher {
    state: Rc<RefCell<WatcherState>>,
}

impl ViewportWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for resize events.
    ///
    /// The listener stays registered exactly as long as the returned guard
    /// lives.
    #[must_use = "dropping the subscription unsubscribes the listener immediately"]
    pub fn subscribe(&self, listener: impl FnMut() + 'static) -> ResizeSubscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        state.listeners.push((id, listener));
        trace!(id, listeners = state.listeners.len(), "viewport listener added");
        ResizeSubscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Notifies every listener of a resize. Returns how many were invoked.
    pub fn dispatch_resize(&self) -> usize {
        // Listeners may subscribe or unsubscribe while running, so the list is
        // released before any of them is called.
        let listeners: Vec<(u64, Listener)> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut invoked = 0;
        for (id, listener) in listeners {
            match listener.try_borrow_mut() {
                Ok(mut callback) => {
                    (&mut *callback)();
                    invoked += 1;
                }
                Err(_) => warn!(id, "skipping re-entrant viewport resize listener"),
            }
        }
        invoked
    }
}

/// Scoped registration returned by [`ViewportWatcher::subscribe`].
///
/// Dropping it removes the listener. It holds the watcher weakly, so a guard
/// outliving its watcher is harmless.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    state: Weak<RefCell<WatcherState>>,
}

impl ResizeSubscription {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// `true` while the listener is still registered with a live watcher.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        let state = state.borrow();
        state.listeners.iter().any(|(id, _)| *id == self.id)
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let Ok(mut state) = state.try_borrow_mut() else {
            warn!(id = self.id, "viewport watcher busy; listener not removed");
            return;
        };
        state.listeners.retain(|(id, _)| *id != self.id);
        trace!(
            id = self.id,
            listeners = state.listeners.len(),
            "viewport listener removed"
        );
    }
}
