//! Viewport plumbing: container measurement and the resize event source.

mod container;
mod watcher;

pub use container::{ContainerMeasure, MeasuredContainer};
pub use watcher::{ResizeSubscription, ViewportWatcher};
