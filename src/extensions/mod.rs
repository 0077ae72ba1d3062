mod observers;

pub use observers::{ResizeSkipReason, SizingContext, SizingEvent, SizingObserver};
