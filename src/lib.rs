//! scroll-chart: sizing controller for line charts that outgrow their container.
//!
//! A chart either sizes itself responsively to its container or, once the
//! container is too narrow to give every tick a minimum width, gets a fixed
//! width and scrolls horizontally. The decision lives in
//! [`core::decide_layout_mode`]; [`api::ChartSizingController`] keeps a
//! [`render::ChartSurface`] in sync with it.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;
pub mod viewport;

pub use api::{ChartSizingController, ScrollableChart, ScrollableChartConfig};
pub use error::{ChartError, ChartResult};
