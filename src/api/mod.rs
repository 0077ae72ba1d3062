mod chart_config;
mod container_layout;
mod json_contract;
mod layout_trace;
mod observer_registry;
mod scrollable_chart;
mod sizing_controller;
mod sizing_cycle;
mod snapshot;
mod validation;

pub use chart_config::{
    DEFAULT_FIXED_HEIGHT, DEFAULT_MIN_X_TICK_WIDTH, ResizeTargetPolicy, ScrollableChartConfig,
};
pub use container_layout::{ContainerLayout, ContainerOverflow, ContainerPosition};
pub use json_contract::{SIZING_SNAPSHOT_JSON_SCHEMA_V1, SizingSnapshotJsonContractV1};
pub use layout_trace::{LayoutTrace, LayoutTraceOutcome, LayoutTraceResult, LayoutTraceStep};
pub use scrollable_chart::ScrollableChart;
pub use sizing_controller::ChartSizingController;
pub use snapshot::SizingSnapshot;
