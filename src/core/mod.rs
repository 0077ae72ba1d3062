pub mod layout_mode;
pub mod options;
pub mod types;

pub use layout_mode::{LayoutMode, decide_layout_mode, scroll_target_width};
pub use options::{ChartOptions, RESPONSIVE_OPTION_KEY};
pub use types::{ChartData, ChartDataset, DataPoint};
