use serde::{Deserialize, Serialize};

use crate::core::{ChartData, ChartOptions};
use crate::error::{ChartError, ChartResult};
use crate::render::{RecordingSurface, SurfaceSize};
use crate::viewport::{MeasuredContainer, ViewportWatcher};

use super::{ChartSizingController, ScrollableChart, ScrollableChartConfig, SizingSnapshot};

/// Recorded sequence of container widths, resize events and input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTrace {
    pub trace_name: String,
    #[serde(default)]
    pub config: ScrollableChartConfig,
    #[serde(default)]
    pub container_width: Option<f64>,
    #[serde(default)]
    pub axis_gutter: Option<f64>,
    #[serde(default)]
    pub options: ChartOptions,
    #[serde(default)]
    pub data: ChartData,
    #[serde(default)]
    pub steps: Vec<LayoutTraceStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutTraceStep {
    /// Changes the measured width without notifying anyone.
    ContainerWidth { width: Option<f64> },
    /// Fires a viewport resize event.
    Resize,
    SetData { data: ChartData },
    SetMinXTickWidth { width: f64 },
    SetOptions { options: ChartOptions },
}

impl LayoutTraceStep {
    fn kind(&self) -> &'static str {
        match self {
            Self::ContainerWidth { .. } => "container_width",
            Self::Resize => "resize",
            Self::SetData { .. } => "set_data",
            Self::SetMinXTickWidth { .. } => "set_min_x_tick_width",
            Self::SetOptions { .. } => "set_options",
        }
    }
}

/// State after one step. `resize_calls` only holds the commands issued by
/// that step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTraceOutcome {
    pub step: String,
    pub snapshot: SizingSnapshot,
    pub resize_calls: Vec<SurfaceSize>,
    pub responsive_option: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTraceResult {
    pub trace_name: String,
    pub initial: LayoutTraceOutcome,
    pub steps: Vec<LayoutTraceOutcome>,
}

impl LayoutTrace {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse layout trace: {e}")))
    }

    /// Replays the trace against a mounted chart backed by a recording surface.
    ///
    /// The surface is attached before the component mounts, so `initial`
    /// carries the resizes of both the attach and the mount trigger.
    pub fn replay(self) -> ChartResult<LayoutTraceResult> {
        let container = MeasuredContainer::new();
        if let Some(width) = self.container_width {
            container.set_width(width);
        }

        let mut controller = ChartSizingController::new(self.config, container.clone())?;
        controller.set_options(self.options);
        controller.set_data(self.data)?;

        let surface = match self.axis_gutter {
            Some(gutter) => RecordingSurface::new().with_axis_gutter(gutter),
            None => RecordingSurface::new(),
        };
        controller.mount_surface(surface);

        let watcher = ViewportWatcher::new();
        let chart = ScrollableChart::mount(controller, &watcher);
        let initial = capture_outcome(&chart, "mount".to_owned());

        let mut steps = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.into_iter().enumerate() {
            let label = format!("{index}:{}", step.kind());
            match step {
                LayoutTraceStep::ContainerWidth { width } => match width {
                    Some(width) => container.set_width(width),
                    None => container.clear(),
                },
                LayoutTraceStep::Resize => {
                    watcher.dispatch_resize();
                }
                LayoutTraceStep::SetData { data } => {
                    chart.set_data(data).map_err(|err| step_error(index, err))?;
                }
                LayoutTraceStep::SetMinXTickWidth { width } => {
                    chart
                        .set_min_x_tick_width(width)
                        .map_err(|err| step_error(index, err))?;
                }
                LayoutTraceStep::SetOptions { options } => chart.set_options(options),
            }
            steps.push(capture_outcome(&chart, label));
        }

        Ok(LayoutTraceResult {
            trace_name: self.trace_name,
            initial,
            steps,
        })
    }
}

fn step_error(index: usize, err: ChartError) -> ChartError {
    ChartError::InvalidData(format!("trace step {index}: {err}"))
}

fn capture_outcome(chart: &ScrollableChart<RecordingSurface>, step: String) -> LayoutTraceOutcome {
    let mut controller = chart.controller_mut();
    let snapshot = controller.snapshot();
    let (resize_calls, responsive_option) = match controller.surface_mut() {
        Some(surface) => (
            surface.resize_calls.drain(..).collect(),
            surface
                .last_options
                .as_ref()
                .and_then(ChartOptions::responsive),
        ),
        None => (Vec::new(), None),
    };
    LayoutTraceOutcome {
        step,
        snapshot,
        resize_calls,
        responsive_option,
    }
}
