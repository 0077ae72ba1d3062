use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One labeled series. Each point occupies one tick on the horizontal axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

impl ChartDataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    /// Builds a dataset from plain values, using the index as `x`.
    #[must_use]
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Self {
        let data = values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(index as f64, *value))
            .collect();
        Self::new(label, data)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Data payload handed to the chart surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    #[must_use]
    pub fn new(datasets: Vec<ChartDataset>) -> Self {
        Self { datasets }
    }

    /// Number of horizontal tick positions the data needs: the length of the
    /// longest dataset, `0` when there is none.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.datasets
            .iter()
            .map(ChartDataset::len)
            .max()
            .unwrap_or(0)
    }

    /// Rejects datasets carrying non-finite coordinates.
    pub fn validate(&self) -> ChartResult<()> {
        for dataset in &self.datasets {
            if let Some(index) = dataset.data.iter().position(|point| !point.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` has a non-finite point at index {index}",
                    dataset.label
                )));
            }
        }
        Ok(())
    }
}
