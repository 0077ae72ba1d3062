use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

pub const RESPONSIVE_OPTION_KEY: &str = "responsive";

/// Pass-through chart options forwarded to the surface.
///
/// Keys keep their insertion order. The `responsive` key is owned by the
/// sizing controller and overwritten on every payload push.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartOptions {
    entries: IndexMap<String, Value>,
}

impl ChartOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart options: {e}")))?;
        match value {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            other => Err(ChartError::InvalidData(format!(
                "chart options must be a json object, got `{other}`"
            ))),
        }
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// `responsive` flag as currently stored, if it is a boolean.
    #[must_use]
    pub fn responsive(&self) -> Option<bool> {
        self.get(RESPONSIVE_OPTION_KEY).and_then(Value::as_bool)
    }

    /// Returns a copy with `responsive` forced to the given value.
    #[must_use]
    pub fn with_responsive(&self, responsive: bool) -> Self {
        let mut merged = self.clone();
        merged.insert(RESPONSIVE_OPTION_KEY, responsive);
        merged
    }
}
