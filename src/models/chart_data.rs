use super::{error::AppError, staleness, timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One (time, value) sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub x: DateTime<Utc>,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: DateTime<Utc>, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named series, points ordered oldest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    /// The most recent point, by position.
    pub fn latest(&self) -> Option<&DataPoint> {
        self.data.last()
    }
}

/// Everything the chart surface draws.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self { datasets }
    }

    /// Parses the `{ "datasets": [{ "label", "data": [{ "x", "y" }] }] }` shape.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::DataError(format!("Invalid chart data: {e}")))
    }

    /// True when no dataset holds a single point.
    pub fn is_empty(&self) -> bool {
        self.datasets.iter().all(|d| d.data.is_empty())
    }

    /// Labels of the datasets whose latest point is past the freshness threshold.
    pub fn stale_labels(&self, now: DateTime<Utc>) -> Vec<&str> {
        self.datasets
            .iter()
            .filter(|d| staleness::dataset_is_stale(d, now))
            .map(|d| d.label.as_str())
            .collect()
    }
}
