//! Series DTOs returned to the visualization layer

use serde::{Deserialize, Serialize};

/// `[value, epochMillis]`; a point omitted by the backend is `[null, null]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Datapoint(pub Option<f64>, pub Option<i64>);

impl Datapoint {
    pub const MISSING: Datapoint = Datapoint(None, None);

    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn timestamp_ms(&self) -> Option<i64> {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Display name: the backend series id, or the alias applied to it.
    pub target: String,
    pub datapoints: Vec<Datapoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: Vec<Series>,
}

impl QueryResponse {
    pub fn empty() -> Self {
        Self::default()
    }
}
