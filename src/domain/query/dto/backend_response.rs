//! Wire model of the backend's metric endpoint response

use serde::Deserialize;

/// `{ "data": { "allSeries": [...] } }`
#[derive(Debug, Clone, Deserialize)]
pub struct BackendResponse {
    pub data: BackendPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendPayload {
    #[serde(rename = "allSeries", default)]
    pub all_series: Vec<BackendSeries>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSeries {
    #[serde(rename = "seriesId")]
    pub series_id: String,

    /// `null` entries are points the backend omitted.
    #[serde(rename = "dataPoints", default)]
    pub data_points: Option<Vec<Option<RawPoint>>>,
}

/// `[value, epochSeconds]`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawPoint(pub Option<f64>, pub f64);
