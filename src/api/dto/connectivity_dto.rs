use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityStatus {
    Success,
    Error,
}

/// Outcome shown by the datasource configuration page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityResult {
    pub status: ConnectivityStatus,
    pub message: String,
    pub title: String,
}

impl ConnectivityResult {
    pub fn success() -> Self {
        Self {
            status: ConnectivityStatus::Success,
            message: "Data source is working".to_string(),
            title: "Success".to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ConnectivityStatus::Error,
            message: message.into(),
            title: "Error".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ConnectivityStatus::Success
    }
}
