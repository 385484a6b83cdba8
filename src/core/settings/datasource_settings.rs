use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::errors::{DatasourceError, Result};

pub const DEFAULT_NAME: &str = "pepperdata";
pub const DEFAULT_KIND: &str = "pepperdata-datasource";

/// Datasource record configured by the dashboard host.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatasourceSettings {
    #[serde(rename = "type")]
    pub kind: String,

    /// Base endpoint every backend URL is built from.
    #[validate(url)]
    pub url: String,

    #[validate(length(min = 1))]
    pub name: String,
}

impl DatasourceSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: DEFAULT_KIND.to_string(),
            url: url.into(),
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Loads `.env` when present, then reads `PDQUERY_URL` (required),
    /// `PDQUERY_NAME` and `PDQUERY_TYPE`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("PDQUERY_URL")
            .map_err(|_| DatasourceError::Config("PDQUERY_URL is not set".to_string()))?;
        let settings = Self {
            kind: env::var("PDQUERY_TYPE").unwrap_or_else(|_| DEFAULT_KIND.to_string()),
            url,
            name: env::var("PDQUERY_NAME").unwrap_or_else(|_| DEFAULT_NAME.to_string()),
        }
        .validated()?;

        debug!(name = %settings.name, url = %settings.url, "Loaded datasource settings");
        Ok(settings)
    }

    /// Returns the settings unchanged when they pass validation.
    pub fn validated(self) -> Result<Self> {
        self.validate()
            .map_err(|e| DatasourceError::Config(format!("Invalid datasource settings: {}", e)))?;
        Ok(self)
    }
}
