use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::core::client::http_dispatcher::{DatasourceRequest, DatasourceResponse, HttpDispatcher};
use crate::errors::{transport_error, Result};

/// `HttpDispatcher` backed by a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestDispatcher {
    client: Client,
}

impl Default for ReqwestDispatcher {
    fn default() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl ReqwestDispatcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn try_default() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| transport_error(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl HttpDispatcher for ReqwestDispatcher {
    async fn request(&self, req: DatasourceRequest) -> Result<DatasourceResponse> {
        let DatasourceRequest { url, method, headers } = req;

        debug!(%method, %url, "Sending backend request");
        let resp = self
            .client
            .request(method, &url)
            .headers(headers)
            .send()
            .await?
            .error_for_status()?;

        let status = resp.status();
        let body = resp.bytes().await?;

        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|e| {
                debug!(%url, error = %e, "Response body is not JSON");
                Value::Null
            })
        };

        Ok(DatasourceResponse { status, data })
    }
}
