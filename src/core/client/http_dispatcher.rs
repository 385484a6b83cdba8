use async_trait::async_trait;
use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use serde_json::Value;

use crate::errors::Result;

/// A single backend call, shaped like the dashboard host's datasource request.
#[derive(Debug, Clone)]
pub struct DatasourceRequest {
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
}

impl DatasourceRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::GET,
            headers: HeaderMap::new(),
        }
    }

    /// GET with `Content-Type: application/json` and no body.
    pub fn get_json(url: impl Into<String>) -> Self {
        let mut req = Self::get(url);
        req.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        req
    }
}

#[derive(Debug, Clone)]
pub struct DatasourceResponse {
    pub status: StatusCode,
    /// Decoded JSON body; `Value::Null` when the body is empty or not JSON.
    pub data: Value,
}

/// HTTP dispatch service the translator sends its requests through.
///
/// Implementations resolve to an error for transport failures and for
/// non-2xx statuses.
#[async_trait]
pub trait HttpDispatcher: Send + Sync {
    async fn request(&self, req: DatasourceRequest) -> Result<DatasourceResponse>;
}
