use http::StatusCode;
use tracing::{debug, warn};

use crate::api::dto::connectivity_dto::ConnectivityResult;
use crate::core::client::http_dispatcher::{DatasourceRequest, HttpDispatcher};
use crate::core::settings::datasource_settings::DatasourceSettings;
use crate::core::util::url_util::UrlUtil;

/// Well-known static resource probed to confirm the backend is reachable.
pub const CONNECTIVITY_PATH: &str = "favicon.ico";

/// Always resolves: only an HTTP 200 counts as success, anything else is
/// reported as an error result carrying the reason.
pub async fn check_connectivity(
    dispatcher: &dyn HttpDispatcher,
    settings: &DatasourceSettings,
) -> ConnectivityResult {
    let url = UrlUtil::join(&settings.url, CONNECTIVITY_PATH);

    match dispatcher.request(DatasourceRequest::get(url.clone())).await {
        Ok(resp) if resp.status == StatusCode::OK => {
            debug!(%url, datasource = %settings.name, "Connectivity check succeeded");
            ConnectivityResult::success()
        }
        Ok(resp) => {
            warn!(%url, status = %resp.status, "Connectivity check got unexpected status");
            ConnectivityResult::failure(format!(
                "Unexpected status {} from {}",
                resp.status, url
            ))
        }
        Err(err) => {
            warn!(%url, error = %err, "Connectivity check failed");
            ConnectivityResult::failure(err.to_string())
        }
    }
}
