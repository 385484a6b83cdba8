use futures::future::try_join_all;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::api::dto::connectivity_dto::ConnectivityResult;
use crate::api::dto::query_options_dto::{QueryOptions, Target};
use crate::api::dto::series_dto::{QueryResponse, Series};
use crate::core::client::http_dispatcher::{DatasourceRequest, HttpDispatcher};
use crate::core::settings::datasource_settings::DatasourceSettings;
use crate::core::template::interpolator::Interpolator;
use crate::core::util::query_string::parse_query_string;
use crate::core::util::url_util::UrlUtil;
use crate::domain::connectivity::service::connectivity_service;
use crate::domain::query::dto::backend_response::BackendResponse;
use crate::domain::query::dto::dashboard_query_params::DashboardQueryParams;
use crate::domain::query::service::result_transformer::transform_result;
use crate::domain::query::service::sampling::derive_sample;
use crate::errors::Result;

/// Metric endpoint path under each cluster.
pub const QUERY_PATH: &str = "/api/m?";

/// Turns dashboard queries into backend metric requests and reshapes the
/// answers into display series.
pub struct QueryTranslator<D, I> {
    settings: DatasourceSettings,
    dispatcher: D,
    interpolator: I,
}

impl<D, I> QueryTranslator<D, I>
where
    D: HttpDispatcher,
    I: Interpolator,
{
    pub fn new(settings: DatasourceSettings, dispatcher: D, interpolator: I) -> Self {
        Self {
            settings,
            dispatcher,
            interpolator,
        }
    }

    pub fn settings(&self) -> &DatasourceSettings {
        &self.settings
    }

    /// Issues one request per visible target concurrently and concatenates
    /// the resulting series in target order. Any failed request fails the
    /// whole query.
    pub async fn execute(&self, options: &QueryOptions) -> Result<QueryResponse> {
        let visible: Vec<&Target> = options.targets.iter().filter(|t| !t.hide).collect();
        if visible.is_empty() {
            debug!("No visible targets; skipping backend calls");
            return Ok(QueryResponse::empty());
        }

        options.validate()?;

        let sample = derive_sample(options.range.span_ms(), options.max_data_points);
        let dashboard = DashboardQueryParams::from_range(&options.range, sample, &self.interpolator);

        info!(
            datasource = %self.settings.name,
            targets = visible.len(),
            sample,
            "Dispatching dashboard query"
        );

        let per_target = try_join_all(
            visible
                .into_iter()
                .map(|target| self.fetch_series(&dashboard, target)),
        )
        .await?;

        Ok(QueryResponse {
            data: per_target.into_iter().flatten().collect(),
        })
    }

    pub async fn check_connectivity(&self) -> ConnectivityResult {
        connectivity_service::check_connectivity(&self.dispatcher, &self.settings).await
    }

    /// Builds the GET request for one target: shared window parameters
    /// followed by the target's own interpolated parameters.
    pub fn build_request(&self, dashboard: &DashboardQueryParams, target: &Target) -> DatasourceRequest {
        let params = parse_query_string(&target.raw_dashboard_query)
            .map_values(|value| self.interpolator.interpolate(value));

        let mut query = dashboard.to_query_string();
        if !params.is_empty() {
            query.push('&');
            query.push_str(&params.to_query_string());
        }

        let url = UrlUtil::build_url(&self.settings.url, &target.cluster, QUERY_PATH, &query);
        debug!(%url, cluster = %target.cluster, "Built backend request");

        DatasourceRequest::get_json(url)
    }

    async fn fetch_series(&self, dashboard: &DashboardQueryParams, target: &Target) -> Result<Vec<Series>> {
        let req = self.build_request(dashboard, target);
        let url = req.url.clone();

        let resp = self.dispatcher.request(req).await?;
        let body: BackendResponse = serde_json::from_value(resp.data).map_err(|e| {
            warn!(%url, error = %e, "Backend response has unexpected shape");
            e
        })?;

        let series = transform_result(body, target.effective_alias());
        debug!(%url, series = series.len(), "Transformed backend response");
        Ok(series)
    }
}
