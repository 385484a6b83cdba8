//! Dashboard datasource adapter for the Pepperdata metrics backend.
//!
//! [`QueryTranslator`] turns a dashboard query (time range, point density,
//! targets) into one metric request per visible target, sends them
//! concurrently through an [`HttpDispatcher`], and reshapes the answers
//! into `{target, datapoints}` series.

pub mod api;
pub mod core;
pub mod domain;
pub mod errors;

pub use crate::api::dto::connectivity_dto::{ConnectivityResult, ConnectivityStatus};
pub use crate::api::dto::query_options_dto::{QueryOptions, Target, TimeRange};
pub use crate::api::dto::series_dto::{Datapoint, QueryResponse, Series};
pub use crate::core::client::http_dispatcher::{DatasourceRequest, DatasourceResponse, HttpDispatcher};
pub use crate::core::client::reqwest_dispatcher::ReqwestDispatcher;
pub use crate::core::settings::datasource_settings::DatasourceSettings;
pub use crate::core::template::interpolator::{Interpolator, NoopInterpolator};
pub use crate::core::template::template_variables::TemplateVariables;
pub use crate::domain::query::service::query_translator::QueryTranslator;
pub use crate::errors::{DatasourceError, Result};
