pub mod backend_response;
pub mod dashboard_query_params;
