pub mod connectivity;
pub mod query;
