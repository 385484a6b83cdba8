pub mod query_string;
pub mod url_util;
