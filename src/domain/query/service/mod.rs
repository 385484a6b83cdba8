//! Query translation and result reshaping

pub mod query_translator;
pub mod result_transformer;
pub mod sampling;
