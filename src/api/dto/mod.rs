//! Caller-facing DTOs

pub mod connectivity_dto;
pub mod query_options_dto;
pub mod series_dto;
