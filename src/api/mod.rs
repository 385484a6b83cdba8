//! Types exchanged with the dashboard host

pub mod dto;
