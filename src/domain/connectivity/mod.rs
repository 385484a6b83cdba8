//! Datasource reachability check

pub mod service;
