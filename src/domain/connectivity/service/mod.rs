pub mod connectivity_service;
