// Dispatch seam
pub mod http_dispatcher;

// Production client
pub mod reqwest_dispatcher;
