pub mod client;
pub mod logging;
pub mod settings;
pub mod template;
pub mod util;
