pub mod config;
pub mod logging;
pub mod nameserver;

pub use config::load_config;
pub use logging::init_logging;
pub use nameserver::resolve_nameserver;
