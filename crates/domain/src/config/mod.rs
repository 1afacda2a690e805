//! Configuration module for emaildefense
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Which resolver to ask and how long to wait
//! - `check`: Pipeline options (TLSA service, parallel TLSA phase)
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod check;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use check::CheckConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, TransportProtocol};
pub use root::{CliOverrides, Config};
