use super::{CheckConfig, ConfigError, LoggingConfig, ResolverConfig, TransportProtocol};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MIN_EDNS_PAYLOAD: u16 = 512;

/// Main configuration, loaded from an optional TOML file and then overridden by flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; `None` keeps the file or default value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub nameserver: Option<String>,
    pub protocol: Option<TransportProtocol>,
    pub query_timeout_ms: Option<u64>,
    pub deadline_ms: Option<u64>,
    pub tlsa_port: Option<u16>,
    pub parallel_tlsa: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(nameserver) = overrides.nameserver {
            self.resolver.nameserver = nameserver;
        }
        if let Some(protocol) = overrides.protocol {
            self.resolver.protocol = protocol;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(deadline) = overrides.deadline_ms {
            self.resolver.deadline_ms = deadline;
        }
        if let Some(port) = overrides.tlsa_port {
            self.check.tlsa_port = port;
        }
        if let Some(parallel) = overrides.parallel_tlsa {
            self.check.parallel_tlsa = parallel;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.nameserver.trim().is_empty() {
            return Err(ConfigError::Validation(
                "resolver.nameserver cannot be empty".to_string(),
            ));
        }
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.resolver.deadline_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.deadline_ms must be greater than 0".to_string(),
            ));
        }
        if self.resolver.edns_payload < MIN_EDNS_PAYLOAD {
            return Err(ConfigError::Validation(format!(
                "resolver.edns_payload must be at least {MIN_EDNS_PAYLOAD}"
            )));
        }
        if self.check.tlsa_protocol.is_empty()
            || !self
                .check
                .tlsa_protocol
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::Validation(format!(
                "check.tlsa_protocol '{}' is not a valid protocol label",
                self.check.tlsa_protocol
            )));
        }
        if !matches!(
            self.logging.level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid level",
                self.logging.level
            )));
        }
        Ok(())
    }
}
