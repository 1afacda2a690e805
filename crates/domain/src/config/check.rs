use crate::mail::TlsaService;
use serde::{Deserialize, Serialize};

/// Options of the check pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Port part of the TLSA name (default: 25, SMTP)
    #[serde(default = "default_tlsa_port")]
    pub tlsa_port: u16,

    /// Protocol part of the TLSA name (default: "tcp")
    #[serde(default = "default_tlsa_protocol")]
    pub tlsa_protocol: String,

    /// Run the per-host TLSA lookups concurrently
    #[serde(default)]
    pub parallel_tlsa: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tlsa_port: default_tlsa_port(),
            tlsa_protocol: default_tlsa_protocol(),
            parallel_tlsa: false,
        }
    }
}

impl CheckConfig {
    pub fn tlsa_service(&self) -> TlsaService {
        TlsaService::new(self.tlsa_port, self.tlsa_protocol.clone())
    }
}

fn default_tlsa_port() -> u16 {
    25
}

fn default_tlsa_protocol() -> String {
    "tcp".to_string()
}
