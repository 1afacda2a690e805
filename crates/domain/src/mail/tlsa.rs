use crate::dns_record::DnsAnswer;
use crate::errors::{DomainError, LookupKind};
use serde::{Serialize, Serializer};

/// One certificate association (RFC 6698 §2.1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsaEntry {
    pub usage: u8,
    pub selector: u8,
    pub matching_type: u8,
    #[serde(serialize_with = "serialize_hex")]
    pub certificate_association_data: Vec<u8>,
}

impl TlsaEntry {
    pub fn new(usage: u8, selector: u8, matching_type: u8, data: Vec<u8>) -> Self {
        Self {
            usage,
            selector,
            matching_type,
            certificate_association_data: data,
        }
    }

    pub fn usage_name(&self) -> &'static str {
        match self.usage {
            0 => "PKIX-TA",
            1 => "PKIX-EE",
            2 => "DANE-TA",
            3 => "DANE-EE",
            _ => "private",
        }
    }

    pub fn selector_name(&self) -> &'static str {
        match self.selector {
            0 => "Cert",
            1 => "SPKI",
            _ => "private",
        }
    }

    pub fn matching_name(&self) -> &'static str {
        match self.matching_type {
            0 => "Full",
            1 => "SHA2-256",
            2 => "SHA2-512",
            _ => "private",
        }
    }

    pub fn data_hex(&self) -> String {
        hex::encode(&self.certificate_association_data)
    }
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

/// Port and transport a TLSA lookup is published for (`_<port>._<protocol>.<host>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsaService {
    pub port: u16,
    pub protocol: String,
}

impl TlsaService {
    pub fn new(port: u16, protocol: impl Into<String>) -> Self {
        Self {
            port,
            protocol: protocol.into(),
        }
    }

    pub fn query_name(&self, host: &str) -> String {
        format!("_{}._{}.{}", self.port, self.protocol, host)
    }
}

impl Default for TlsaService {
    /// SMTP: `_25._tcp`.
    fn default() -> Self {
        Self::new(25, "tcp")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsaResult {
    pub domain: String,
    pub authenticated_data: bool,
    pub entries: Vec<TlsaEntry>,
}

impl TlsaResult {
    pub fn from_answer(
        queried_name: impl Into<String>,
        answer: &DnsAnswer,
    ) -> Result<Self, DomainError> {
        if !answer.is_success() {
            return Err(DomainError::LookupFailed {
                lookup: LookupKind::Tlsa,
                rcode: answer.rcode,
            });
        }

        Ok(Self {
            domain: queried_name.into(),
            authenticated_data: answer.authenticated_data,
            entries: answer.tlsa_records().cloned().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
