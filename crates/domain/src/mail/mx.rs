use crate::dns_record::DnsAnswer;
use crate::errors::{DomainError, LookupKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxEntry {
    /// Exchange host, without the trailing root dot. The root itself stays `"."`.
    pub host: String,
    pub preference: u16,
}

impl MxEntry {
    pub fn new(host: impl Into<String>, preference: u16) -> Self {
        let host = host.into();
        let host = match host.strip_suffix('.') {
            Some(stripped) if !stripped.is_empty() => stripped.to_string(),
            _ => host,
        };
        Self { host, preference }
    }

    /// RFC 7505 null MX: the exchange is the root, the domain accepts no mail.
    pub fn is_null(&self) -> bool {
        self.host == "."
    }
}

/// MX answer for a domain, in resolver answer order.
///
/// An empty `entries` list is a valid "accepts no mail" configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MxResult {
    pub authenticated_data: bool,
    pub entries: Vec<MxEntry>,
}

impl MxResult {
    pub fn from_answer(answer: &DnsAnswer) -> Result<Self, DomainError> {
        if !answer.is_success() {
            return Err(DomainError::LookupFailed {
                lookup: LookupKind::Mx,
                rcode: answer.rcode,
            });
        }

        Ok(Self {
            authenticated_data: answer.authenticated_data,
            entries: answer.mx_records().cloned().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The domain published only null MX records.
    pub fn is_null_mx(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(MxEntry::is_null)
    }

    /// Hosts needing a TLSA follow-up, one per entry, in answer order.
    /// Null MX entries name no host and are left out.
    pub fn hosts(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.is_null())
            .map(|e| e.host.as_str())
            .collect()
    }
}
