use crate::dns_record::DnsAnswer;
use crate::errors::{DomainError, LookupKind};
use serde::Serialize;

/// TXT-published policies identified by a version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxtPolicy {
    Spf,
    Dmarc,
}

impl TxtPolicy {
    /// Version tag a normalised record must contain.
    pub fn marker(&self) -> &'static str {
        match self {
            TxtPolicy::Spf => "v=spf1",
            TxtPolicy::Dmarc => "v=dmarc1",
        }
    }

    /// Name the policy is published at for `domain`.
    pub fn query_name(&self, domain: &str) -> String {
        match self {
            TxtPolicy::Spf => domain.to_string(),
            TxtPolicy::Dmarc => format!("_dmarc.{domain}"),
        }
    }

    pub fn lookup_kind(&self) -> LookupKind {
        match self {
            TxtPolicy::Spf => LookupKind::Spf,
            TxtPolicy::Dmarc => LookupKind::Dmarc,
        }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        normalized.contains(self.marker())
    }
}

/// Joins the character-strings of one TXT record (no separator), decodes the
/// bytes as UTF-8 (lossy) and lowercases the result.
pub fn normalize_txt<S: AsRef<[u8]>>(segments: &[S]) -> String {
    let joined: Vec<u8> = segments
        .iter()
        .flat_map(|s| s.as_ref().iter().copied())
        .collect();
    String::from_utf8_lossy(&joined).to_lowercase()
}

/// Policy records found at a name. Only records carrying the version tag are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxtPolicyResult {
    pub domain: String,
    pub authenticated_data: bool,
    pub records: Vec<String>,
}

pub type SpfResult = TxtPolicyResult;
pub type DmarcResult = TxtPolicyResult;

impl TxtPolicyResult {
    pub fn from_answer(
        policy: TxtPolicy,
        queried_name: impl Into<String>,
        answer: &DnsAnswer,
    ) -> Result<Self, DomainError> {
        if !answer.is_success() {
            return Err(DomainError::LookupFailed {
                lookup: policy.lookup_kind(),
                rcode: answer.rcode,
            });
        }

        let records = answer
            .txt_records()
            .map(normalize_txt)
            .filter(|record| policy.matches(record))
            .collect();

        Ok(Self {
            domain: queried_name.into(),
            authenticated_data: answer.authenticated_data,
            records,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
