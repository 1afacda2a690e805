use crate::errors::DomainError;
use crate::mail::{DkimPresenceResult, DmarcResult, MxResult, SpfResult, TlsaResult};
use serde::{Serialize, Serializer};

/// Either a lookup's result or the error that replaced it.
///
/// Serialises as `{"result": ..., "error": ...}` with exactly one side non-null,
/// so one failed lookup never prevents the rest of the report from being written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOutcome<T> {
    pub result: Option<T>,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<DomainError>,
}

impl<T> LookupOutcome<T> {
    pub fn ok(result: T) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn failed(error: DomainError) -> Self {
        Self {
            result: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

impl<T> From<Result<T, DomainError>> for LookupOutcome<T> {
    fn from(value: Result<T, DomainError>) -> Self {
        match value {
            Ok(result) => Self::ok(result),
            Err(error) => Self::failed(error),
        }
    }
}

fn serialize_error<S: Serializer>(
    error: &Option<DomainError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// TLSA outcome for one MX host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TlsaCheck {
    pub host: String,
    #[serde(flatten)]
    pub outcome: LookupOutcome<TlsaResult>,
}

/// Everything one check of a domain produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub domain: String,
    pub nameserver: String,
    pub mx: LookupOutcome<MxResult>,
    pub spf: LookupOutcome<SpfResult>,
    pub dmarc: LookupOutcome<DmarcResult>,
    pub dkim: LookupOutcome<DkimPresenceResult>,
    pub tlsa: Vec<TlsaCheck>,
    /// No TLSA lookups ran because MX failed or listed no hosts.
    pub tlsa_skipped: bool,
}

impl Report {
    /// Number of lookups that ended in an error.
    pub fn failure_count(&self) -> usize {
        let top = [
            self.mx.error.is_some(),
            self.spf.error.is_some(),
            self.dmarc.error.is_some(),
            self.dkim.error.is_some(),
        ];
        top.iter().filter(|failed| **failed).count()
            + self.tlsa.iter().filter(|t| t.outcome.error.is_some()).count()
    }
}
