use crate::dns_record::{rcode, DnsAnswer};
use serde::{Serialize, Serializer};
use std::fmt;

/// Classification of the `_domainkey` probe's response code.
///
/// Total over `u16`: codes without a name keep their numeric value in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceStatus {
    Success,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u16),
}

impl PresenceStatus {
    pub fn from_rcode(code: u16) -> Self {
        match code {
            rcode::NO_ERROR => PresenceStatus::Success,
            rcode::FORM_ERR => PresenceStatus::FormatError,
            rcode::SERV_FAIL => PresenceStatus::ServerFailure,
            rcode::NX_DOMAIN => PresenceStatus::NameError,
            rcode::NOT_IMP => PresenceStatus::NotImplemented,
            rcode::REFUSED => PresenceStatus::Refused,
            other => PresenceStatus::Unknown(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            PresenceStatus::Success => rcode::NO_ERROR,
            PresenceStatus::FormatError => rcode::FORM_ERR,
            PresenceStatus::ServerFailure => rcode::SERV_FAIL,
            PresenceStatus::NameError => rcode::NX_DOMAIN,
            PresenceStatus::NotImplemented => rcode::NOT_IMP,
            PresenceStatus::Refused => rcode::REFUSED,
            PresenceStatus::Unknown(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Success => "Success",
            PresenceStatus::FormatError => "FormatError",
            PresenceStatus::ServerFailure => "ServerFailure",
            PresenceStatus::NameError => "NameError",
            PresenceStatus::NotImplemented => "NotImplemented",
            PresenceStatus::Refused => "Refused",
            PresenceStatus::Unknown(_) => "Unknown",
        }
    }

    /// The `_domainkey` namespace exists.
    pub fn is_present(&self) -> bool {
        matches!(self, PresenceStatus::Success)
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresenceStatus::Unknown(code) => write!(f, "Unknown({code})"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl Serialize for PresenceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of the `_domainkey` presence probe. Never carries record payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DkimPresenceResult {
    pub domain: String,
    pub authenticated_data: bool,
    pub status: PresenceStatus,
    /// Raw response code behind `status`.
    pub code: u16,
}

impl DkimPresenceResult {
    pub fn from_answer(queried_name: impl Into<String>, answer: &DnsAnswer) -> Self {
        let status = PresenceStatus::from_rcode(answer.rcode);
        Self {
            domain: queried_name.into(),
            authenticated_data: answer.authenticated_data,
            status,
            code: status.code(),
        }
    }

    pub fn query_name(domain: &str) -> String {
        format!("_domainkey.{domain}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defined_codes() {
        assert_eq!(PresenceStatus::from_rcode(0), PresenceStatus::Success);
        assert_eq!(PresenceStatus::from_rcode(1), PresenceStatus::FormatError);
        assert_eq!(PresenceStatus::from_rcode(2), PresenceStatus::ServerFailure);
        assert_eq!(PresenceStatus::from_rcode(3), PresenceStatus::NameError);
        assert_eq!(PresenceStatus::from_rcode(4), PresenceStatus::NotImplemented);
        assert_eq!(PresenceStatus::from_rcode(5), PresenceStatus::Refused);
    }

    #[test]
    fn test_classification_is_total_and_preserves_code() {
        for code in 0..=4095u16 {
            let status = PresenceStatus::from_rcode(code);
            assert_eq!(status.code(), code, "code {code} not preserved");
            if code > 5 {
                assert_eq!(status, PresenceStatus::Unknown(code));
            }
        }
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(PresenceStatus::NameError.to_string(), "NameError");
        assert_eq!(PresenceStatus::Unknown(9).to_string(), "Unknown(9)");

        let result = DkimPresenceResult::from_answer(
            "_domainkey.example.org",
            &DnsAnswer::new(rcode::NX_DOMAIN, true, Vec::new()),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "NameError");
        assert_eq!(json["code"], 3);
        assert_eq!(json["authenticated_data"], true);
        assert!(!result.status.is_present());
    }

    #[test]
    fn test_query_name() {
        assert_eq!(
            DkimPresenceResult::query_name("example.org"),
            "_domainkey.example.org"
        );
    }
}
