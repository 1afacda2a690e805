use super::validators::{to_fqdn, validate_domain_name};
use super::{DomainError, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;

/// One DNS exchange: which name, which type, which resolver.
/// Uses `Arc<str>` so the name can be shared with logging and results without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTarget {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub nameserver: SocketAddr,
}

impl QueryTarget {
    /// Builds a target for `name`, normalised to a fully qualified name.
    pub fn new(
        name: &str,
        record_type: RecordType,
        nameserver: SocketAddr,
    ) -> Result<Self, DomainError> {
        validate_domain_name(name)
            .map_err(|e| DomainError::InvalidDomainName(format!("'{name}': {e}")))?;

        Ok(Self {
            name: Arc::from(to_fqdn(name)),
            record_type,
            nameserver,
        })
    }

    /// The queried name without the trailing root dot, as shown in reports.
    pub fn display_name(&self) -> &str {
        self.name.strip_suffix('.').unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google() -> SocketAddr {
        "8.8.8.8:53".parse().unwrap()
    }

    #[test]
    fn test_target_is_fully_qualified() {
        let target = QueryTarget::new("example.org", RecordType::MX, google()).unwrap();
        assert_eq!(&*target.name, "example.org.");
        assert_eq!(target.display_name(), "example.org");
        assert_eq!(target.record_type, RecordType::MX);
        assert_eq!(target.nameserver, google());
    }

    #[test]
    fn test_target_keeps_existing_root_dot() {
        let target = QueryTarget::new("_dmarc.example.org.", RecordType::TXT, google()).unwrap();
        assert_eq!(&*target.name, "_dmarc.example.org.");
    }

    #[test]
    fn test_target_rejects_empty_name() {
        let err = QueryTarget::new("", RecordType::TXT, google()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDomainName(_)));
    }
}
