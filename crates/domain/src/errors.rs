use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;

/// Which lookup of the pipeline produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Mx,
    Spf,
    Dmarc,
    Tlsa,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Mx => "mx",
            LookupKind::Spf => "spf",
            LookupKind::Dmarc => "dmarc",
            LookupKind::Tlsa => "TLSA",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid nameserver: {0}")]
    InvalidNameserver(String),

    #[error("Timeout waiting for response from {server}")]
    TransportTimeout { server: SocketAddr },

    #[error("Transport error talking to {server}: {message}")]
    TransportIo { server: SocketAddr, message: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    /// The resolver answered, but with a response code that leaves nothing to report.
    #[error("{lookup} record lookup not successful (rcode {rcode})")]
    LookupFailed { lookup: LookupKind, rcode: u16 },

    #[error("Check deadline exceeded")]
    DeadlineExceeded,
}

impl DomainError {
    /// Failures reaching the resolver at all, as opposed to answers we did not like.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportIo { .. }
                | DomainError::InvalidDnsResponse(_)
                | DomainError::DeadlineExceeded
        )
    }

    /// Response code carried by a lookup failure, if any.
    pub fn rcode(&self) -> Option<u16> {
        match self {
            DomainError::LookupFailed { rcode, .. } => Some(*rcode),
            _ => None,
        }
    }
}
