use std::fmt;

/// Record types the mail-security checks put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    MX,
    TXT,
    TLSA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::TLSA => "TLSA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
