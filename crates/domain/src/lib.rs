//! Emaildefense Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod mail;
pub mod report;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::QueryTarget;
pub use dns_record::{AnswerRecord, DnsAnswer, RecordType};
pub use errors::{DomainError, LookupKind};
pub use mail::{
    DkimPresenceResult, DmarcResult, MxEntry, MxResult, PresenceStatus, SpfResult, TlsaEntry,
    TlsaResult, TlsaService, TxtPolicy, TxtPolicyResult,
};
pub use report::{LookupOutcome, Report, TlsaCheck};
