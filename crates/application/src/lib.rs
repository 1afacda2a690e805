//! Emaildefense Application Layer
//!
//! The lookups of a mail-security check and the pipeline sequencing them,
//! written against the `DnsExchanger` port.
pub mod ports;
pub mod use_cases;
