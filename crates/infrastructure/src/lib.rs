//! Emaildefense Infrastructure Layer
//!
//! Wire-level resolver client: query encoding and response decoding with
//! `hickory-proto`, UDP and TCP transports, and the `DnsExchanger` adapter.
pub mod dns;
