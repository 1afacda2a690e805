//! Mail-security facts derived from DNS answers.
//!
//! - `mx`: mail exchangers and the hosts that feed the TLSA phase
//! - `txt_policy`: SPF and DMARC TXT reassembly and filtering
//! - `dkim`: `_domainkey` presence classification
//! - `tlsa`: DANE certificate associations for SMTP

pub mod dkim;
pub mod mx;
pub mod tlsa;
pub mod txt_policy;

pub use dkim::{DkimPresenceResult, PresenceStatus};
pub use mx::{MxEntry, MxResult};
pub use tlsa::{TlsaEntry, TlsaResult, TlsaService};
pub use txt_policy::{normalize_txt, DmarcResult, SpfResult, TxtPolicy, TxtPolicyResult};
