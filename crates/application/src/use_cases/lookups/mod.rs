pub mod dkim;
pub mod mx;
pub mod tlsa;
pub mod txt_policy;

pub use dkim::ProbeDkimUseCase;
pub use mx::LookupMxUseCase;
pub use tlsa::LookupTlsaUseCase;
pub use txt_policy::{LookupDmarcUseCase, LookupSpfUseCase};
