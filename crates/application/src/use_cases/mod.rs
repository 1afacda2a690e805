pub mod check;
pub mod lookups;

// Re-export use cases
pub use check::{CheckDomainUseCase, CheckOptions};
pub use lookups::{
    LookupDmarcUseCase, LookupMxUseCase, LookupSpfUseCase, LookupTlsaUseCase, ProbeDkimUseCase,
};
