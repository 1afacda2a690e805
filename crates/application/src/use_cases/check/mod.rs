pub mod check_domain;

pub use check_domain::{CheckDomainUseCase, CheckOptions};
