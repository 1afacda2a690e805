use async_trait::async_trait;
use emaildefense_domain::{DnsAnswer, DomainError, QueryTarget};

/// Sends one query to the resolver named in the target and returns its answer.
///
/// Implementations keep no state between calls: one call, one network exchange,
/// no retries. Transport failures come back as errors; any response code,
/// including failures, comes back as a `DnsAnswer`.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(&self, target: &QueryTarget) -> Result<DnsAnswer, DomainError>;
}
