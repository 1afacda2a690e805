use crate::ports::DnsExchanger;
use emaildefense_domain::{DomainError, MxResult, QueryTarget, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct LookupMxUseCase {
    exchanger: Arc<dyn DnsExchanger>,
}

impl LookupMxUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self { exchanger }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        nameserver: SocketAddr,
    ) -> Result<MxResult, DomainError> {
        let target = QueryTarget::new(domain, RecordType::MX, nameserver)?;
        let answer = self.exchanger.exchange(&target).await?;

        let result = MxResult::from_answer(&answer).inspect_err(|e| {
            warn!(domain = %domain, error = %e, "MX lookup failed");
        })?;

        info!(
            domain = %domain,
            entries = result.entries.len(),
            authenticated = result.authenticated_data,
            "MX lookup completed"
        );

        Ok(result)
    }
}
