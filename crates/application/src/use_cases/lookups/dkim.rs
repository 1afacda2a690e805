use crate::ports::DnsExchanger;
use emaildefense_domain::dns_record::rcode::rcode_name;
use emaildefense_domain::{DkimPresenceResult, DomainError, QueryTarget, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, instrument};

/// Probes whether `_domainkey.<domain>` exists. The response code is the result;
/// only transport failures are errors.
pub struct ProbeDkimUseCase {
    exchanger: Arc<dyn DnsExchanger>,
}

impl ProbeDkimUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self { exchanger }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        nameserver: SocketAddr,
    ) -> Result<DkimPresenceResult, DomainError> {
        let name = DkimPresenceResult::query_name(domain);
        let target = QueryTarget::new(&name, RecordType::TXT, nameserver)?;
        let answer = self.exchanger.exchange(&target).await?;

        let result = DkimPresenceResult::from_answer(target.display_name(), &answer);

        info!(
            name = %name,
            rcode = rcode_name(answer.rcode),
            status = %result.status,
            "DKIM presence probe completed"
        );

        Ok(result)
    }
}
