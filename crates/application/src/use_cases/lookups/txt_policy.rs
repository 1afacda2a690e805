use crate::ports::DnsExchanger;
use emaildefense_domain::{
    DmarcResult, DomainError, QueryTarget, RecordType, SpfResult, TxtPolicy, TxtPolicyResult,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

async fn lookup_policy(
    exchanger: &dyn DnsExchanger,
    policy: TxtPolicy,
    domain: &str,
    nameserver: SocketAddr,
) -> Result<TxtPolicyResult, DomainError> {
    let name = policy.query_name(domain);
    let target = QueryTarget::new(&name, RecordType::TXT, nameserver)?;
    let answer = exchanger.exchange(&target).await?;

    let result = TxtPolicyResult::from_answer(policy, target.display_name(), &answer)
        .inspect_err(|e| {
            warn!(name = %name, error = %e, "TXT policy lookup failed");
        })?;

    info!(
        name = %name,
        marker = policy.marker(),
        records = result.records.len(),
        authenticated = result.authenticated_data,
        "TXT policy lookup completed"
    );

    Ok(result)
}

/// SPF: TXT at the domain apex, records tagged `v=spf1`.
pub struct LookupSpfUseCase {
    exchanger: Arc<dyn DnsExchanger>,
}

impl LookupSpfUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self { exchanger }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        nameserver: SocketAddr,
    ) -> Result<SpfResult, DomainError> {
        lookup_policy(self.exchanger.as_ref(), TxtPolicy::Spf, domain, nameserver).await
    }
}

/// DMARC: TXT at `_dmarc.<domain>`, records tagged `v=dmarc1`.
pub struct LookupDmarcUseCase {
    exchanger: Arc<dyn DnsExchanger>,
}

impl LookupDmarcUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self { exchanger }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: &str,
        nameserver: SocketAddr,
    ) -> Result<DmarcResult, DomainError> {
        lookup_policy(self.exchanger.as_ref(), TxtPolicy::Dmarc, domain, nameserver).await
    }
}
