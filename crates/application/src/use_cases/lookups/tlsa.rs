use crate::ports::DnsExchanger;
use emaildefense_domain::{DomainError, QueryTarget, RecordType, TlsaResult, TlsaService};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// TLSA for one MX host, at `_<port>._<protocol>.<host>`.
pub struct LookupTlsaUseCase {
    exchanger: Arc<dyn DnsExchanger>,
    service: TlsaService,
}

impl LookupTlsaUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self::with_service(exchanger, TlsaService::default())
    }

    pub fn with_service(exchanger: Arc<dyn DnsExchanger>, service: TlsaService) -> Self {
        Self { exchanger, service }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        host: &str,
        nameserver: SocketAddr,
    ) -> Result<TlsaResult, DomainError> {
        let name = self.service.query_name(host);
        let target = QueryTarget::new(&name, RecordType::TLSA, nameserver)?;
        let answer = self.exchanger.exchange(&target).await?;

        let result = TlsaResult::from_answer(target.display_name(), &answer).inspect_err(|e| {
            warn!(name = %name, error = %e, "TLSA lookup failed");
        })?;

        info!(
            name = %name,
            entries = result.entries.len(),
            authenticated = result.authenticated_data,
            "TLSA lookup completed"
        );

        Ok(result)
    }
}
