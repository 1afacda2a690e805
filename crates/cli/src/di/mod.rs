use emaildefense_application::ports::DnsExchanger;
use emaildefense_application::use_cases::{CheckDomainUseCase, CheckOptions};
use emaildefense_domain::Config;
use emaildefense_infrastructure::dns::WireDnsExchanger;
use std::sync::Arc;

/// Wires the wire-level exchanger into the check pipeline.
pub struct UseCases {
    pub check_domain: CheckDomainUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let exchanger: Arc<dyn DnsExchanger> =
            Arc::new(WireDnsExchanger::from_config(&config.resolver));

        let options = CheckOptions {
            tlsa_service: config.check.tlsa_service(),
            parallel_tlsa: config.check.parallel_tlsa,
            deadline: config.resolver.deadline(),
        };

        Self {
            check_domain: CheckDomainUseCase::new(exchanger, options),
        }
    }
}
