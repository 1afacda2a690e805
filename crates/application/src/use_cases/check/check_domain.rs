use crate::ports::DnsExchanger;
use crate::use_cases::lookups::{
    LookupDmarcUseCase, LookupMxUseCase, LookupSpfUseCase, LookupTlsaUseCase, ProbeDkimUseCase,
};
use emaildefense_domain::{
    DomainError, LookupOutcome, MxResult, Report, TlsaCheck, TlsaResult, TlsaService,
};
use futures::future::join_all;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, instrument};

/// Pipeline options.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub tlsa_service: TlsaService,
    /// Run the per-host TLSA lookups concurrently.
    pub parallel_tlsa: bool,
    /// Budget for the whole check.
    pub deadline: Duration,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            tlsa_service: TlsaService::default(),
            parallel_tlsa: false,
            deadline: Duration::from_secs(30),
        }
    }
}

/// Runs MX, then SPF, DMARC and the DKIM probe, then TLSA per MX host.
///
/// Every lookup's error stays in its own report field. The only dependency is
/// TLSA on MX: no MX hosts (failure or empty answer) means no TLSA lookups.
pub struct CheckDomainUseCase {
    mx: LookupMxUseCase,
    spf: LookupSpfUseCase,
    dmarc: LookupDmarcUseCase,
    dkim: ProbeDkimUseCase,
    tlsa: LookupTlsaUseCase,
    options: CheckOptions,
}

impl CheckDomainUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>, options: CheckOptions) -> Self {
        Self {
            mx: LookupMxUseCase::new(exchanger.clone()),
            spf: LookupSpfUseCase::new(exchanger.clone()),
            dmarc: LookupDmarcUseCase::new(exchanger.clone()),
            dkim: ProbeDkimUseCase::new(exchanger.clone()),
            tlsa: LookupTlsaUseCase::with_service(exchanger, options.tlsa_service.clone()),
            options,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str, nameserver: SocketAddr) -> Report {
        let deadline = Instant::now() + self.options.deadline;

        let mx: LookupOutcome<MxResult> =
            within(deadline, self.mx.execute(domain, nameserver)).await.into();
        let spf = within(deadline, self.spf.execute(domain, nameserver)).await.into();
        let dmarc = within(deadline, self.dmarc.execute(domain, nameserver)).await.into();
        let dkim = within(deadline, self.dkim.execute(domain, nameserver)).await.into();

        let hosts: Vec<String> = mx
            .result
            .as_ref()
            .map(|r| r.hosts().into_iter().map(str::to_string).collect())
            .unwrap_or_default();

        let tlsa_skipped = hosts.is_empty();
        let tlsa = if tlsa_skipped {
            debug!(domain = %domain, "No MX hosts, skipping TLSA phase");
            Vec::new()
        } else {
            self.check_tlsa(&hosts, nameserver, deadline).await
        };

        let report = Report {
            domain: domain.to_string(),
            nameserver: nameserver.to_string(),
            mx,
            spf,
            dmarc,
            dkim,
            tlsa,
            tlsa_skipped,
        };

        info!(
            domain = %domain,
            failures = report.failure_count(),
            tlsa_hosts = report.tlsa.len(),
            "Domain check completed"
        );

        report
    }

    /// One lookup per host; results line up with `hosts` and a failing host
    /// never affects its siblings.
    async fn check_tlsa(
        &self,
        hosts: &[String],
        nameserver: SocketAddr,
        deadline: Instant,
    ) -> Vec<TlsaCheck> {
        if self.options.parallel_tlsa {
            let lookups = hosts.iter().map(|host| self.check_tlsa_host(host, nameserver, deadline));
            join_all(lookups).await
        } else {
            let mut checks = Vec::with_capacity(hosts.len());
            for host in hosts {
                checks.push(self.check_tlsa_host(host, nameserver, deadline).await);
            }
            checks
        }
    }

    async fn check_tlsa_host(
        &self,
        host: &str,
        nameserver: SocketAddr,
        deadline: Instant,
    ) -> TlsaCheck {
        let outcome: LookupOutcome<TlsaResult> =
            within(deadline, self.tlsa.execute(host, nameserver)).await.into();
        TlsaCheck {
            host: host.to_string(),
            outcome,
        }
    }
}

async fn within<T, F>(deadline: Instant, lookup: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    timeout_at(deadline, lookup)
        .await
        .unwrap_or(Err(DomainError::DeadlineExceeded))
}
