use super::forwarding::{MessageBuilder, ResponseParser, DEFAULT_EDNS_PAYLOAD};
use super::transport::create_transport;
use async_trait::async_trait;
use emaildefense_application::ports::DnsExchanger;
use emaildefense_domain::config::{ResolverConfig, TransportProtocol};
use emaildefense_domain::dns_record::rcode::rcode_name;
use emaildefense_domain::{DnsAnswer, DomainError, QueryTarget};
use std::time::Duration;
use tracing::{debug, warn};

/// `DnsExchanger` speaking DNS on the wire to the resolver named in each target.
///
/// Holds only settings: every exchange opens its own socket, so one instance
/// can serve concurrent lookups.
#[derive(Debug, Clone)]
pub struct WireDnsExchanger {
    protocol: TransportProtocol,
    timeout: Duration,
    edns_payload: u16,
}

impl WireDnsExchanger {
    pub fn new(protocol: TransportProtocol, timeout: Duration) -> Self {
        Self {
            protocol,
            timeout,
            edns_payload: DEFAULT_EDNS_PAYLOAD,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.protocol, config.query_timeout()).with_edns_payload(config.edns_payload)
    }

    pub fn with_edns_payload(mut self, edns_payload: u16) -> Self {
        self.edns_payload = edns_payload;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl DnsExchanger for WireDnsExchanger {
    async fn exchange(&self, target: &QueryTarget) -> Result<DnsAnswer, DomainError> {
        let (id, query) =
            MessageBuilder::build_query_with_id(&target.name, &target.record_type, self.edns_payload)?;

        let transport = create_transport(self.protocol, target.nameserver);

        debug!(
            name = %target.name,
            record_type = %target.record_type,
            server = %target.nameserver,
            protocol = transport.protocol_name(),
            "Sending DNS query"
        );

        let response = transport.send(&query, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, id
            )));
        }

        if parsed.truncated {
            warn!(
                name = %target.name,
                server = %target.nameserver,
                protocol = response.protocol_used,
                "Truncated response, answer set may be incomplete"
            );
        }

        debug!(
            name = %target.name,
            record_type = %target.record_type,
            rcode = rcode_name(parsed.answer.rcode),
            authenticated = parsed.answer.authenticated_data,
            "DNS exchange completed"
        );

        Ok(parsed.into_answer())
    }
}
