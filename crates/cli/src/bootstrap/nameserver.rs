use emaildefense_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

/// Turns the configured nameserver into a socket address.
///
/// Accepts `1.1.1.1`, `1.1.1.1:5353`, `[2606:4700::1111]:53`, a bare IPv6
/// address, or a host name (optionally `host:port`). Host names are resolved
/// once through the system resolver and the first address wins.
pub async fn resolve_nameserver(
    nameserver: &str,
    default_port: u16,
) -> Result<SocketAddr, DomainError> {
    let nameserver = nameserver.trim();

    if let Some(addr) = parse_literal(nameserver, default_port) {
        return Ok(addr);
    }

    let (host, port) = split_host_port(nameserver, default_port)?;
    let addr = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| DomainError::InvalidNameserver(format!("cannot resolve '{nameserver}': {e}")))?
        .next()
        .ok_or_else(|| {
            DomainError::InvalidNameserver(format!("'{nameserver}' has no addresses"))
        })?;

    debug!(nameserver = %nameserver, resolved = %addr, "Nameserver resolved");
    Ok(addr)
}

fn parse_literal(value: &str, default_port: u16) -> Option<SocketAddr> {
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Some(addr);
    }
    value
        .parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, default_port))
}

fn split_host_port(value: &str, default_port: u16) -> Result<(&str, u16), DomainError> {
    if value.is_empty() {
        return Err(DomainError::InvalidNameserver("empty value".to_string()));
    }
    match value.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => {
            let port = port.parse().map_err(|_| {
                DomainError::InvalidNameserver(format!("invalid port in '{value}'"))
            })?;
            Ok((host, port))
        }
        _ => Ok((value, default_port)),
    }
}
