#![allow(dead_code)]

use async_trait::async_trait;
use emaildefense_application::ports::DnsExchanger;
use emaildefense_domain::dns_record::rcode;
use emaildefense_domain::{
    AnswerRecord, DnsAnswer, DomainError, MxEntry, QueryTarget, RecordType, TlsaEntry,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

type Key = (String, RecordType);

/// Scripted resolver: answers per (name, type), NXDOMAIN for anything unscripted.
#[derive(Clone, Default)]
pub struct MockDnsExchanger {
    responses: Arc<RwLock<HashMap<Key, Result<DnsAnswer, DomainError>>>>,
    delays: Arc<RwLock<HashMap<Key, Duration>>>,
    calls: Arc<RwLock<Vec<QueryTarget>>>,
}

fn key(name: &str, record_type: RecordType) -> Key {
    let name = name.strip_suffix('.').unwrap_or(name).to_lowercase();
    (name, record_type)
}

impl MockDnsExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_answer(&self, name: &str, record_type: RecordType, answer: DnsAnswer) {
        self.responses
            .write()
            .await
            .insert(key(name, record_type), Ok(answer));
    }

    pub async fn set_error(&self, name: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(key(name, record_type), Err(error));
    }

    pub async fn set_delay(&self, name: &str, record_type: RecordType, delay: Duration) {
        self.delays
            .write()
            .await
            .insert(key(name, record_type), delay);
    }

    pub async fn set_rcode(&self, name: &str, record_type: RecordType, code: u16) {
        self.set_answer(name, record_type, DnsAnswer::new(code, false, Vec::new()))
            .await;
    }

    pub async fn set_mx(&self, domain: &str, hosts: &[(&str, u16)]) {
        let records = hosts
            .iter()
            .map(|(host, pref)| AnswerRecord::Mx(MxEntry::new(format!("{host}."), *pref)))
            .collect();
        self.set_answer(domain, RecordType::MX, DnsAnswer::new(rcode::NO_ERROR, false, records))
            .await;
    }

    pub async fn set_txt(&self, name: &str, records: &[&[&str]]) {
        let records = records
            .iter()
            .map(|segments| {
                AnswerRecord::Txt(segments.iter().map(|s| s.as_bytes().to_vec()).collect())
            })
            .collect();
        self.set_answer(name, RecordType::TXT, DnsAnswer::new(rcode::NO_ERROR, false, records))
            .await;
    }

    pub async fn set_tlsa(&self, name: &str, entries: Vec<TlsaEntry>) {
        let records = entries.into_iter().map(AnswerRecord::Tlsa).collect();
        self.set_answer(name, RecordType::TLSA, DnsAnswer::new(rcode::NO_ERROR, true, records))
            .await;
    }

    pub async fn calls(&self) -> Vec<QueryTarget> {
        self.calls.read().await.clone()
    }

    /// Names queried for `record_type`, without the root dot, in call order.
    pub async fn queried(&self, record_type: RecordType) -> Vec<String> {
        self.calls
            .read()
            .await
            .iter()
            .filter(|t| t.record_type == record_type)
            .map(|t| t.display_name().to_string())
            .collect()
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(&self, target: &QueryTarget) -> Result<DnsAnswer, DomainError> {
        self.calls.write().await.push(target.clone());

        let k = key(&target.name, target.record_type);
        let delay = self.delays.read().await.get(&k).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .read()
            .await
            .get(&k)
            .cloned()
            .unwrap_or_else(|| Ok(DnsAnswer::new(rcode::NX_DOMAIN, false, Vec::new())))
    }
}

pub fn resolver() -> SocketAddr {
    "192.0.2.53:53".parse().unwrap()
}
