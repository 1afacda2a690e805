use super::rcode;
use crate::mail::{MxEntry, TlsaEntry};

/// A single answer-section record, already decoded into what the checks need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    Mx(MxEntry),
    /// Raw character-strings of one TXT record, in wire order. Decoded only
    /// after joining, so a UTF-8 sequence may span two strings.
    Txt(Vec<Vec<u8>>),
    Tlsa(TlsaEntry),
    /// Anything else in the answer section (CNAMEs, signatures, ...), by type code.
    Other(u16),
}

/// Raw result of one resolver exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsAnswer {
    pub rcode: u16,
    /// AD bit copied from the response header.
    pub authenticated_data: bool,
    pub truncated: bool,
    pub records: Vec<AnswerRecord>,
}

impl DnsAnswer {
    pub fn new(rcode: u16, authenticated_data: bool, records: Vec<AnswerRecord>) -> Self {
        Self {
            rcode,
            authenticated_data,
            truncated: false,
            records,
        }
    }

    pub fn is_success(&self) -> bool {
        rcode::is_success(self.rcode)
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == rcode::NX_DOMAIN
    }

    pub fn mx_records(&self) -> impl Iterator<Item = &MxEntry> {
        self.records.iter().filter_map(|r| match r {
            AnswerRecord::Mx(mx) => Some(mx),
            _ => None,
        })
    }

    pub fn txt_records(&self) -> impl Iterator<Item = &[Vec<u8>]> {
        self.records.iter().filter_map(|r| match r {
            AnswerRecord::Txt(segments) => Some(segments.as_slice()),
            _ => None,
        })
    }

    pub fn tlsa_records(&self) -> impl Iterator<Item = &TlsaEntry> {
        self.records.iter().filter_map(|r| match r {
            AnswerRecord::Tlsa(tlsa) => Some(tlsa),
            _ => None,
        })
    }
}
