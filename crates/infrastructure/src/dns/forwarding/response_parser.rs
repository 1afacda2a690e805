use emaildefense_domain::dns_record::rcode::rcode_name;
use emaildefense_domain::{AnswerRecord, DnsAnswer, DomainError, MxEntry, TlsaEntry};
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

/// Parsed resolver response: the header fields checked by the exchanger plus
/// the decoded answer.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub truncated: bool,

    /// Decoded answer section plus the header facts the checks report on.
    pub answer: DnsAnswer,
}

impl DnsResponse {
    pub fn into_answer(self) -> DnsAnswer {
        self.answer
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Received a query instead of a response".to_string(),
            ));
        }

        let rcode = u16::from(message.response_code());
        let truncated = message.truncated();
        let authenticated_data = message.authentic_data();

        let records: Vec<AnswerRecord> = message.answers().iter().map(Self::decode_record).collect();

        debug!(
            rcode = rcode_name(rcode),
            answers = records.len(),
            authenticated = authenticated_data,
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            truncated,
            answer: DnsAnswer {
                rcode,
                authenticated_data,
                truncated,
                records,
            },
        })
    }

    fn decode_record(record: &Record) -> AnswerRecord {
        match record.data() {
            RData::MX(mx) => AnswerRecord::Mx(MxEntry::new(mx.exchange().to_utf8(), mx.preference())),
            RData::TXT(txt) => {
                AnswerRecord::Txt(txt.txt_data().iter().map(|segment| segment.to_vec()).collect())
            }
            RData::TLSA(tlsa) => AnswerRecord::Tlsa(TlsaEntry::new(
                u8::from(tlsa.cert_usage()),
                u8::from(tlsa.selector()),
                u8::from(tlsa.matching()),
                tlsa.cert_data().to_vec(),
            )),
            _ => AnswerRecord::Other(u16::from(record.record_type())),
        }
    }
}
