#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::tlsa::{CertUsage, Matching, Selector};
use hickory_proto::rr::rdata::{MX, TLSA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// Builds the reply for a decoded query; `None` drops the query unanswered.
pub type Responder = Arc<dyn Fn(&Message) -> Option<Message> + Send + Sync>;

/// Local resolver stand-in answering on 127.0.0.1 with scripted messages.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts a UDP server on an ephemeral port.
    pub async fn start_udp(responder: Responder) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let log = received.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let query = buf[..len].to_vec();
                        log.lock().unwrap().push(query.clone());
                        if let Some(bytes) = Self::respond(&responder, &query) {
                            let _ = socket.send_to(&bytes, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Starts a TCP server on an ephemeral port (length-prefixed framing).
    pub async fn start_tcp(responder: Responder) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let log = received.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        let mut len_buf = [0u8; 2];
                        if stream.read_exact(&mut len_buf).await.is_err() {
                            continue;
                        }
                        let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                        if stream.read_exact(&mut query).await.is_err() {
                            continue;
                        }
                        log.lock().unwrap().push(query.clone());
                        if let Some(bytes) = Self::respond(&responder, &query) {
                            let mut frame = (bytes.len() as u16).to_be_bytes().to_vec();
                            frame.extend_from_slice(&bytes);
                            let _ = stream.write_all(&frame).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    fn respond(responder: &Responder, query: &[u8]) -> Option<Vec<u8>> {
        let query = Message::from_vec(query).ok()?;
        let response = responder(&query)?;
        response.to_vec().ok()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Raw query bytes received so far.
    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Empty NOERROR response echoing the question section.
pub fn reply_to(query: &Message) -> Message {
    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(query.recursion_desired());
    response.set_recursion_available(true);
    for q in query.queries() {
        response.add_query(q.clone());
    }
    response
}

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn mx_record(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::MX(MX::new(preference, name(exchange))))
}

pub fn txt_record(owner: &str, segments: &[&str]) -> Record {
    let segments = segments.iter().map(|s| s.to_string()).collect();
    Record::from_rdata(name(owner), 300, RData::TXT(TXT::new(segments)))
}

pub fn txt_record_bytes(owner: &str, segments: &[&[u8]]) -> Record {
    Record::from_rdata(name(owner), 300, RData::TXT(TXT::from_bytes(segments.to_vec())))
}

pub fn tlsa_record(owner: &str, usage: u8, selector: u8, matching: u8, data: &[u8]) -> Record {
    let tlsa = TLSA::new(
        CertUsage::from(usage),
        Selector::from(selector),
        Matching::from(matching),
        data.to_vec(),
    );
    Record::from_rdata(name(owner), 300, RData::TLSA(tlsa))
}
