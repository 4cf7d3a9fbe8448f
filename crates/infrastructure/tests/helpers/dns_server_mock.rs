#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// One answer record the mock puts in its responses.
#[derive(Debug, Clone)]
pub enum MockRecord {
    A(Ipv4Addr, u32),
    Aaaa(Ipv6Addr, u32),
    Txt(String, u32),
    Cname(String, u32),
    Ns(String, u32),
}

/// How the mock answers a given question name.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Answer(Vec<MockRecord>),
    NxDomain,
    /// Reply with a matching ID but an undecodable body
    Garbage,
    /// Never reply
    Drop,
    /// TC bit set, no records
    Truncated,
}

/// Mock DNS server for tests
///
/// Answers each question from a table keyed by (lower-case) name; unknown
/// names get a single A record 93.184.216.34 with TTL 60.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start on an ephemeral localhost port.
    pub async fn start(behaviors: HashMap<String, MockBehavior>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_task = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let query = &buf[..len];
                            let Some((name, question_end)) = Self::parse_question(query) else {
                                continue;
                            };
                            received_task.lock().unwrap().push(name.clone());

                            let behavior = behaviors
                                .get(&name.to_ascii_lowercase())
                                .cloned()
                                .unwrap_or_else(|| MockBehavior::Answer(vec![MockRecord::A(
                                    Ipv4Addr::new(93, 184, 216, 34),
                                    60,
                                )]));

                            if let Some(response) = Self::build_response(query, question_end, &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn start_default() -> Result<Self, std::io::Error> {
        Self::start(HashMap::new()).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Question names received so far, in arrival order
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Question name (dotted, no trailing dot) and offset just past the question.
    pub fn parse_question(query: &[u8]) -> Option<(String, usize)> {
        if query.len() < 12 {
            return None;
        }
        let mut labels = Vec::new();
        let mut pos = 12;
        loop {
            let len = *query.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            let label = query.get(pos..pos + len)?;
            labels.push(String::from_utf8_lossy(label).into_owned());
            pos += len;
        }
        // QTYPE + QCLASS
        let end = pos + 4;
        if query.len() < end {
            return None;
        }
        Some((labels.join("."), end))
    }

    /// Response for `query` according to `behavior`; `None` means stay silent.
    pub fn build_response(query: &[u8], question_end: usize, behavior: &MockBehavior) -> Option<Vec<u8>> {
        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]); // Transaction ID

        match behavior {
            MockBehavior::Drop => None,
            MockBehavior::Garbage => {
                response.extend_from_slice(&[0x81, 0x80]);
                response.extend_from_slice(&[0x00, 0x01, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00]);
                response.extend_from_slice(&[0xde, 0xad]);
                Some(response)
            }
            MockBehavior::Truncated => {
                response.extend_from_slice(&[0x83, 0x80]); // QR, TC, RD, RA
                response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
                response.extend_from_slice(&query[12..question_end]);
                Some(response)
            }
            MockBehavior::NxDomain => {
                response.extend_from_slice(&[0x81, 0x83]); // RCODE=3
                response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
                response.extend_from_slice(&query[12..question_end]);
                Some(response)
            }
            MockBehavior::Answer(records) => {
                response.push(0x81); // QR=1, RD=1
                response.push(0x80); // RA=1, RCODE=0
                response.extend_from_slice(&[0x00, 0x01]);
                response.extend_from_slice(&(records.len() as u16).to_be_bytes());
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
                response.extend_from_slice(&query[12..question_end]);
                for record in records {
                    Self::push_record(&mut response, record);
                }
                Some(response)
            }
        }
    }

    fn push_record(out: &mut Vec<u8>, record: &MockRecord) {
        let (rtype, ttl, rdata): (u16, u32, Vec<u8>) = match record {
            MockRecord::A(ip, ttl) => (1, *ttl, ip.octets().to_vec()),
            MockRecord::Aaaa(ip, ttl) => (28, *ttl, ip.octets().to_vec()),
            MockRecord::Txt(text, ttl) => {
                let mut rdata = vec![text.len() as u8];
                rdata.extend_from_slice(text.as_bytes());
                (16, *ttl, rdata)
            }
            MockRecord::Cname(target, ttl) => (5, *ttl, Self::encode_name(target)),
            MockRecord::Ns(target, ttl) => (2, *ttl, Self::encode_name(target)),
        };

        out.extend_from_slice(&[0xc0, 0x0c]); // Name pointer to question
        out.extend_from_slice(&rtype.to_be_bytes());
        out.extend_from_slice(&[0x00, 0x01]); // Class IN
        out.extend_from_slice(&ttl.to_be_bytes());
        out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        out.extend_from_slice(&rdata);
    }

    fn encode_name(name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for label in name.trim_end_matches('.').split('.') {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        out
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
