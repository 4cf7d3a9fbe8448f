pub mod answer_sink;
pub mod dns_codec;
pub mod resolver_service;

pub use answer_sink::AnswerSink;
pub use dns_codec::{DecodedRecord, DnsCodec};
pub use resolver_service::{CompletionHandler, ResolverService};
