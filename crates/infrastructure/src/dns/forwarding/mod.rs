pub mod message_builder;
pub mod record_type_map;
pub mod reverse;

pub use message_builder::{MessageBuilder, EDNS_PAYLOAD_SIZE};
pub use record_type_map::RecordTypeMapper;
pub use reverse::query_name_for;
