pub mod answer;
pub mod record_class;
pub mod record_type;

pub use answer::ResolvedAnswer;
pub use record_class::RecordClass;
pub use record_type::{RecordType, ValueKind};
