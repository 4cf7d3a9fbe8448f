pub mod nameservers;

pub use nameservers::{parse_nameservers, system_nameservers};
