pub mod codec;
pub mod forwarding;
pub mod resolver_service;
pub mod transport;

pub use codec::HickoryCodec;
pub use resolver_service::{ResolverSettings, UdpResolverService};
