//! massresolve Infrastructure Layer
//!
//! Concrete adapters for the application ports: a UDP forwarding resolver
//! service, a `hickory-proto` answer codec, line sinks and input sources.
pub mod dns;
pub mod io;
pub mod system;
