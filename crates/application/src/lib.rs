//! massresolve Application Layer
//!
//! Ports to the outside world (resolver service, DNS codec, answer sink) and
//! the bulk-resolution use cases built on them.
pub mod ports;
pub mod use_cases;
