//! Infrastructure Layer
//!
//! Inbound adapters that expose the application use cases.

pub mod http;
