//! Domain Layer
//!
//! Core business logic with no dependencies on transport, configuration or
//! observability.

pub mod analysis;
