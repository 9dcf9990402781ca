//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases. It owns
//! request correlation, logging and metrics around each engine call.

pub mod use_cases;

pub use use_cases::*;
