//! Application Layer
//!
//! Orchestrates the scoring domain through use cases.
//!
//! - **Ports**: Interfaces for external systems (warning provider)
//! - **Use Cases**: The fetch-and-assess pipeline
//! - **Services**: Application-level helpers (assessment cache)

pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::*;
pub use services::*;
pub use use_cases::*;
