//! Application Ports (Driven)
//!
//! Interfaces the application uses to reach external systems.

mod warning_provider_port;

pub use crate::domain::risk_scoring::RawWarning;
#[cfg(test)]
pub use warning_provider_port::MockWarningProviderPort;
pub use warning_provider_port::{ProviderError, WarningProviderPort};
