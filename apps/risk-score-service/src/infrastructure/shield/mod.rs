//! Jupiter Shield Adapter
//!
//! Implements `WarningProviderPort` over the Shield HTTP API
//! (`GET <base_url>?mints=<mint>`).

mod client;
mod error;

pub use client::ShieldClient;
pub use error::ShieldError;
