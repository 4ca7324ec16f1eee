//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer, plus
//! cross-cutting runtime concerns:
//!
//! - **Driven Adapters (Outbound)**
//!   - `shield/`: Jupiter Shield HTTP client (`WarningProviderPort`)
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API (risk score, health, metrics)
//!
//! - **Runtime**
//!   - `config/`: Environment configuration
//!   - `telemetry/`: Tracing subscriber and OpenTelemetry export
//!   - `metrics/`: Prometheus recorder

pub mod config;
pub mod http;
pub mod metrics;
pub mod shield;
pub mod telemetry;
