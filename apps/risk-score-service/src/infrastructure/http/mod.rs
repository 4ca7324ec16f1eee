//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing the risk score endpoint plus health and metrics.

mod controller;
mod cors;
mod response;
mod server;

pub use controller::{AppState, create_router};
pub use cors::{PREFLIGHT_MAX_AGE_SECS, cors_layer};
pub use response::*;
pub use server::{HttpServer, HttpServerError};
