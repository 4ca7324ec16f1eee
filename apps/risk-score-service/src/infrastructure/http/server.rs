//! HTTP server lifecycle.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// HTTP server that runs until its token is cancelled.
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
    cancel: CancellationToken,
}

impl HttpServer {
    /// Create a new server.
    #[must_use]
    pub const fn new(addr: SocketAddr, router: Router, cancel: CancellationToken) -> Self {
        Self {
            addr,
            router,
            cancel,
        }
    }

    /// Run the server until cancelled, draining in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns `HttpServerError` if binding fails or the HTTP server
    /// encounters a fatal error while running.
    pub async fn run(self) -> Result<(), HttpServerError> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| HttpServerError::BindFailed(self.addr, e.to_string()))?;

        tracing::info!(addr = %self.addr, "HTTP server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(self.cancel.cancelled_owned())
            .await
            .map_err(|e| HttpServerError::ServerFailed(e.to_string()))?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// HTTP server errors.
#[derive(Debug, thiserror::Error)]
pub enum HttpServerError {
    /// Failed to bind to address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(SocketAddr, String),

    /// Server error.
    #[error("server error: {0}")]
    ServerFailed(String),
}
