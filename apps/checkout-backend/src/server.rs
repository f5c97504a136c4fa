//! Explicitly constructed server instance with a start/stop lifecycle.
//!
//! Nothing starts at module load. Callers (main or tests) build a
//! [`CheckoutServer`], learn the bound address, and decide when to run and
//! when to stop it.

use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer};

use crate::config::http::HttpConfig;
use crate::error::AppError;
use crate::middleware::request_trace::RequestTrace;
use crate::routes;

/// A bound, not-yet-running checkout HTTP server.
pub struct CheckoutServer {
    server: actix_web::dev::Server,
    addr: SocketAddr,
}

impl CheckoutServer {
    /// Bind the listener and wire up the application.
    ///
    /// With `config.port == 0` the OS picks an ephemeral port; use
    /// [`local_addr`](Self::local_addr) to find out which.
    pub fn bind(config: &HttpConfig) -> Result<Self, AppError> {
        let server = HttpServer::new(|| {
            App::new()
                .wrap(RequestTrace)
                .configure(routes::configure)
        })
        .bind((config.host.as_str(), config.port))
        .map_err(|e| {
            AppError::config(format!(
                "failed to bind {}:{}: {e}",
                config.host, config.port
            ))
        })?;

        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| AppError::internal("server bound to no address".to_string()))?;

        Ok(Self {
            server: server.run(),
            addr,
        })
    }

    /// The concrete address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Handle for stopping the server from another task.
    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }

    /// Drive the server until it is stopped.
    pub async fn run(self) -> std::io::Result<()> {
        tracing::info!(addr = %self.addr, "checkout server running");
        self.server.await
    }
}
