//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state (for sharing with oneshot)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local = listener.local_addr()?;

        print_ready(&self.config, local);
        tracing::info!("🍽️ Comanda server listening on {}", local);

        let app = crate::api::build_app(self.state.clone());
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = tx.send(());
            })
            .into_future();

        // Open SSE streams never end on their own; cap the drain period
        tokio::select! {
            result = serve => result?,
            _ = async {
                let _ = rx.await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(
                    timeout_ms = grace.as_millis() as u64,
                    "Graceful shutdown timed out, closing remaining connections"
                );
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

fn print_ready(config: &Config, addr: std::net::SocketAddr) {
    let prefix = if config.api_prefix.is_empty() {
        "/"
    } else {
        config.api_prefix.as_str()
    };
    tracing::info!(
        environment = %config.environment,
        prefix = %prefix,
        strict_transitions = config.orders.strict_transitions,
        require_items = config.orders.require_items,
        "Ready on http://{}",
        addr
    );
}
