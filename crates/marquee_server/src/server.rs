//! Binding and serving the router.

use crate::{AppState, create_router};
use marquee_error::{HttpError, MarqueeResult};
use std::net::SocketAddr;
use tracing::{info, instrument};

/// Serve the API on `addr` until Ctrl-C.
#[instrument(skip(state))]
pub async fn serve(addr: SocketAddr, state: AppState) -> MarqueeResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {}: {}", addr, e)))?;
    info!(addr = %addr, "Marquee API listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| HttpError::new(format!("Server error: {}", e)))?;
    Ok(())
}
