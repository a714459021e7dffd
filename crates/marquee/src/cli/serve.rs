//! `serve` command handler.

use marquee::{Marquee, MarqueeConfig, MarqueeResult, serve};
use std::net::SocketAddr;

/// Run the HTTP API until Ctrl+C.
pub async fn serve_api(config: &MarqueeConfig, bind: Option<SocketAddr>) -> MarqueeResult<()> {
    let addr = bind.unwrap_or(*config.server().bind());
    tracing::info!(%addr, "Starting Marquee server");

    let marquee = Marquee::from_config(config).await?;
    let result = serve(addr, marquee.app_state()).await;
    marquee.shutdown().await;

    result
}
