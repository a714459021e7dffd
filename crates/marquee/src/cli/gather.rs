//! `gather` command handler.

use marquee::{JsonError, Marquee, MarqueeConfig, MarqueeResult};

/// Gather research once and print the resulting state.
pub async fn gather_research(config: &MarqueeConfig) -> MarqueeResult<()> {
    let marquee = Marquee::from_config(config).await?;
    let result = marquee.research().gather_trends().await;
    marquee.shutdown().await;

    let state = result?;
    tracing::info!(
        trends = state.trends().len(),
        actors = state.actors().len(),
        "Research gathered"
    );

    let json = serde_json::to_string_pretty(&state).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{json}");
    Ok(())
}
