//! `regenerate` command handler.

use marquee::{JsonError, Marquee, MarqueeConfig, MarqueeResult, MovieState};

/// Regenerate one movie from its title and print the result.
pub async fn regenerate_movie(config: &MarqueeConfig, slug: &str, title: &str) -> MarqueeResult<()> {
    let marquee = Marquee::from_config(config).await?;
    let result = research_then_regenerate(&marquee, slug, title).await;
    marquee.shutdown().await;

    let state = result?;
    let json = serde_json::to_string_pretty(&state).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{json}");
    Ok(())
}

// Research is gathered first so the description and cast have something to
// draw on.
async fn research_then_regenerate(
    marquee: &Marquee,
    slug: &str,
    title: &str,
) -> MarqueeResult<MovieState> {
    marquee.research().gather_trends().await?;
    let movie = marquee.registry().open(slug).await?;
    movie.regenerate(title).await
}
