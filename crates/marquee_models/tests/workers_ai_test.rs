//! Live Workers AI tests. Require Cloudflare credentials and the `api` feature.

#![cfg(feature = "api")]

use marquee_core::{GenerateRequest, Message};
use marquee_interface::{ImageGeneration, JsonMode, MarkdownSource, MarqueeDriver};
use marquee_models::{BrowserRenderingClient, WorkersAiClient};
use serde_json::json;

#[tokio::test]
async fn free_text_generation_returns_text() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = WorkersAiClient::new()?;

    let request = GenerateRequest::builder()
        .messages(vec![
            Message::system("Reply with a single digit."),
            Message::user("How many sides does a triangle have?"),
        ])
        .max_tokens(Some(10))
        .build()?;

    let response = client.generate(&request).await?;
    assert!(response.text().is_some());
    Ok(())
}

#[tokio::test]
async fn json_mode_returns_array() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = WorkersAiClient::new()?;

    let schema = json!({"type": "array", "items": {"type": "string"}});
    let request = GenerateRequest::new(vec![Message::user("List three primary colors.")]);

    let value = client.generate_json(&request, &schema).await?;
    assert!(value.is_array());
    Ok(())
}

#[tokio::test]
async fn image_generation_returns_bytes() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = WorkersAiClient::new()?;
    let bytes = client.generate_image("A lighthouse at dusk").await?;
    assert!(!bytes.is_empty());
    Ok(())
}

#[tokio::test]
async fn browser_rendering_returns_markdown() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = BrowserRenderingClient::new()?;
    let markdown = client.fetch_markdown("https://example.com").await?;
    assert!(markdown.contains("Example"));
    Ok(())
}
