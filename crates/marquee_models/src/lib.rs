//! Generative service clients for Marquee.
//!
//! The production backend is Cloudflare Workers AI, reached over its REST API:
//! chat-style models for free text and JSON-schema output, and an image model
//! for posters. The browser rendering endpoint on the same account turns a web
//! page into the markdown digest used by trend research.
//!
//! ```no_run
//! use marquee_models::WorkersAiClient;
//! use marquee_interface::MarqueeDriver;
//! use marquee_core::{GenerateRequest, Message};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WorkersAiClient::new()?;
//! let request = GenerateRequest::new(vec![Message::user("Pitch me a heist movie")]);
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod browser;
mod credentials;
mod workers_ai;

pub use browser::BrowserRenderingClient;
pub use credentials::CloudflareCredentials;
pub use workers_ai::{
    DEFAULT_IMAGE_MODEL, DEFAULT_STRUCTURED_MODEL, DEFAULT_TEXT_MODEL, WorkersAiClient,
};
