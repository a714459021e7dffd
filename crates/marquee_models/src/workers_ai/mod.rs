//! Cloudflare Workers AI integration.

mod client;
mod conversion;
mod dto;

pub use client::{DEFAULT_IMAGE_MODEL, DEFAULT_STRUCTURED_MODEL, DEFAULT_TEXT_MODEL, WorkersAiClient};
