//! Command-line interface module.

mod commands;
mod gather;
mod regenerate;
mod serve;

pub use commands::{Cli, Commands};
pub use gather::gather_research;
pub use regenerate::regenerate_movie;
pub use serve::serve_api;

use clap::Parser;
use marquee::{MarqueeConfig, MarqueeResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Configuration file read when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "marquee.toml";

/// Load the named config file, or `marquee.toml` if present, or defaults.
pub fn load_config(path: Option<&Path>) -> MarqueeResult<MarqueeConfig> {
    match path {
        Some(path) => MarqueeConfig::from_file(path),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                MarqueeConfig::from_file(fallback)
            } else {
                tracing::debug!("No config file found, using defaults");
                Ok(MarqueeConfig::default())
            }
        }
    }
}

/// Load `.env` (or `env_file`) and then parse `args`.
///
/// Variables from the file are in place before clap reads its `env`
/// fallbacks, so `MARQUEE_CONFIG` may be set there.
pub fn parse_with_env<I, T>(env_file: Option<&Path>, args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let loaded = match env_file {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    if let Err(e) = loaded {
        tracing::debug!(error = %e, "No .env loaded");
    }
    Cli::try_parse_from(args)
}
