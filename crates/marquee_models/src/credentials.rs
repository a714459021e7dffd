//! Cloudflare account credentials.

use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};

/// Default REST API root.
pub(crate) const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Account id + API token pair shared by the AI and browser rendering clients.
#[derive(Clone)]
pub struct CloudflareCredentials {
    account_id: String,
    api_token: String,
}

impl CloudflareCredentials {
    /// Build credentials from explicit values.
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_token: api_token.into(),
        }
    }

    /// Read `CLOUDFLARE_ACCOUNT_ID` and `CLOUDFLARE_API_TOKEN` from the environment.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` naming the first unset variable.
    pub fn from_env() -> MarqueeResult<Self> {
        let read = |name: &str| {
            std::env::var(name).map_err(|e| {
                GenerationError::new(GenerationErrorKind::MissingCredentials(format!(
                    "{} not set: {}",
                    name, e
                )))
            })
        };
        Ok(Self::new(
            read("CLOUDFLARE_ACCOUNT_ID")?,
            read("CLOUDFLARE_API_TOKEN")?,
        ))
    }

    /// Account id.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.api_token)
    }
}

impl std::fmt::Debug for CloudflareCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareCredentials")
            .field("account_id", &self.account_id)
            .field("api_token", &"<redacted>")
            .finish()
    }
}
