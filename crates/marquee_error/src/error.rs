//! Top-level error wrapper types.

use crate::{
    BackendError, ConfigError, EntityError, GenerationError, HttpError, JsonError, StorageError,
};

/// Every error condition a Marquee operation can surface.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MarqueeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MarqueeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Generic backend error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Object storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Generative service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Entity actor error
    #[from(EntityError)]
    Entity(EntityError),
}

/// Marquee error with kind discrimination.
///
/// # Examples
///
/// ```
/// use marquee_error::{MarqueeResult, ConfigError};
///
/// fn might_fail() -> MarqueeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Marquee Error: {}", _0)]
pub struct MarqueeError(Box<MarqueeErrorKind>);

impl MarqueeError {
    /// Create a new error from a kind.
    pub fn new(kind: MarqueeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MarqueeErrorKind {
        &self.0
    }
}

impl<T> From<T> for MarqueeError
where
    T: Into<MarqueeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Marquee operations.
pub type MarqueeResult<T> = std::result::Result<T, MarqueeError>;
