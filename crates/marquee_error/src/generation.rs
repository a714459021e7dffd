//! Errors raised while calling the generative text/image service.

/// Generative service failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Account id or API token not configured
    #[display("Missing credentials: {}", _0)]
    MissingCredentials(String),
    /// Request could not be sent or the service reported failure
    #[display("Generation request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// The service answered without any usable payload
    #[display("Empty response from {}", _0)]
    EmptyResponse(String),
    /// Structured output did not conform to the requested schema
    #[display("Response did not match schema: {}", _0)]
    SchemaMismatch(String),
    /// Image payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use marquee_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::HttpStatus {
///     status_code: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
