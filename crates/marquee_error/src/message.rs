//! Message-only error types.
//!
//! These carry a free-form message plus the source location that created them.

macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{}: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// Error message
            pub message: String,
            /// Line number where the error occurred
            pub line: u32,
            /// File where the error occurred
            pub file: &'static str,
        }

        impl $name {
            /// Create a new error with the given message at the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Transport-level HTTP failure (connection refused, TLS, body read).
    ///
    /// ```
    /// use marquee_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(format!("{}", err).starts_with("HTTP Error: Connection refused"));
    /// ```
    HttpError,
    "HTTP Error"
);

message_error!(
    /// JSON serialization or deserialization failure.
    JsonError,
    "JSON Error"
);

message_error!(
    /// Configuration could not be read or parsed.
    ///
    /// ```
    /// use marquee_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing required field");
    /// assert!(err.message.contains("Missing required"));
    /// ```
    ConfigError,
    "Configuration Error"
);

message_error!(
    /// Generic backend failure that has no more specific kind.
    BackendError,
    "Backend Error"
);
