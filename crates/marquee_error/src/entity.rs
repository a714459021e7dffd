//! Errors from the entity actor layer (spawning and messaging).

/// Entity messaging failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EntityErrorKind {
    /// Actor could not be spawned
    #[display("Failed to spawn entity {}: {}", name, reason)]
    Spawn {
        /// Entity name (slug or well-known id)
        name: String,
        /// Underlying spawn failure
        reason: String,
    },
    /// Message could not be delivered (actor stopped)
    #[display("Failed to message entity: {}", _0)]
    Messaging(String),
    /// Call did not complete within its timeout
    #[display("Entity call timed out")]
    Timeout,
    /// Actor dropped the reply port without answering
    #[display("Entity dropped the reply port")]
    SenderDropped,
}

/// Entity error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Entity Error: {} at line {} in {}", kind, line, file)]
pub struct EntityError {
    /// Error kind
    pub kind: EntityErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl EntityError {
    /// Create a new entity error.
    #[track_caller]
    pub fn new(kind: EntityErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
