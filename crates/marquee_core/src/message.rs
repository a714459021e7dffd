//! Message types for generation requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A role-tagged text message.
///
/// # Examples
///
/// ```
/// use marquee_core::{Message, Role};
///
/// let message = Message::system("You are a movie analyst.");
/// assert_eq!(message.role, Role::System);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// Text content
    pub content: String,
}

impl Message {
    /// Create a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Shorthand for a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Shorthand for a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
