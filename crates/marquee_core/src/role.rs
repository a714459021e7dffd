//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role tag attached to every message sent to the generative service.
///
/// # Examples
///
/// ```
/// use marquee_core::Role;
///
/// assert_eq!(Role::System.as_str(), "system");
/// assert_eq!(format!("{}", Role::User), "User");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages carry the instructions
    System,
    /// User messages carry the movie details
    User,
    /// Assistant messages are prior model turns
    Assistant,
}

impl Role {
    /// Wire name used by chat-style APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
