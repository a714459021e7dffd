//! Object key validation.

use marquee_error::{MarqueeResult, StorageError, StorageErrorKind};

/// Reject keys that could escape a store's root.
///
/// A valid key is non-empty, relative, uses `/` separators, and has no empty,
/// `.` or `..` segments.
///
/// # Examples
///
/// ```
/// use marquee_storage::validate_key;
///
/// assert!(validate_key("heat/poster.jpg").is_ok());
/// assert!(validate_key("../etc/passwd").is_err());
/// assert!(validate_key("/abs.jpg").is_err());
/// ```
pub fn validate_key(key: &str) -> MarqueeResult<()> {
    let invalid = key.is_empty()
        || key.contains('\\')
        || key.contains('\0')
        || key
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");

    if invalid {
        return Err(StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into());
    }
    Ok(())
}
