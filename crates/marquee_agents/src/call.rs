//! Helpers for ractor RPC calls.

use marquee_error::{EntityError, EntityErrorKind, MarqueeResult};
use ractor::{MessagingErr, rpc::CallResult};

/// Unwrap Ractor's CallResult into a standard Result.
pub(crate) fn unwrap_call_result<T, M>(
    result: Result<CallResult<T>, MessagingErr<M>>,
) -> MarqueeResult<T> {
    match result {
        Ok(CallResult::Success(inner)) => Ok(inner),
        Ok(CallResult::Timeout) => Err(EntityError::new(EntityErrorKind::Timeout).into()),
        Ok(CallResult::SenderError) => {
            Err(EntityError::new(EntityErrorKind::SenderDropped).into())
        }
        Err(e) => Err(EntityError::new(EntityErrorKind::Messaging(e.to_string())).into()),
    }
}
