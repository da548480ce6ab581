//! Terminal wait errors.

use std::fmt;

/// Why a wait ended without a ready value.
///
/// `Fatal` carries the probe's own error unmodified so callers can match
/// on it exactly as if the probe had been called directly.
#[derive(Debug)]
pub enum WaitError<E> {
    /// Deadline exceeded with no successful sample. `cause` is the last
    /// ignored failure, or `None` when the final attempt was merely not
    /// yet satisfied.
    Timeout { message: String, cause: Option<E> },
    /// The probe failed with a kind outside the ignore set. Produced
    /// without retrying or sleeping.
    Fatal(E),
    /// The wait was aborted via an `AbortToken`.
    Aborted,
}

impl<E> WaitError<E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, WaitError::Timeout { .. })
    }
}

impl<E: fmt::Display> fmt::Display for WaitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitError::Timeout { message, .. } => f.write_str(message),
            WaitError::Fatal(e) => write!(f, "{}", e),
            WaitError::Aborted => write!(f, "wait aborted by caller"),
        }
    }
}

impl<E> std::error::Error for WaitError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WaitError::Timeout { cause, .. } => {
                cause.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
            }
            WaitError::Fatal(e) => Some(e),
            WaitError::Aborted => None,
        }
    }
}
