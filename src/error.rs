//! Error types

use thiserror::Error;

/// A result type defaulting to [`FutureError`]
pub type Result<T, E = FutureError> = std::result::Result<T, E>;

/// A violated future contract
///
/// Both variants are programmer errors of the calling component: they are reported to the caller and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FutureError {
    /// `fulfill` was called on a future that has already been fulfilled
    #[error("future has already been fulfilled")]
    AlreadyFulfilled,
    /// The value was read before the future has been fulfilled
    #[error("future has not been fulfilled")]
    Unfulfilled,
}
