//! Error types for bgv-tat.
//!
//! Domain failures (bad dates, violated preconditions, invalid arguments)
//! share a single `thiserror`-derived enum.  I/O and file-format failures
//! belong to the report layer and wrap this type.

use thiserror::Error;

/// The top-level error type used by the calendar and engine crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, unparseable, invalid day).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout bgv-tat.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tat_core::{ensure, errors::Error};
/// fn positive(days: u32) -> tat_core::errors::Result<u32> {
///     ensure!(days > 0, "SLA must be at least one day, got {days}");
///     Ok(days)
/// }
/// assert!(positive(8).is_ok());
/// assert!(positive(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
