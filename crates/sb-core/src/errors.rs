//! Error types for schedule-bridge.
//!
//! The analytics core is total and never fails; errors only arise at the
//! boundaries (parsing dates and feeds, loading settings, talking to the
//! holiday source or the drafting service).  They all funnel into a single
//! `thiserror`-derived enum.

use thiserror::Error;

/// The top-level error type used throughout schedule-bridge.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out of range, malformed ISO text, ...).
    #[error("date error: {0}")]
    Date(String),

    /// A payload could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The holiday source could not deliver data.
    #[error("holiday source error: {0}")]
    Source(String),

    /// The drafting service failed to produce text.
    #[error("drafting error: {0}")]
    Drafting(String),
}

/// Shorthand `Result` type used throughout schedule-bridge.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sb_core::{ensure, errors::Error};
/// fn positive(x: i32) -> sb_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
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

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_window(days: i32) -> Result<i32> {
        crate::ensure!(days > 0, "window must be positive, got {days}");
        Ok(days)
    }

    #[test]
    fn ensure_maps_to_precondition() {
        assert_eq!(checked_window(14), Ok(14));
        assert_eq!(
            checked_window(0),
            Err(Error::Precondition("window must be positive, got 0".into()))
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Date("bad".into()).to_string(),
            "date error: bad"
        );
        assert_eq!(
            Error::Source("timeout".into()).to_string(),
            "holiday source error: timeout"
        );
    }
}
