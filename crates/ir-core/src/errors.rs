//! Error types for the interest-rate analytics crates.
//!
//! Every fallible operation returns [`Result`]. Instruments validate their
//! arguments when they are built, so a value that exists is always
//! consistent; pricing code reports missing market data or unsupported
//! instruments through the same enum instead of panicking.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated, typically while constructing an instrument.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not defined for this value.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A calculator was asked to handle an instrument kind it does not price.
    #[error("{calculator} does not support {instrument}")]
    UnsupportedInstrument {
        /// Name of the calculator.
        calculator: &'static str,
        /// Kind of the rejected instrument.
        instrument: &'static str,
    },

    /// A provider does not hold the curve, surface or rate requested.
    #[error("missing market data: {0}")]
    MissingMarketData(String),

    /// A numerical routine failed to produce a usable result.
    #[error("numerical error: {0}")]
    Numerical(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ir_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ir_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
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
