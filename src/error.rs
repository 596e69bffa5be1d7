//! Error type definitions.

use std::borrow::Cow;
use std::convert::TryFrom;
use std::error;
use std::fmt;


// Export types

/// A result that may contain a codec error.
pub type Result<T> = std::result::Result<T, Error>;

/// A result that, if ok, contains nothing, and otherwise contains a codec error.
pub type UnitResult = Result<()>;


/// An error that may happen while scanning, coding or transforming a block.
/// Distinguishes between two kinds of errors:
/// too few samples to fill a block, and invalid arguments.
/// Every error is recoverable, no operation in this crate aborts the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {

    /// A block requires more samples than were available.
    /// This includes a source that could not be read at all.
    InsufficientData {

        /// The number of samples the operation requires.
        required: usize,

        /// The number of samples that were actually available.
        available: usize,
    },

    /// An argument violates the contract of the operation,
    /// for example a run with a non-positive count,
    /// or a block whose size does not match the transform.
    InvalidArgument(Cow<'static, str>),
}


impl Error {

    /// Create an error of the variant `InvalidArgument`.
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Create an error of the variant `InsufficientData`.
    pub(crate) fn insufficient(required: usize, available: usize) -> Self {
        Error::InsufficientData { required, available }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InsufficientData { required, available } => write!(
                formatter, "not enough data: required {} samples, but only {} are available",
                required, available
            ),

            Error::InvalidArgument(message) => write!(formatter, "invalid argument: {}", message),
        }
    }
}


/// Return error on invalid range.
#[inline]
pub(crate) fn i64_to_usize(value: i64, error_message: &'static str) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::invalid(error_message))
}
