//! Errors returned when a caller's parameters are outside an operation's domain.
//!
//! All checks run before any state is allocated, so an `Err` means no work was done.

use core::fmt;

/// A rejected parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// An input that must be non-empty was empty. Holds the input's name.
    EmptyInput(&'static str),

    /// The requested output is longer than the construction can produce.
    OutputTooLong {
        /// The requested length, in bytes.
        requested: usize,
        /// The largest length the construction supports, in bytes.
        max: usize,
    },

    /// A PBKDF2 iteration count of zero.
    ZeroIterations,

    /// A SHA-3 bit width other than 224, 256, 384, or 512.
    UnknownVariant(u16),

    /// A fixed-length output buffer had the wrong length.
    BufferLength {
        /// The length the operation produces, in bytes.
        expected: usize,
        /// The length of the buffer passed in, in bytes.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput(name) => write!(f, "{} must not be empty", name),
            Error::OutputTooLong { requested, max } => {
                write!(f, "requested {} bytes of output, maximum is {} bytes", requested, max)
            }
            Error::ZeroIterations => f.write_str("iteration count must be greater than zero"),
            Error::UnknownVariant(bits) => {
                write!(f, "unknown SHA-3 variant: {} bits (expected 224, 256, 384, or 512)", bits)
            }
            Error::BufferLength { expected, actual } => {
                write!(f, "output buffer is {} bytes, expected {} bytes", actual, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
