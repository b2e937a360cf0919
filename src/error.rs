use std::fmt;

/// Errors reported by the solution counters and the verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Bit-width outside `1..=64`.
    InvalidWidth { width: u32 },
    /// Exhaustive verification requested for a width above the configured limit.
    Intractable { width: u32, limit: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWidth { width } => {
                write!(f, "Invalid width {}: expected 1..={}", width, crate::width::MAX_BITS)
            }
            Error::Intractable { width, limit } => {
                write!(f, "Width {} is too large for exhaustive verification (limit {})", width, limit)
            }
        }
    }
}

impl std::error::Error for Error {}
