//! Definitions.

use core::fmt::Display;

/// Default number of fractional digits retained by arithmetic results.
pub const DEFAULT_SCALE: u32 = 20;

/// Default base for interpreting digit literals.
pub const DEFAULT_IBASE: u32 = 10;

/// Smallest accepted input base.
pub const IBASE_MIN: u32 = 2;

/// Largest accepted input base.
pub const IBASE_MAX: u32 = 16;

/// Safety cap on series iterations. Termination of a series is normally
/// precision-driven (a term rounds to exactly zero at the current scale),
/// which has no fixed bound; the cap turns arguments that cannot converge
/// at the current scale into [`Error::NoConvergence`].
pub(crate) const MAX_SERIES_ITERATIONS: usize = 10_000_000;

/// Sign of a decimal value. Operations that work on the absolute value of
/// their argument capture one of these and apply it to the result.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// The opposite sign.
    pub fn invert(&self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is positive.
    pub fn is_positive(&self) -> bool {
        matches!(self, Sign::Pos)
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        matches!(self, Sign::Neg)
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Divisor is zero.
    DivisionByZero,

    /// Invalid argument.
    InvalidArgument,

    /// A series did not converge within the iteration cap at the current scale.
    NoConvergence,

    /// An internal counter or scale exceeded the machine range.
    Overflow,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
            Error::NoConvergence => "series did not converge at the current scale",
            Error::Overflow => "numeric overflow",
        };
        f.write_str(repr)
    }
}
