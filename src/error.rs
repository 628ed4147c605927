//! Errors reported by the checked constructors.
//!
//! The unchecked API never returns these: invalid parameters there simply
//! propagate as NaN or infinity.

use core::fmt;

/// Errors that can occur while validating detector parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoertzelError {
    /// The target frequency was negative or non-finite.
    InvalidFrequency,
    /// The sampling frequency was non-positive or non-finite.
    InvalidSamplingFrequency,
    /// The target frequency lies above half the sampling frequency.
    AboveNyquist,
    /// A block detector was asked to use zero samples per block.
    EmptyBlock,
}

impl fmt::Display for GoertzelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoertzelError::InvalidFrequency => {
                write!(f, "target frequency must be finite and non-negative")
            }
            GoertzelError::InvalidSamplingFrequency => {
                write!(f, "sampling frequency must be finite and positive")
            }
            GoertzelError::AboveNyquist => {
                write!(f, "target frequency exceeds half the sampling frequency")
            }
            GoertzelError::EmptyBlock => write!(f, "block length must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GoertzelError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            GoertzelError::AboveNyquist.to_string(),
            "target frequency exceeds half the sampling frequency"
        );
        assert_eq!(
            GoertzelError::EmptyBlock.to_string(),
            "block length must be at least 1"
        );
    }
}
