//! Error types for spring construction.

use core::fmt;

/// Errors returned by the validated constructors and config checks.
///
/// Stepping never fails; numeric faults during a step show up as
/// non-finite state instead (see [`DegeneracyPolicy`](crate::config::DegeneracyPolicy)).
#[derive(Debug, Clone, PartialEq)]
pub enum SpringError {
    /// Rest length must be positive.
    InvalidRestLength,
    /// Stiffness must not be negative.
    InvalidStiffness,
    /// Damping must not be negative.
    InvalidDamping,
    /// Degeneracy guard epsilon must not be negative.
    InvalidEpsilon,
    /// A parameter was NaN or infinite.
    NonFiniteParameter { name: &'static str },
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpringError::InvalidRestLength => write!(f, "rest length must be positive"),
            SpringError::InvalidStiffness => write!(f, "stiffness must not be negative"),
            SpringError::InvalidDamping => write!(f, "damping must not be negative"),
            SpringError::InvalidEpsilon => write!(f, "guard epsilon must not be negative"),
            SpringError::NonFiniteParameter { name } => {
                write!(f, "parameter `{}` must be finite", name)
            }
        }
    }
}

impl core::error::Error for SpringError {}
