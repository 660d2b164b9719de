//! Error types for the Psy-Lens interaction crate
//!
//! Selection itself never fails. Errors only come from building
//! configurations and detection frames whose preconditions do not hold.

use std::fmt;

/// Result type for Psy-Lens interaction operations
pub type PsyLensResult<T> = Result<T, PsyLensError>;

/// Psy-Lens interaction errors
#[derive(Debug, Clone)]
pub enum PsyLensError {
    /// Interaction configuration is out of its valid range
    InvalidConfig(String),

    /// Detection frame violates a geometric precondition
    /// (depth range, extents, non-finite origin, basis orthonormality)
    InvalidFrame(String),
}

impl fmt::Display for PsyLensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PsyLensError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            PsyLensError::InvalidFrame(msg) => write!(f, "Invalid detection frame: {}", msg),
        }
    }
}

impl std::error::Error for PsyLensError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
