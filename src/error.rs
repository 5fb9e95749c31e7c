//! Error types for the HAWK signature scheme.

use std::fmt;

/// Errors that can occur during HAWK operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HawkError {
    /// The requested parameter set name is not in the registry.
    UnknownParameter {
        /// The name that failed to resolve.
        name: String,
    },

    /// A codec range with `high < low` was supplied.
    InvalidRange {
        /// Lower bound of the offending range.
        low: i64,
        /// Upper bound of the offending range.
        high: i64,
    },

    /// Not enough bits were available to decode the requested values.
    ///
    /// During verification this is captured and mapped to a `false`
    /// result rather than surfaced to the caller.
    Insufficient {
        /// Number of bits required.
        needed: usize,
        /// Number of bits actually available.
        available: usize,
    },

    /// The natural signature encoding exceeds the fixed target length.
    ///
    /// This indicates a parameter-table defect, not attacker-controlled
    /// input; signing aborts.
    SignatureOverflow {
        /// Bit length the encoding produced.
        bits: usize,
        /// Fixed bit length the parameter set allows.
        limit: usize,
    },

    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: &'static str,
        /// Description of why the input is invalid.
        reason: &'static str,
    },

    /// An internal length invariant was violated.
    ///
    /// Reaching this path indicates a parameter-table or logic defect;
    /// the surrounding operation aborts rather than emitting a malformed
    /// buffer.
    InternalError {
        /// Context about which invariant failed.
        context: &'static str,
    },
}

impl fmt::Display for HawkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HawkError::UnknownParameter { name } => {
                write!(f, "unknown parameter set: {}", name)
            }
            HawkError::InvalidRange { low, high } => {
                write!(f, "invalid codec range: low={} high={}", low, high)
            }
            HawkError::Insufficient { needed, available } => {
                write!(
                    f,
                    "insufficient bits: needed {}, available {}",
                    needed, available
                )
            }
            HawkError::SignatureOverflow { bits, limit } => {
                write!(f, "signature overflow: {} > {}", bits, limit)
            }
            HawkError::InvalidInput { field, reason } => {
                write!(f, "invalid {}: {}", field, reason)
            }
            HawkError::InternalError { context } => {
                write!(f, "internal error: {}", context)
            }
        }
    }
}

impl std::error::Error for HawkError {}

/// Result type alias for HAWK operations.
pub type Result<T> = std::result::Result<T, HawkError>;
