//! Error types for the carton workspace.
//!
//! Organized by subsystem: the allocation strategy, the dynamic array,
//! and the rational number type. Every error is raised synchronously to
//! the immediate caller; nothing is retried or recovered internally.

use std::error::Error;
use std::fmt;

/// Errors raised by an allocation strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The strategy could not provide a region of the requested size.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The requested slot count does not fit in a valid memory layout
    /// (the byte size overflows `isize::MAX`).
    CapacityOverflow {
        /// Number of element slots requested.
        slots: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: failed to allocate {requested} bytes")
            }
            Self::CapacityOverflow { slots } => {
                write!(f, "capacity overflow: {slots} slots do not fit in memory")
            }
        }
    }
}

impl Error for AllocError {}

/// Errors from `DynamicArray` construction, access, and growth.
///
/// A caller that receives any of these sees the array exactly as it was
/// before the failing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Clearly wrong caller input that cannot be satisfied at all, such as
    /// a null or empty raw source.
    InvalidArgument {
        /// Human-readable description of the rejected input.
        reason: String,
    },
    /// Indexed access at or beyond the current length.
    OutOfRange {
        /// The requested position.
        index: usize,
        /// The array length at the time of the access.
        len: usize,
    },
    /// The allocation strategy could not satisfy a growth request.
    AllocationFailure(AllocError),
}

impl ArrayError {
    /// Shorthand for an [`ArrayError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::OutOfRange { index, len } => {
                write!(f, "no such element: index {index} out of range for length {len}")
            }
            Self::AllocationFailure(e) => write!(f, "allocation failure: {e}"),
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for ArrayError {
    fn from(e: AllocError) -> Self {
        Self::AllocationFailure(e)
    }
}

/// Errors from rational number construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RationalError {
    /// The operands describe no rational number (zero denominator,
    /// division by zero, unparsable text).
    InvalidArgument {
        /// Human-readable description of the rejected input.
        reason: String,
    },
    /// The reduced result does not fit in the component integer type.
    Overflow {
        /// The operation that overflowed.
        op: &'static str,
    },
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Overflow { op } => write!(f, "attempt to {op} with overflow"),
        }
    }
}

impl Error for RationalError {}
