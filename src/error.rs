//! Error types for `OxideX` vector storage.
//!
//! This module defines the allocation errors reported by the raw buffer
//! layer. Element-level failures (a panicking clone or constructor) are not
//! errors in this sense; they unwind through the container, which is
//! documented per operation in [`crate::vector`].

use std::fmt;

/// Errors that can occur while acquiring backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The requested element capacity does not fit in a single allocation.
    ///
    /// Reported when the byte size of the requested capacity would exceed
    /// `isize::MAX`, or when computing a grown capacity overflows `usize`.
    CapacityOverflow,

    /// The system allocator failed to provide the requested block.
    OutOfMemory {
        /// The size of the failed request in bytes.
        bytes: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::CapacityOverflow => {
                write!(f, "Capacity overflow: requested capacity exceeds the maximum allocation size")
            }
            AllocError::OutOfMemory { bytes } => {
                write!(f, "Out of memory: failed to allocate {bytes} bytes")
            }
        }
    }
}

impl std::error::Error for AllocError {}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, AllocError>;
