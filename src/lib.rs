//! `OxideX` raw-memory vector infrastructure
//!
//! This crate provides a generic, contiguous, growable sequence container
//! built directly on uninitialized memory, with element lifetimes managed
//! by hand rather than by a pre-existing collection type. It provides:
//!
//! - **[`RawBuf`]**: an untyped storage owner that allocates and releases
//!   blocks but never touches element lifetimes
//! - **[`Vector`]**: a dynamic array layered on top, responsible for every
//!   construction, relocation, and destruction of its elements
//! - **Predictable growth**: capacity doubles on demand and reservations
//!   allocate exactly what was asked for
//! - **Unwind safety**: a panicking clone or constructor leaves the
//!   container valid, with no leaks and no double drops
//!
//! # Architecture
//!
//! The two layers split the container problem in half:
//!
//! - **Storage layer** ([`raw`]): owns the allocation, knows its capacity,
//!   treats every slot as raw memory
//! - **Sequence layer** ([`vector`]): tracks how many leading slots hold
//!   live elements and keeps that count truthful through growth, insertion,
//!   removal, and unwinding
//!
//! # Example
//!
//! ```rust
//! use oxidex_vec::Vector;
//!
//! let mut primes = Vector::new();
//! for p in [2, 3, 5, 7] {
//!     primes.push(p);
//! }
//!
//! primes.insert(0, 1);
//! assert_eq!(primes.remove(0), 1);
//! assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
//! ```

pub mod error;
pub mod raw;
pub mod vector;

// Re-export commonly used types
pub use error::{AllocError, Result};
pub use raw::RawBuf;
pub use vector::Vector;
