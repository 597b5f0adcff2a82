//! Raw storage buffer for the `OxideX` vector.
//!
//! This module provides [`RawBuf`], the allocation layer underneath
//! [`Vector`](crate::Vector). A `RawBuf` owns a single contiguous block of
//! uninitialized memory sized for a fixed number of elements:
//!
//! - **Allocation only**: acquires and releases storage, nothing else
//! - **No element lifetimes**: never constructs or destroys a `T`
//! - **Move-only ownership**: the buffer cannot be cloned, so exactly one
//!   owner can ever release a given allocation
//!
//! # Safety
//!
//! `RawBuf` hands out raw slot addresses and leaves every initialization
//! decision to its owner. The owner must track which slots hold live
//! elements and drop them before the buffer is released; `RawBuf` itself
//! only returns the memory to the system allocator.
//!
//! # Examples
//!
//! ```
//! use oxidex_vec::RawBuf;
//!
//! let buffer: RawBuf<u64> = RawBuf::allocate(16).unwrap();
//! assert_eq!(buffer.capacity(), 16);
//!
//! // Storage is exchanged, never duplicated.
//! let mut other: RawBuf<u64> = RawBuf::new();
//! std::mem::swap(&mut other, &mut RawBuf::allocate(4).unwrap());
//! assert_eq!(other.capacity(), 4);
//! ```

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{AllocError, Result};

/// An owned block of uninitialized storage for `cap` elements of `T`.
///
/// The block is allocated with `std::alloc` using the layout of `[T; cap]`
/// and released with the same layout on drop. Empty buffers and buffers of
/// zero-sized element types hold no allocation at all; their pointer is a
/// well-aligned dangling marker that is never dereferenced.
pub struct RawBuf<T> {
    /// Start of the storage block, or a dangling marker when no allocation
    /// exists.
    ptr: NonNull<T>,
    /// Number of element slots in the block.
    cap: usize,
    /// Marks logical ownership of `T` storage for the drop checker.
    marker: PhantomData<T>,
}

// Storage is reached only through its single owner, so the buffer moves
// between threads whenever its element type does.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Creates an empty buffer with no allocation and capacity zero.
    #[must_use]
    pub const fn new() -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
            marker: PhantomData,
        }
    }

    /// Reserves uninitialized storage for exactly `capacity` elements.
    ///
    /// A `capacity` of zero, or a zero-sized `T`, produces a bookkeeping-only
    /// buffer that records the capacity without touching the allocator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::CapacityOverflow`] when the byte size of
    /// `capacity` elements exceeds the maximum allocation size, and
    /// [`AllocError::OutOfMemory`] when the system allocator refuses the
    /// request.
    pub fn allocate(capacity: usize) -> Result<Self> {
        if capacity == 0 || std::mem::size_of::<T>() == 0 {
            return Ok(RawBuf {
                ptr: NonNull::dangling(),
                cap: capacity,
                marker: PhantomData,
            });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow)?;

        // SAFETY: the layout has non-zero size, since capacity > 0 and T is
        // not zero-sized.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>())
            .ok_or(AllocError::OutOfMemory { bytes: layout.size() })?;

        Ok(RawBuf {
            ptr,
            cap: capacity,
            marker: PhantomData,
        })
    }

    /// Returns the number of element slots in this buffer.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the address of the first slot.
    ///
    /// The pointer is dangling (but well-aligned and non-null) when the
    /// buffer holds no allocation.
    #[must_use]
    #[inline]
    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the address of the slot at `offset`.
    ///
    /// The returned pointer is not dereferenced here; whether it may be read
    /// or written depends on which slots the caller has initialized.
    ///
    /// # Safety
    ///
    /// `offset` must not exceed [`capacity`](Self::capacity). The
    /// one-past-the-end address is valid only as a boundary marker and must
    /// never be dereferenced.
    #[must_use]
    #[inline]
    pub unsafe fn slot(&self, offset: usize) -> *mut T {
        let cap = self.cap;
        debug_assert!(offset <= cap, "slot offset {offset} exceeds capacity {cap}");
        // SAFETY: the caller guarantees offset <= cap, and Layout::array
        // bounded cap * size_of::<T>() at allocation time, so the offset
        // stays inside the allocation or one past its end.
        unsafe { self.ptr.as_ptr().add(offset) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || std::mem::size_of::<T>() == 0 {
            return;
        }

        // SAFETY: the size and alignment were validated by Layout::array when
        // this buffer was allocated, so the product cannot overflow.
        let layout = unsafe {
            Layout::from_size_align_unchecked(
                std::mem::size_of::<T>() * self.cap,
                std::mem::align_of::<T>(),
            )
        };

        // SAFETY: ptr came from alloc::alloc with this same layout and has
        // not been released yet.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
