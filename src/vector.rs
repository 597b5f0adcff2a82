//! Growable contiguous vector built on raw storage.
//!
//! This module provides [`Vector`], a dynamic array that manages element
//! lifetimes by hand on top of the uninitialized storage of
//! [`RawBuf`](crate::RawBuf):
//!
//! - **Contiguous live prefix**: slots `[0, len)` hold constructed elements,
//!   slots `[len, capacity)` are raw memory
//! - **Amortized O(1) append** through capacity doubling
//! - **Exact reservation**: `reserve(n)` allocates storage for exactly `n`
//!   elements, and capacity never shrinks
//! - **Well-defined failure states**: a panicking clone or constructor
//!   unwinds through the container without leaks or double drops
//!
//! # Growth
//!
//! An append that outgrows the buffer allocates a replacement of
//! `max(1, 2 * capacity)` slots. The incoming element is constructed into
//! the replacement at its final position first; only then are the existing
//! elements relocated and the old buffer released. Relocation is a bitwise
//! move, so no element code runs while the two buffers are in flight, and a
//! panicking constructor leaves the vector exactly as it was.
//!
//! # Examples
//!
//! Capacity progresses 0, 1, 2, 4 as elements arrive one by one:
//!
//! ```
//! use oxidex_vec::Vector;
//!
//! let mut values = Vector::new();
//! for n in 1..=3 {
//!     values.push(n);
//! }
//! assert_eq!(values.len(), 3);
//! assert_eq!(values.capacity(), 4);
//!
//! assert_eq!(values.remove(1), 2);
//! values.insert(1, 2);
//! assert_eq!(values.as_slice(), &[1, 2, 3]);
//! ```

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::error::{AllocError, Result};
use crate::raw::RawBuf;

/// Multiplier applied to the current capacity when an append outgrows it.
const GROWTH_FACTOR: usize = 2;

/// A contiguous growable array with hand-managed element lifetimes.
///
/// `Vector` is the only actor that constructs or destroys elements in its
/// buffer; the buffer itself never inspects its contents. Ownership of the
/// storage follows the vector: moving a `Vector` moves the buffer pointer,
/// never the elements, and a moved-from binding is unusable at compile
/// time. Use [`std::mem::take`] to move the contents out while leaving an
/// empty vector behind, or [`std::mem::swap`] to exchange two vectors in
/// O(1).
///
/// # Examples
///
/// ```
/// use oxidex_vec::Vector;
///
/// let mut names = Vector::new();
/// names.push(String::from("raw"));
/// names.push(String::from("buffer"));
///
/// assert_eq!(names.len(), 2);
/// assert_eq!(&names[0], "raw");
///
/// for name in &names {
///     assert!(!name.is_empty());
/// }
/// ```
pub struct Vector<T> {
    /// Backing storage; holds no live elements of its own.
    buf: RawBuf<T>,
    /// Number of live elements at the front of the buffer.
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Vector {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with storage for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vector = Vector::new();
        vector.reserve(capacity);
        vector
    }

    /// Creates a vector of `size` default-constructed elements, with
    /// capacity exactly `size`.
    ///
    /// If a `T::default()` call panics partway through, the elements
    /// constructed so far are destroyed and the storage is released.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated, or if `T::default()`
    /// panics.
    #[must_use]
    pub fn with_size(size: usize) -> Self
    where
        T: Default,
    {
        let mut vector = Vector::with_capacity(size);
        vector.resize(size);
        vector
    }

    /// Returns the number of live elements.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the vector holds no elements.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    #[must_use]
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the live elements as a slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized, and the base pointer is
        // non-null and aligned even when no allocation exists.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are initialized, and the exclusive borrow
        // of self guarantees the slice is the only access path.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index` without a bounds
    /// check.
    ///
    /// For checked access, index through the slice view: `&vector[index]`.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        let len = self.len;
        debug_assert!(index < len, "index {index} out of bounds for length {len}");
        // SAFETY: the caller guarantees index < len, so the slot holds a
        // live element for as long as the returned borrow does.
        unsafe { &*self.buf.slot(index) }
    }

    /// Returns a mutable reference to the element at `index` without a
    /// bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        debug_assert!(index < len, "index {index} out of bounds for length {len}");
        // SAFETY: the caller guarantees index < len, and the exclusive
        // borrow of self makes this the only access path.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Ensures capacity for at least `new_capacity` elements, allocating
    /// storage for exactly `new_capacity` when growth is needed.
    ///
    /// Does nothing when `new_capacity` is within the current capacity.
    /// Growth relocates the live elements bitwise; no element code runs and
    /// element order is preserved. On failure the vector is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::CapacityOverflow`] when `new_capacity` elements
    /// cannot fit in a single allocation, and [`AllocError::OutOfMemory`]
    /// when the allocator refuses the request.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.buf.capacity() {
            return Ok(());
        }

        let replacement = RawBuf::allocate(new_capacity)?;
        // SAFETY: [0, len) are live in the current buffer, the replacement
        // has room for at least len elements, and distinct allocations never
        // overlap. The old buffer is released holding no live elements.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), replacement.as_ptr(), self.len);
        }
        self.buf = replacement;
        Ok(())
    }

    /// Ensures capacity for at least `new_capacity` elements.
    ///
    /// Behaves like [`try_reserve`](Self::try_reserve) but treats
    /// allocation failure as fatal.
    ///
    /// # Panics
    ///
    /// Panics if the storage cannot be allocated.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            alloc_failed(err);
        }
    }

    /// Appends an element to the back.
    ///
    /// # Panics
    ///
    /// Panics if grown storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxidex_vec::Vector;
    ///
    /// let mut values = Vector::new();
    /// values.push(1);
    /// values.push(2);
    /// assert_eq!(values.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.grow_insert(len, move || value);
            return;
        }
        // SAFETY: len < capacity, so slot len is in bounds and raw.
        unsafe {
            ptr::write(self.buf.slot(len), value);
        }
        self.len = len + 1;
    }

    /// Appends the element produced by `make`, returning a reference to it.
    ///
    /// The closure is the element's constructor: it runs exactly once, after
    /// any storage growth has been prepared. If it panics, the vector is
    /// left exactly as it was before the call.
    ///
    /// # Panics
    ///
    /// Panics if grown storage cannot be allocated, or if `make` panics.
    pub fn push_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        self.insert_with(self.len, make)
    }

    /// Inserts `value` before the element at `index`, shifting the tail one
    /// slot toward the back.
    ///
    /// `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`, or if grown storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxidex_vec::Vector;
    ///
    /// let mut values = Vector::new();
    /// values.push(1);
    /// values.push(3);
    /// values.insert(1, 2);
    /// assert_eq!(values.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.insert_with(index, move || value);
    }

    /// Inserts the element produced by `make` before the element at
    /// `index`, returning a reference to it.
    ///
    /// Without growth, the closure runs before any element moves, so a
    /// panic changes nothing. With growth, the new element is constructed
    /// into the replacement buffer first; a panic releases that buffer and
    /// leaves the vector untouched. In either case the surviving elements
    /// relocate bitwise, with no element code in flight.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`, if grown storage cannot be allocated, or
    /// if `make` panics.
    pub fn insert_with(&mut self, index: usize, make: impl FnOnce() -> T) -> &mut T {
        let len = self.len;
        assert!(index <= len, "insert index {index} exceeds length {len}");

        if len == self.capacity() {
            return self.grow_insert(index, make);
        }

        if index < len {
            let value = make();
            // SAFETY: index < len < capacity, so the shifted range
            // [index + 1, len + 1) stays within the buffer, and slot index
            // is raw once its element has been copied up.
            unsafe {
                let base = self.buf.slot(index);
                ptr::copy(base, base.add(1), len - index);
                ptr::write(base, value);
            }
        } else {
            // SAFETY: len < capacity, so slot len is in bounds and raw.
            unsafe {
                ptr::write(self.buf.slot(len), make());
            }
        }

        self.len = len + 1;
        // SAFETY: slot index now holds a live element.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Removes and returns the element at `index`, shifting the tail one
    /// slot toward the front.
    ///
    /// The elements after `index` keep their order; the slot that held the
    /// removed element is refilled by its successor.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxidex_vec::Vector;
    ///
    /// let mut values = Vector::new();
    /// for n in [1, 2, 3] {
    ///     values.push(n);
    /// }
    /// assert_eq!(values.remove(1), 2);
    /// assert_eq!(values.as_slice(), &[1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(index < len, "remove index {index} out of bounds for length {len}");

        // SAFETY: index < len, so the slot holds a live element; after the
        // read it is treated as raw, and the overlapping copy moves the
        // tail down to refill it. Nothing between the read and the length
        // update can unwind.
        unsafe {
            let base = self.buf.slot(index);
            let value = ptr::read(base);
            ptr::copy(base.add(1), base, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxidex_vec::Vector;
    ///
    /// let mut values = Vector::new();
    /// values.push(7);
    /// assert_eq!(values.pop(), Some(7));
    /// assert_eq!(values.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the new length held a live element, and the
        // length update just made it unreachable.
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Shortens the vector to `new_len` elements, destroying the tail.
    ///
    /// Does nothing when `new_len >= len()`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail_len = self.len - new_len;
        // The length drops before the destructors run, so a panicking drop
        // cannot expose a dead element through the live range.
        self.len = new_len;
        // SAFETY: the tail [new_len, new_len + tail_len) held live elements
        // that the length update just made unreachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot(new_len), tail_len));
        }
    }

    /// Destroys all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the vector to `new_size` elements.
    ///
    /// Shrinking destroys the tail; growing reserves storage for exactly
    /// `new_size` elements and fills the new slots with `T::default()`. If
    /// a `T::default()` call panics, the new elements constructed so far
    /// are destroyed and the vector is back at its prior length.
    ///
    /// # Panics
    ///
    /// Panics if grown storage cannot be allocated, or if `T::default()`
    /// panics.
    pub fn resize(&mut self, new_size: usize)
    where
        T: Default,
    {
        if new_size <= self.len {
            self.truncate(new_size);
            return;
        }

        self.reserve(new_size);
        let mut guard = FillGuard {
            start_len: self.len,
            vector: self,
        };
        while guard.vector.len < new_size {
            let value = T::default();
            // SAFETY: len < new_size <= capacity after the reserve above.
            unsafe {
                ptr::write(guard.vector.buf.slot(guard.vector.len), value);
            }
            guard.vector.len += 1;
        }
        guard.commit();
    }

    /// Next capacity for an append that outgrew the buffer.
    fn grown_capacity(&self) -> Result<usize> {
        let doubled = self
            .capacity()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(AllocError::CapacityOverflow)?;
        Ok(doubled.max(1))
    }

    /// Grows the buffer and inserts the element produced by `make` at
    /// `index` in one step.
    ///
    /// The element is constructed into the replacement buffer at its final
    /// position before the existing elements relocate around it, so an
    /// unwinding constructor releases the replacement and leaves the vector
    /// untouched.
    #[cold]
    #[inline(never)]
    fn grow_insert(&mut self, index: usize, make: impl FnOnce() -> T) -> &mut T {
        debug_assert!(index <= self.len);

        let replacement = match self.grown_capacity().and_then(RawBuf::allocate) {
            Ok(buffer) => buffer,
            Err(err) => alloc_failed(err),
        };

        // SAFETY: index <= len < replacement capacity, so the target slot
        // is in-bounds raw memory. If make panics, replacement is released
        // on unwind while self still owns every live element.
        unsafe {
            ptr::write(replacement.slot(index), make());
        }

        // SAFETY: [0, index) and [index, len) are live in the old buffer,
        // the destination slots are raw, and distinct allocations never
        // overlap. Bitwise relocation runs no element code, so nothing can
        // fail past this point; the old buffer is released empty.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), replacement.as_ptr(), index);
            ptr::copy_nonoverlapping(
                self.buf.slot(index),
                replacement.slot(index + 1),
                self.len - index,
            );
        }

        self.buf = replacement;
        self.len += 1;
        // SAFETY: slot index holds the element written above.
        unsafe { &mut *self.buf.slot(index) }
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Clones element by element into storage of capacity exactly `len()`.
    ///
    /// If an element clone panics, the elements cloned so far are destroyed
    /// and the new storage is released; the source is untouched.
    fn clone(&self) -> Self {
        let mut duplicate = Vector::with_capacity(self.len);
        for value in self.as_slice() {
            duplicate.push(value.clone());
        }
        duplicate
    }

    /// Clones `source` into `self`, reusing the existing storage when it is
    /// large enough.
    ///
    /// When `source` outgrows the current capacity, a full clone is built
    /// first and swapped in, so a panicking element clone leaves `self`
    /// unchanged. Otherwise elements are cloned in place: the shared prefix
    /// by element-wise `clone_from`, then either the excess is truncated or
    /// the missing tail `source[len()..]` is cloned element by element into
    /// the raw slots. If a tail clone panics, the tail elements cloned so
    /// far are destroyed and the length returns to its prior value; prefix
    /// reassignments are kept.
    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            let mut replacement = source.clone();
            mem::swap(self, &mut replacement);
            return;
        }

        let shared = self.len.min(source.len);
        for (slot, value) in self.as_mut_slice()[..shared]
            .iter_mut()
            .zip(&source.as_slice()[..shared])
        {
            slot.clone_from(value);
        }

        if source.len <= self.len {
            self.truncate(source.len);
        } else {
            let mut guard = FillGuard {
                start_len: self.len,
                vector: self,
            };
            for value in &source.as_slice()[shared..] {
                guard.vector.push(value.clone());
            }
            guard.commit();
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: exactly [0, len) hold live elements; the storage itself
        // is released by the buffer afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len));
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Scoped rollback for a fill loop: unless committed, dropping the guard
/// truncates the vector back to `start_len`, destroying whatever the loop
/// constructed past it.
struct FillGuard<'a, T> {
    vector: &'a mut Vector<T>,
    start_len: usize,
}

impl<T> FillGuard<'_, T> {
    /// Keeps the filled elements, skipping the rollback.
    fn commit(self) {
        mem::forget(self);
    }
}

impl<T> Drop for FillGuard<'_, T> {
    fn drop(&mut self) {
        self.vector.truncate(self.start_len);
    }
}

/// Reports an allocation failure. Kept out of line so the append paths
/// stay small.
#[cold]
#[inline(never)]
fn alloc_failed(err: AllocError) -> ! {
    panic!("vector allocation failed: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vector_is_empty() {
        let values: Vector<u32> = Vector::new();
        assert_eq!(values.len(), 0);
        assert_eq!(values.capacity(), 0);
        assert!(values.is_empty());
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut values = Vector::new();
        for n in 0..10 {
            values.push(n);
        }
        assert_eq!(values.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut values = Vector::new();
        let mut observed = Vec::new();
        for n in 0..9 {
            values.push(n);
            observed.push(values.capacity());
        }
        assert_eq!(observed, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn test_with_capacity_is_exact() {
        let values: Vector<u64> = Vector::with_capacity(7);
        assert_eq!(values.capacity(), 7);
        assert_eq!(values.len(), 0);
    }

    #[test]
    fn test_with_size_fills_with_defaults() {
        let values: Vector<u32> = Vector::with_size(5);
        assert_eq!(values.as_slice(), &[0, 0, 0, 0, 0]);
        assert_eq!(values.capacity(), 5);
    }

    #[test]
    fn test_reserve_is_exact_and_never_shrinks() {
        let mut values = Vector::new();
        values.push(1);
        values.reserve(10);
        assert_eq!(values.capacity(), 10);
        assert_eq!(values.as_slice(), &[1]);

        values.reserve(3);
        assert_eq!(values.capacity(), 10);
    }

    #[test]
    fn test_try_reserve_reports_overflow() {
        let mut values: Vector<u64> = Vector::new();
        assert_eq!(
            values.try_reserve(usize::MAX),
            Err(AllocError::CapacityOverflow)
        );
        assert_eq!(values.capacity(), 0);
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut values = Vector::new();
        values.push("a");
        values.push("b");
        assert_eq!(values.pop(), Some("b"));
        assert_eq!(values.pop(), Some("a"));
        assert_eq!(values.pop(), None);
        assert!(values.is_empty());
    }

    #[test]
    fn test_insert_shifts_tail_right() {
        let mut values = Vector::new();
        values.push(1);
        values.push(4);
        values.insert(1, 2);
        values.insert(2, 3);
        values.insert(0, 0);
        assert_eq!(values.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_at_len_appends() {
        let mut values = Vector::new();
        values.push(1);
        values.insert(1, 2);
        assert_eq!(values.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_insert_with_returns_reference() {
        let mut values = Vector::new();
        values.push(10);
        values.push(30);
        let inserted = values.insert_with(1, || 20);
        assert_eq!(*inserted, 20);
        *inserted += 1;
        assert_eq!(values.as_slice(), &[10, 21, 30]);
    }

    #[test]
    fn test_push_with_returns_reference() {
        let mut values = Vector::new();
        let pushed = values.push_with(|| 5);
        assert_eq!(*pushed, 5);
        assert_eq!(values.len(), 1);
    }

    #[test]
    #[should_panic(expected = "insert index 3 exceeds length 1")]
    fn test_insert_past_len_panics() {
        let mut values = Vector::new();
        values.push(1);
        values.insert(3, 2);
    }

    #[test]
    fn test_remove_shifts_tail_left() {
        let mut values = Vector::new();
        for n in [1, 2, 3, 4] {
            values.push(n);
        }
        assert_eq!(values.remove(1), 2);
        assert_eq!(values.as_slice(), &[1, 3, 4]);
        assert_eq!(values.remove(2), 4);
        assert_eq!(values.as_slice(), &[1, 3]);
        assert_eq!(values.remove(0), 1);
        assert_eq!(values.as_slice(), &[3]);
    }

    #[test]
    #[should_panic(expected = "remove index 2 out of bounds for length 2")]
    fn test_remove_past_len_panics() {
        let mut values = Vector::new();
        values.push(1);
        values.push(2);
        values.remove(2);
    }

    #[test]
    fn test_truncate_drops_tail_only() {
        let mut values = Vector::new();
        for n in 0..6 {
            values.push(n);
        }
        let capacity = values.capacity();
        values.truncate(2);
        assert_eq!(values.as_slice(), &[0, 1]);
        assert_eq!(values.capacity(), capacity);

        values.truncate(5);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut values = Vector::new();
        values.push(1);
        values.push(2);
        let capacity = values.capacity();
        values.clear();
        assert!(values.is_empty());
        assert_eq!(values.capacity(), capacity);
    }

    #[test]
    fn test_resize_grows_and_shrinks() {
        let mut values: Vector<u32> = Vector::new();
        values.resize(4);
        assert_eq!(values.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(values.capacity(), 4);

        values.resize(2);
        assert_eq!(values.as_slice(), &[0, 0]);
        assert_eq!(values.capacity(), 4);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Vector::new();
        original.push(String::from("one"));
        original.push(String::from("two"));

        let duplicate = original.clone();
        original.push(String::from("three"));

        assert_eq!(duplicate.len(), 2);
        assert_eq!(duplicate.capacity(), 2);
        assert_eq!(&duplicate[1], "two");
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn test_clone_from_reuses_storage() {
        let mut destination = Vector::new();
        for n in 0..8 {
            destination.push(n);
        }
        let address = destination.as_ptr();

        let mut source = Vector::new();
        for n in [90, 91, 92] {
            source.push(n);
        }

        destination.clone_from(&source);
        assert_eq!(destination.as_slice(), &[90, 91, 92]);
        assert_eq!(destination.as_ptr(), address);
    }

    #[test]
    fn test_clone_from_copies_exact_tail() {
        let mut destination = Vector::with_capacity(4);
        destination.push(9);

        let mut source = Vector::new();
        for n in [1, 2, 3] {
            source.push(n);
        }

        destination.clone_from(&source);
        assert_eq!(destination.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_clone_from_grows_when_needed() {
        let mut destination = Vector::new();
        destination.push(1);

        let mut source = Vector::new();
        for n in 0..20 {
            source.push(n);
        }

        destination.clone_from(&source);
        assert_eq!(destination.as_slice(), source.as_slice());
        assert!(destination.capacity() >= 20);
    }

    #[test]
    fn test_slice_views_and_iteration() {
        let mut values = Vector::new();
        for n in 1..=4 {
            values.push(n);
        }

        assert_eq!(values[2], 3);
        assert_eq!(&values[1..3], &[2, 3]);
        assert_eq!(values.iter().sum::<i32>(), 10);

        for value in &mut values {
            *value *= 2;
        }
        assert_eq!(values.as_slice(), &[2, 4, 6, 8]);
    }

    #[test]
    fn test_get_unchecked_reads_live_slots() {
        let mut values = Vector::new();
        values.push(11);
        values.push(22);
        // SAFETY: both indices are below the length.
        unsafe {
            assert_eq!(*values.get_unchecked(0), 11);
            *values.get_unchecked_mut(1) = 23;
        }
        assert_eq!(values.as_slice(), &[11, 23]);
    }

    #[test]
    fn test_equality_and_debug() {
        let mut left = Vector::new();
        let mut right = Vector::with_capacity(16);
        for n in [1, 2, 3] {
            left.push(n);
            right.push(n);
        }
        assert_eq!(left, right);
        assert_eq!(format!("{left:?}"), "[1, 2, 3]");

        right.push(4);
        assert_ne!(left, right);
    }

    #[test]
    fn test_take_leaves_empty_vector() {
        let mut values = Vector::new();
        values.push(1);
        values.push(2);

        let taken = mem::take(&mut values);
        assert_eq!(taken.as_slice(), &[1, 2]);
        assert!(values.is_empty());
        assert_eq!(values.capacity(), 0);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut values = Vector::new();
        for _ in 0..5 {
            values.push(());
        }
        assert_eq!(values.len(), 5);
        assert_eq!(values.capacity(), 8);
        assert_eq!(values.pop(), Some(()));
        values.remove(0);
        assert_eq!(values.len(), 3);
        values.insert(1, ());
        assert_eq!(values.len(), 4);
    }
}
