//! The growable contiguous array.
//!
//! [`DynamicArray`] owns one `RawBuf` and a length. Slots `[0, len)` are
//! live; slots `[len, capacity)` are uninitialised. Every growth path
//! acquires the new region before it touches `len` or the old region, so a
//! refused allocation leaves the array exactly as it was.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use carton_alloc::{AllocError, Allocator, SystemAllocator};
use carton_core::ArrayError;
use tracing::{debug, trace};

use crate::config::GrowthPolicy;
use crate::raw::RawBuf;

/// A contiguous, heap-resident sequence of `T` with explicit capacity control.
///
/// Storage is acquired from, and released to, the allocation strategy `A`.
/// Capacity grows by [`GrowthPolicy::growth_factor`] when an insertion
/// does not fit, and shrinks after removals once the buffer is more than
/// [`GrowthPolicy::shrink_factor`] times larger than the length.
///
/// Elements are reached by index ([`get`](Self::get), [`set`](Self::set))
/// or through the borrowed view returned by [`data`](Self::data). The view
/// borrows the array, so no capacity-changing call can run while it is
/// alive.
///
/// ```
/// use carton_array::DynamicArray;
///
/// let mut values = DynamicArray::from_slice(&[11, 20, 40, 100, 135, 341])?;
/// values.erase(3, 2);
/// assert_eq!(values.data(), &[11, 20, 40, 341]);
/// values.push_back(7)?;
/// assert_eq!(*values.get(4)?, 7);
/// # Ok::<(), carton_core::ArrayError>(())
/// ```
pub struct DynamicArray<T, A: Allocator = SystemAllocator> {
    buf: RawBuf<T, A>,
    len: usize,
    policy: GrowthPolicy,
}

// SAFETY: the array exclusively owns its elements and its region; moving
// it to another thread moves both.
unsafe impl<T: Send, A: Allocator + Send> Send for DynamicArray<T, A> {}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default minimal capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the minimal region
    /// cannot be acquired.
    pub fn new() -> Result<Self, ArrayError> {
        Self::new_in(SystemAllocator)
    }

    /// Create an array holding `len` default values.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the region cannot be
    /// acquired.
    pub fn with_len(len: usize) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        Self::with_len_in(len, SystemAllocator)
    }

    /// Create an array holding `len` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the region cannot be
    /// acquired.
    pub fn from_elem(len: usize, value: T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::from_elem_in(len, value, SystemAllocator)
    }

    /// Create an array holding copies of `values`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the region cannot be
    /// acquired.
    pub fn from_slice(values: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        Self::from_slice_in(values, SystemAllocator)
    }

    /// Create an array holding copies of the `len` values at `src`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `src` is null or `len` is
    /// zero, before anything is allocated.
    ///
    /// # Safety
    ///
    /// If `src` is non-null it must be valid for reads of `len` initialised
    /// values of `T`.
    pub unsafe fn from_raw_parts(src: *const T, len: usize) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        // SAFETY: forwarded caller contract.
        unsafe { Self::from_raw_parts_in(src, len, SystemAllocator) }
    }
}

impl<T, A: Allocator + Clone> DynamicArray<T, A> {
    /// Create an empty array acquiring storage from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the minimal region
    /// cannot be acquired.
    pub fn new_in(alloc: A) -> Result<Self, ArrayError> {
        Self::with_capacity_in(GrowthPolicy::DEFAULT_INITIAL_CAPACITY, GrowthPolicy::DEFAULT, alloc)
    }

    /// Create an empty array with an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if the policy fails
    /// [`GrowthPolicy::validate`], or [`ArrayError::AllocationFailure`] if
    /// the minimal region cannot be acquired.
    pub fn with_policy_in(policy: GrowthPolicy, alloc: A) -> Result<Self, ArrayError> {
        policy.validate()?;
        Self::with_capacity_in(policy.initial_capacity, policy, alloc)
    }

    /// Create an array holding `len` default values, acquiring from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the region cannot be
    /// acquired.
    pub fn with_len_in(len: usize, alloc: A) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        let policy = GrowthPolicy::DEFAULT;
        let mut array = Self::with_capacity_in(policy.sized(len)?, policy, alloc)?;
        for _ in 0..len {
            // SAFETY: capacity >= len was allocated above.
            unsafe { array.write_next(T::default()) };
        }
        Ok(array)
    }

    /// Create an array holding `len` copies of `value`, acquiring from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the region cannot be
    /// acquired.
    pub fn from_elem_in(len: usize, value: T, alloc: A) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let policy = GrowthPolicy::DEFAULT;
        let mut array = Self::with_capacity_in(policy.sized(len)?, policy, alloc)?;
        for _ in 0..len {
            // SAFETY: capacity >= len was allocated above.
            unsafe { array.write_next(value.clone()) };
        }
        Ok(array)
    }

    /// Create an array holding copies of `values`, acquiring from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the region cannot be
    /// acquired.
    pub fn from_slice_in(values: &[T], alloc: A) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let policy = GrowthPolicy::DEFAULT;
        let mut array = Self::with_capacity_in(policy.sized(values.len())?, policy, alloc)?;
        // SAFETY: capacity >= values.len() was allocated above.
        unsafe { array.extend_cloned(values) };
        Ok(array)
    }

    /// Create an array holding copies of the `len` values at `src`,
    /// acquiring from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `src` is null or `len` is
    /// zero, before anything is allocated.
    ///
    /// # Safety
    ///
    /// If `src` is non-null it must be valid for reads of `len` initialised
    /// values of `T`.
    pub unsafe fn from_raw_parts_in(src: *const T, len: usize, alloc: A) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        if src.is_null() || len == 0 {
            return Err(ArrayError::invalid_argument("invalid parameters: null source or zero length"));
        }
        // SAFETY: src is non-null and the caller guarantees len readable values.
        let values = unsafe { slice::from_raw_parts(src, len) };
        Self::from_slice_in(values, alloc)
    }

    /// Copy the live elements into an independent array.
    ///
    /// The copy is sized by the growth policy for the current length; any
    /// unused capacity of `self` is not replicated.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the region cannot be
    /// acquired.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let cap = self.policy.sized(self.len)?;
        let mut copy = Self::with_capacity_in(cap, self.policy, self.buf.allocator().clone())?;
        // SAFETY: capacity >= self.len was allocated above.
        unsafe { copy.extend_cloned(self.data()) };
        Ok(copy)
    }

    /// Move the contents out, leaving `self` as a fresh default array.
    ///
    /// The returned array owns the original region verbatim; no element is
    /// copied. The replacement minimal region for `self` is acquired first,
    /// so on failure nothing has moved.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the replacement region
    /// cannot be acquired.
    pub fn take(&mut self) -> Result<Self, ArrayError> {
        let fresh = RawBuf::allocate(self.policy.initial_capacity, self.buf.allocator().clone())?;
        let buf = mem::replace(&mut self.buf, fresh);
        let len = mem::replace(&mut self.len, 0);
        Ok(Self {
            buf,
            len,
            policy: self.policy,
        })
    }

    /// Release the current contents and take over `other`'s, leaving
    /// `other` as a fresh default array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if `other`'s replacement
    /// region cannot be acquired; both arrays are then unchanged.
    pub fn move_from(&mut self, other: &mut Self) -> Result<(), ArrayError> {
        *self = other.take()?;
        Ok(())
    }

    /// Change the capacity to exactly `new_capacity` slots.
    ///
    /// - `0` is a [`clear`](Self::clear).
    /// - The current capacity is a no-op.
    /// - Anything else moves the first `min(new_capacity, len)` elements
    ///   into a new region; elements beyond a smaller capacity are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the new region cannot be
    /// acquired; the array is then unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity == 0 {
            return self.clear();
        }
        if new_capacity == self.capacity() {
            return Ok(());
        }
        let fresh = RawBuf::allocate(new_capacity, self.buf.allocator().clone())?;
        self.relocate(fresh);
        Ok(())
    }

    /// Reduce the capacity to the current length.
    ///
    /// # Errors
    ///
    /// See [`reserve`](Self::reserve).
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        self.reserve(self.len)
    }

    /// Drop every element and return to the policy's minimal allocation.
    ///
    /// This is a hard reset, not just a length reset: an over-grown region
    /// is released.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the minimal region cannot
    /// be acquired; the array is then unchanged.
    pub fn clear(&mut self) -> Result<(), ArrayError> {
        let fresh = RawBuf::allocate(self.policy.initial_capacity, self.buf.allocator().clone())?;
        debug!(
            len = self.len,
            from = self.capacity(),
            to = fresh.capacity(),
            "clearing array"
        );
        self.truncate(0);
        self.buf = fresh;
        Ok(())
    }

    /// Replace the contents with copies of `other`'s live elements.
    ///
    /// Existing capacity is reused when it is large enough; otherwise a
    /// region of `other.len() * growth_factor` slots is acquired and filled
    /// before the current contents are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if a larger region is
    /// needed and cannot be acquired; the array is then unchanged.
    pub fn assign<B: Allocator>(&mut self, other: &DynamicArray<T, B>) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        if self.capacity() < other.len() {
            let cap = self.policy.grown(other.len())?;
            let mut fresh = Self::with_capacity_in(cap, self.policy, self.buf.allocator().clone())?;
            // SAFETY: capacity >= other.len() was allocated above.
            unsafe { fresh.extend_cloned(other.data()) };
            trace!(from = self.capacity(), to = cap, len = other.len(), "assign reallocated");
            *self = fresh;
            return Ok(());
        }
        self.truncate(0);
        // SAFETY: capacity >= other.len() was checked above.
        unsafe { self.extend_cloned(other.data()) };
        Ok(())
    }

    /// Remove up to `count` elements starting at `pos`, shifting the tail
    /// left to close the gap. Returns the number of elements removed.
    ///
    /// - `pos > len()` does nothing.
    /// - `count == 0` removes everything from `pos` to the end.
    ///
    /// May shrink the buffer afterwards (see [`GrowthPolicy::shrink_factor`]).
    pub fn erase(&mut self, pos: usize, count: usize) -> usize {
        if pos > self.len {
            return 0;
        }
        let available = self.len - pos;
        let count = if count == 0 { available } else { count.min(available) };
        if count > 0 {
            let old_len = self.len;
            let tail = old_len - pos - count;
            // A panicking destructor leaks the tail instead of double-dropping it.
            self.len = pos;
            // SAFETY: [pos, pos + count) are live and dropped exactly once;
            // the tail [pos + count, old_len) is then moved down onto them.
            unsafe {
                let gap = self.buf.ptr().add(pos);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(gap, count));
                ptr::copy(gap.add(count), gap, tail);
            }
            self.len = old_len - count;
        }
        self.sanitize();
        count
    }

    /// Remove and return the last element, or `None` if empty.
    ///
    /// May shrink the buffer afterwards (see [`GrowthPolicy::shrink_factor`]).
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot len was live and is now outside [0, len).
        let value = unsafe { ptr::read(self.buf.ptr().add(self.len)) };
        self.sanitize();
        Some(value)
    }

    /// Append `value`, growing to `(len + 1) * growth_factor` if full.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if growth is needed and the
    /// region cannot be acquired; the array is then unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        self.ensure_room(1)?;
        // SAFETY: ensure_room guarantees capacity > len.
        unsafe { self.write_next(value) };
        Ok(())
    }

    /// Insert `value` before index `pos`. A `pos` at or past the end appends.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if growth is needed and the
    /// region cannot be acquired; the array is then unchanged.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), ArrayError> {
        let pos = pos.min(self.len);
        self.ensure_room(1)?;
        // SAFETY: capacity > len; the tail moves up one slot into spare
        // capacity and value fills the hole.
        unsafe {
            let at = self.buf.ptr().add(pos);
            ptr::copy(at, at.add(1), self.len - pos);
            ptr::write(at, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Insert copies of `values` before index `pos`. A `pos` at or past the
    /// end appends.
    ///
    /// The copies are made into a staging region first, so neither a
    /// refused allocation nor a panicking `clone` disturbs the array.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocationFailure`] if the staging region or
    /// the grown region cannot be acquired; the array is then unchanged.
    pub fn insert_slice(&mut self, pos: usize, values: &[T]) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        if values.is_empty() {
            return Ok(());
        }
        let mut staged = Self::with_capacity_in(values.len(), self.policy, self.buf.allocator().clone())?;
        // SAFETY: staged has exactly values.len() slots.
        unsafe { staged.extend_cloned(values) };
        self.insert_staged(pos, staged)
    }

    /// Insert copies of the `count` values at `src` before index `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `src` is null and `count`
    /// is non-zero, or [`ArrayError::AllocationFailure`] as for
    /// [`insert_slice`](Self::insert_slice).
    ///
    /// # Safety
    ///
    /// If `src` is non-null it must be valid for reads of `count`
    /// initialised values of `T`, none of which live inside this array.
    pub unsafe fn insert_raw(&mut self, pos: usize, src: *const T, count: usize) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        if count == 0 {
            return Ok(());
        }
        if src.is_null() {
            return Err(ArrayError::invalid_argument("invalid parameters: null source"));
        }
        // SAFETY: src is non-null and the caller guarantees count readable values.
        let values = unsafe { slice::from_raw_parts(src, count) };
        self.insert_slice(pos, values)
    }

    /// Insert copies of the first `count` elements of `other` before index
    /// `pos`. `count == 0` inserts all of `other`; larger counts are
    /// clamped to `other.len()`.
    ///
    /// # Errors
    ///
    /// See [`insert_slice`](Self::insert_slice).
    pub fn insert_array<B: Allocator>(
        &mut self,
        pos: usize,
        other: &DynamicArray<T, B>,
        count: usize,
    ) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let count = if count == 0 { other.len() } else { count.min(other.len()) };
        self.insert_slice(pos, &other.data()[..count])
    }

    /// Grow so that `additional` more elements fit, using the policy's
    /// growth factor. Does nothing when they already fit.
    fn ensure_room(&mut self, additional: usize) -> Result<(), ArrayError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow { slots: usize::MAX })?;
        if self.capacity() < required {
            self.reserve(self.policy.grown(required)?)?;
        }
        Ok(())
    }

    /// Move every element of `staged` into place before `pos`.
    fn insert_staged(&mut self, pos: usize, mut staged: Self) -> Result<(), ArrayError> {
        let pos = pos.min(self.len);
        let count = staged.len;
        self.ensure_room(count)?;
        // SAFETY: capacity >= len + count. The tail moves up by count into
        // spare capacity, then the staged elements are moved into the gap.
        // staged forgets them before it is dropped, so it only releases
        // its region.
        unsafe {
            let at = self.buf.ptr().add(pos);
            ptr::copy(at, at.add(count), self.len - pos);
            ptr::copy_nonoverlapping(staged.buf.ptr(), at, count);
            staged.len = 0;
        }
        self.len += count;
        Ok(())
    }

    /// Shrink after a removal once capacity exceeds `len * shrink_factor`.
    ///
    /// Best effort: the removal has already happened, so a refused
    /// allocation keeps the larger region.
    fn sanitize(&mut self) {
        let cap = self.capacity();
        if !self.policy.should_shrink(self.len, cap) {
            return;
        }
        if self.len == 0 && cap == self.policy.initial_capacity {
            return;
        }
        let target = self.len.saturating_mul(self.policy.growth_factor);
        debug!(len = self.len, from = cap, to = target, "shrinking array");
        if let Err(e) = self.reserve(target) {
            debug!(error = %e, capacity = cap, "shrink refused, keeping current region");
        }
    }
}

impl<T, A: Allocator> DynamicArray<T, A> {
    fn with_capacity_in(cap: usize, policy: GrowthPolicy, alloc: A) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: RawBuf::allocate(cap, alloc)?,
            len: 0,
            policy,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The policy this array grows and shrinks by.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// The allocation strategy backing this array.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// The live elements `[0, len)` as a contiguous slice.
    pub fn data(&self) -> &[T] {
        // SAFETY: [0, len) are live and the pointer is non-null and aligned
        // (dangling only when nothing is dereferenced).
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements `[0, len)` as a mutable contiguous slice.
    pub fn data_mut(&mut self) -> &mut [T] {
        // SAFETY: as for `data`, and &mut self guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Raw pointer to the first slot. Invalidated by any call that may
    /// change the capacity.
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Shared access to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos >= len()`.
    pub fn get(&self, pos: usize) -> Result<&T, ArrayError> {
        self.data().get(pos).ok_or(ArrayError::OutOfRange {
            index: pos,
            len: self.len,
        })
    }

    /// Mutable access to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos >= len()`.
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.data_mut()
            .get_mut(pos)
            .ok_or(ArrayError::OutOfRange { index: pos, len })
    }

    /// Overwrite the element at `pos`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `pos >= len()`; `value` is
    /// dropped and the array is unchanged.
    pub fn set(&mut self, pos: usize, value: T) -> Result<T, ArrayError> {
        self.get_mut(pos).map(|slot| mem::replace(slot, value))
    }

    /// Drop elements `[new_len, len)`. No-op if `new_len >= len`.
    fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        self.len = new_len;
        // SAFETY: [new_len, new_len + tail) were live and are now outside
        // [0, len), so they are dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr().add(new_len), tail));
        }
    }

    /// Move the surviving elements into `fresh` and adopt it, releasing
    /// the old region.
    fn relocate(&mut self, fresh: RawBuf<T, A>) {
        let keep = self.len.min(fresh.capacity());
        self.truncate(keep);
        trace!(from = self.capacity(), to = fresh.capacity(), len = keep, "reallocating");
        // SAFETY: [0, keep) are live in the old region and fit in fresh;
        // the regions are distinct allocations.
        unsafe { ptr::copy_nonoverlapping(self.buf.ptr(), fresh.ptr(), keep) };
        // The old region's slots are now logically uninitialised; dropping
        // the old RawBuf only releases it.
        self.buf = fresh;
    }

    /// Write `value` into slot `len` and count it.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    unsafe fn write_next(&mut self, value: T) {
        // SAFETY: the caller guarantees slot len is spare capacity.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Append clones of `values`, counting each as soon as it is written.
    ///
    /// # Safety
    ///
    /// `len + values.len() <= capacity` must hold.
    unsafe fn extend_cloned(&mut self, values: &[T])
    where
        T: Clone,
    {
        for value in values {
            // SAFETY: forwarded caller contract.
            unsafe { self.write_next(value.clone()) };
        }
    }
}

impl<T, A: Allocator> Drop for DynamicArray<T, A> {
    fn drop(&mut self) {
        // The region itself is released by RawBuf's own Drop.
        self.truncate(0);
    }
}

/// Diverge on a failed copy where the signature cannot return an error.
fn copy_failed<T>(err: ArrayError) -> ! {
    if let ArrayError::AllocationFailure(AllocError::OutOfMemory { requested }) = err {
        let layout = Layout::from_size_align(requested, mem::align_of::<T>())
            .unwrap_or_else(|_| Layout::new::<T>());
        std::alloc::handle_alloc_error(layout)
    }
    panic!("{err}")
}

impl<T: Clone, A: Allocator + Clone> Clone for DynamicArray<T, A> {
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts through
    /// [`std::alloc::handle_alloc_error`] when the strategy is out of memory.
    /// Use [`DynamicArray::try_clone`] to observe the error instead.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(e) => copy_failed::<T>(e),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign(source) {
            copy_failed::<T>(e)
        }
    }
}

impl<T, A: Allocator> Index<usize> for DynamicArray<T, A> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`ArrayError::OutOfRange`] message if
    /// `pos >= len()`.
    fn index(&self, pos: usize) -> &T {
        match self.get(pos) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T, A: Allocator> IndexMut<usize> for DynamicArray<T, A> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        match self.get_mut(pos) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: PartialEq<U>, U, A: Allocator, B: Allocator> PartialEq<DynamicArray<U, B>> for DynamicArray<T, A> {
    fn eq(&self, other: &DynamicArray<U, B>) -> bool {
        self.data() == other.data()
    }
}

impl<T: Eq, A: Allocator> Eq for DynamicArray<T, A> {}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for DynamicArray<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.data() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for DynamicArray<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.data() == other
    }
}

impl<T: Clone> TryFrom<&[T]> for DynamicArray<T> {
    type Error = ArrayError;

    fn try_from(values: &[T]) -> Result<Self, ArrayError> {
        Self::from_slice(values)
    }
}

impl<T, const N: usize> TryFrom<[T; N]> for DynamicArray<T> {
    type Error = ArrayError;

    /// Moves the elements in; `T` need not be `Clone`.
    fn try_from(values: [T; N]) -> Result<Self, ArrayError> {
        let policy = GrowthPolicy::DEFAULT;
        let mut array = Self::with_capacity_in(policy.sized(N)?, policy, SystemAllocator)?;
        for value in values {
            // SAFETY: capacity >= N was allocated above.
            unsafe { array.write_next(value) };
        }
        Ok(array)
    }
}
