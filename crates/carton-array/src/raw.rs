//! Owned raw storage for array elements.
//!
//! [`RawBuf`] is a single exclusively-owned allocation handle: it knows
//! where its region is, how many slots it has, and which strategy to give
//! it back to. It never reads, writes or drops elements; tracking which
//! slots are live is the array's job. Release happens in `Drop`, so a
//! region is handed back exactly once no matter how the owner exits.

#![allow(unsafe_code)]

use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use carton_alloc::{array_layout, AllocError, Allocator};

pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: Allocator> RawBuf<T, A> {
    /// A buffer with no storage. The pointer is dangling and is never
    /// dereferenced for a non-zero-sized `T`.
    pub(crate) fn empty(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Acquire exactly `cap` slots from `alloc`.
    ///
    /// Zero slots, and any number of zero-sized slots, are satisfied
    /// without consulting the strategy.
    pub(crate) fn allocate(cap: usize, alloc: A) -> Result<Self, AllocError> {
        if cap == 0 {
            return Ok(Self::empty(alloc));
        }
        let layout = array_layout::<T>(cap)?;
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            alloc.allocate(layout)?.cast::<T>()
        };
        Ok(Self {
            ptr,
            cap,
            alloc,
            _marker: PhantomData,
        })
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn owns_region(&self) -> bool {
        self.cap != 0 && mem::size_of::<T>() != 0
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        if !self.owns_region() {
            return;
        }
        // The same layout was computed successfully in `allocate`.
        if let Ok(layout) = array_layout::<T>(self.cap) {
            // SAFETY: ptr was acquired from self.alloc with this layout and
            // RawBuf is the sole owner, so this is the one release.
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        }
    }
}
