//! Pluggable allocation strategy for carton containers.
//!
//! A container never talks to the global allocator directly. It asks an
//! [`Allocator`] to acquire a region for a given [`Layout`] and hands the
//! same region back, with the same layout, exactly once when it is done.
//! Nothing else is assumed about the policy behind the two operations.
//!
//! [`SystemAllocator`] is the default strategy and forwards to the
//! process-wide global allocator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod stats;
pub mod system;

use std::alloc::Layout;
use std::ptr::NonNull;

pub use carton_core::AllocError;
pub use stats::AllocStats;
pub use system::SystemAllocator;

/// Result type for allocation operations.
pub type AllocResult<T> = Result<T, AllocError>;

/// An allocation strategy: acquire a region, release a region.
///
/// Implementations are cheap handles. Containers clone the handle when
/// they are copied, so every copy acquires and releases through the same
/// strategy, but each copy owns its own regions.
pub trait Allocator {
    /// Acquire a region for `layout`.
    ///
    /// `layout.size()` is never zero when called by carton containers;
    /// zero-sized requests are satisfied without consulting the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the region cannot be provided.
    fn allocate(&self, layout: Layout) -> AllocResult<NonNull<u8>>;

    /// Release a region previously returned by [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    /// - `ptr` was acquired from this strategy (or a clone of it) with
    ///   exactly `layout`
    /// - `ptr` has not been released before
    /// - no reference into the region outlives this call
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn allocate(&self, layout: Layout) -> AllocResult<NonNull<u8>> {
        (**self).allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded verbatim; the caller upholds the contract.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}

/// Layout of a region holding `slots` values of `T`.
///
/// # Errors
///
/// Returns [`AllocError::CapacityOverflow`] if the byte size does not fit
/// in `isize::MAX`.
pub fn array_layout<T>(slots: usize) -> AllocResult<Layout> {
    Layout::array::<T>(slots).map_err(|_| AllocError::CapacityOverflow { slots })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_layout_scales_with_slots() {
        let layout = array_layout::<u64>(10).unwrap();
        assert_eq!(layout.size(), 80);
        assert_eq!(layout.align(), std::mem::align_of::<u64>());
    }

    #[test]
    fn array_layout_rejects_overflow() {
        let err = array_layout::<u64>(usize::MAX / 2).unwrap_err();
        assert_eq!(
            err,
            AllocError::CapacityOverflow {
                slots: usize::MAX / 2
            }
        );
    }

    #[test]
    fn reference_forwards_to_strategy() {
        let system = SystemAllocator;
        let by_ref = &system;
        let layout = array_layout::<u32>(4).unwrap();
        let ptr = by_ref.allocate(layout).unwrap();
        // SAFETY: ptr was acquired above with the same layout.
        unsafe { by_ref.deallocate(ptr, layout) };
    }
}
