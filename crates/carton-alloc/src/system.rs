//! The default strategy, backed by the global allocator.

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::{AllocError, AllocResult, Allocator};

/// Forwards to the process-wide global allocator.
///
/// Stateless and `Copy`: every array using it shares the same strategy,
/// while each array still owns its own regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn allocate(&self, layout: Layout) -> AllocResult<NonNull<u8>> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: layout has a non-zero size, checked above.
        let ptr = unsafe { std::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or_else(|| {
            tracing::warn!(bytes = layout.size(), "global allocator refused request");
            AllocError::OutOfMemory {
                requested: layout.size(),
            }
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() == 0 {
            return;
        }
        // SAFETY: the caller guarantees ptr came from `allocate` with this
        // layout, which forwarded to the global allocator.
        unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_and_release() {
        let layout = Layout::array::<u64>(16).unwrap();
        let ptr = SystemAllocator.allocate(layout).unwrap();
        assert_eq!(ptr.as_ptr() as usize % layout.align(), 0);
        // SAFETY: ptr was acquired above with the same layout.
        unsafe { SystemAllocator.deallocate(ptr, layout) };
    }

    #[test]
    fn zero_sized_request_is_dangling() {
        let layout = Layout::from_size_align(0, 8).unwrap();
        let ptr = SystemAllocator.allocate(layout).unwrap();
        assert_eq!(ptr, NonNull::dangling());
        // SAFETY: zero-sized release is a no-op.
        unsafe { SystemAllocator.deallocate(ptr, layout) };
    }
}
