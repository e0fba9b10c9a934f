//! Observing and refusing allocation strategies.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::cell::{Cell, RefCell};
use std::ptr::NonNull;
use std::rc::Rc;

use carton_alloc::{AllocError, AllocResult, AllocStats, Allocator, SystemAllocator};
use indexmap::IndexMap;

#[derive(Default)]
struct Ledger {
    stats: AllocStats,
    /// Live regions in acquisition order, keyed by address.
    live: IndexMap<usize, Layout>,
}

/// Forwards to [`SystemAllocator`] and records every live region.
///
/// Clones share one ledger, so a test keeps a handle and inspects it after
/// the container under test (which holds another clone) has acted.
/// Releasing a region that is not live, or with a layout different from
/// the one it was acquired with, panics.
#[derive(Clone, Default)]
pub struct CountingAllocator {
    ledger: Rc<RefCell<Ledger>>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> AllocStats {
        self.ledger.borrow().stats
    }

    /// Number of regions acquired and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.ledger.borrow().live.len()
    }

    /// Layouts of the live regions, oldest first.
    pub fn live_layouts(&self) -> Vec<Layout> {
        self.ledger.borrow().live.values().copied().collect()
    }

    fn record_failure(&self) {
        self.ledger.borrow_mut().stats.record_failure();
    }
}

impl Allocator for CountingAllocator {
    fn allocate(&self, layout: Layout) -> AllocResult<NonNull<u8>> {
        let result = SystemAllocator.allocate(layout);
        let mut ledger = self.ledger.borrow_mut();
        match result {
            Ok(ptr) => {
                ledger.stats.record_alloc(layout.size());
                ledger.live.insert(ptr.as_ptr() as usize, layout);
            }
            Err(_) => ledger.stats.record_failure(),
        }
        result
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        {
            let mut ledger = self.ledger.borrow_mut();
            let recorded = ledger.live.shift_remove(&(ptr.as_ptr() as usize));
            match recorded {
                Some(acquired) => assert_eq!(
                    acquired, layout,
                    "region released with a different layout than it was acquired with"
                ),
                None => panic!("release of a region that is not live: {ptr:p}"),
            }
            ledger.stats.record_dealloc(layout.size());
        }
        // SAFETY: the ledger confirmed ptr is live and was acquired from
        // SystemAllocator with this layout.
        unsafe { SystemAllocator.deallocate(ptr, layout) };
    }
}

/// A [`CountingAllocator`] that refuses requests on demand.
///
/// Refusals come from an acquisition budget (shared between clones) and
/// an optional per-request byte limit. A refused request reports
/// [`AllocError::OutOfMemory`] without touching the global allocator.
#[derive(Clone, Default)]
pub struct FailingAllocator {
    inner: CountingAllocator,
    remaining: Rc<Cell<Option<usize>>>,
    max_bytes: Option<usize>,
}

impl FailingAllocator {
    /// Grant `successes` acquisitions, then refuse every request.
    pub fn after(successes: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(Some(successes))),
            ..Self::default()
        }
    }

    /// Refuse any single request larger than `bytes`.
    pub fn above(bytes: usize) -> Self {
        Self {
            max_bytes: Some(bytes),
            ..Self::default()
        }
    }

    /// Replace the acquisition budget. `None` removes it.
    pub fn set_budget(&self, successes: Option<usize>) {
        self.remaining.set(successes);
    }

    pub fn stats(&self) -> AllocStats {
        self.inner.stats()
    }

    pub fn live_blocks(&self) -> usize {
        self.inner.live_blocks()
    }

    fn refuses(&self, layout: Layout) -> bool {
        if self.max_bytes.is_some_and(|max| layout.size() > max) {
            return true;
        }
        match self.remaining.get() {
            Some(0) => true,
            Some(n) => {
                self.remaining.set(Some(n - 1));
                false
            }
            None => false,
        }
    }
}

impl Allocator for FailingAllocator {
    fn allocate(&self, layout: Layout) -> AllocResult<NonNull<u8>> {
        if self.refuses(layout) {
            self.inner.record_failure();
            return Err(AllocError::OutOfMemory {
                requested: layout.size(),
            });
        }
        self.inner.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded verbatim; every granted region came from inner.
        unsafe { self.inner.deallocate(ptr, layout) }
    }
}
