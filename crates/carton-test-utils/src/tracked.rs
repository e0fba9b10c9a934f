//! Element type that reports its own lifecycle.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    clones: Cell<usize>,
    drops: Cell<usize>,
    clone_limit: Cell<Option<usize>>,
}

/// Shared counters for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub struct Tracker {
    counts: Rc<Counts>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counts.drops.get()
    }

    /// Number of clones made so far.
    pub fn cloned(&self) -> usize {
        self.counts.clones.get()
    }

    /// Make the clone after the next `n` successful ones panic.
    pub fn panic_on_clone_after(&self, n: usize) {
        self.counts.clone_limit.set(Some(self.cloned() + n));
    }
}

/// An integer payload that increments its [`Tracker`] when cloned and
/// when dropped.
///
/// Used to check that a container drops each element exactly once and
/// clones only where it must.
pub struct Tracked {
    value: i64,
    counts: Rc<Counts>,
}

impl Tracked {
    /// Shorthand for [`Tracker::new`].
    pub fn counter() -> Tracker {
        Tracker::new()
    }

    pub fn new(value: i64, tracker: &Tracker) -> Self {
        Self {
            value,
            counts: Rc::clone(&tracker.counts),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let made = self.counts.clones.get();
        if self.counts.clone_limit.get() == Some(made) {
            panic!("tracked clone limit reached after {made} clones");
        }
        self.counts.clones.set(made + 1);
        Self {
            value: self.value,
            counts: Rc::clone(&self.counts),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counts.drops.set(self.counts.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

impl fmt::Display for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
