//! Test utilities and mock types for carton development.
//!
//! Provides allocation strategies that observe or refuse requests
//! ([`CountingAllocator`], [`FailingAllocator`]), an element type that
//! counts its own clones and drops ([`Tracked`]), and the scenario data
//! shared by unit and integration tests ([`fixtures`]).

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod allocators;
pub mod fixtures;
mod tracked;

pub use allocators::{CountingAllocator, FailingAllocator};
pub use tracked::{Tracked, Tracker};
