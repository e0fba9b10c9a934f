//! Growable contiguous array built directly on raw storage.
//!
//! [`DynamicArray`] owns a single region acquired from a pluggable
//! [`Allocator`] and keeps three quantities consistent across every
//! operation: the region, the number of live elements, and the number of
//! allocated slots. Capacity changes follow a [`GrowthPolicy`]:
//!
//! - insertions that do not fit grow the region to
//!   `required * growth_factor`;
//! - removals shrink it to `len * growth_factor` once it exceeds
//!   `len * shrink_factor`;
//! - `clear` returns to the policy's minimal allocation.
//!
//! Fallible operations return [`ArrayError`]. When an allocation is
//! refused the array is left exactly as it was before the call.
//!
//! This crate contains `unsafe` code, confined to the `raw` and `array`
//! modules.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod array;
pub mod config;
mod fmt;
mod raw;

pub use array::DynamicArray;
pub use carton_alloc::{Allocator, SystemAllocator};
pub use carton_core::ArrayError;
pub use config::GrowthPolicy;
