//! Carton: a growable contiguous array built on raw storage, and the
//! reduced-form rational type used to exercise it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all carton sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use carton::prelude::*;
//!
//! let mut values: DynamicArray<Rational> = DynamicArray::new()?;
//! values.push_back(Rational::new(94, -64)?)?;
//! values.insert(0, Rational::one())?;
//! assert_eq!(values.to_string(), "1 / 1; -47 / 32; ");
//!
//! assert!(matches!(values.get(2), Err(ArrayError::OutOfRange { index: 2, len: 2 })));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `carton-core` | Error types |
//! | [`alloc`] | `carton-alloc` | `Allocator` trait, `SystemAllocator`, `AllocStats` |
//! | [`array`] | `carton-array` | `DynamicArray`, `GrowthPolicy` |
//! | [`rational`] | `carton-rational` | `Rational`, `RationalInt` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error types shared by every carton crate (`carton-core`).
pub use carton_core as types;

/// Pluggable allocation strategy (`carton-alloc`).
///
/// Implement [`alloc::Allocator`] to control where an array's storage
/// comes from; [`alloc::SystemAllocator`] is the default.
pub use carton_alloc as alloc;

/// The growable array (`carton-array`).
pub use carton_array as array;

/// Reduced-form rational numbers (`carton-rational`).
pub use carton_rational as rational;

/// Common imports for typical carton usage.
///
/// ```rust
/// use carton::prelude::*;
/// ```
pub mod prelude {
    pub use carton_alloc::{Allocator, SystemAllocator};
    pub use carton_array::{DynamicArray, GrowthPolicy};
    pub use carton_core::{AllocError, ArrayError, RationalError};
    pub use carton_rational::{Rational, RationalInt};
}
