//! Core types for the carton workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy used throughout the workspace: allocation failures raised
//! by an allocation strategy, container errors raised by
//! `DynamicArray`, and validation errors raised by the rational type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::{AllocError, ArrayError, RationalError};
