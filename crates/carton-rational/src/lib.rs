//! Reduced-form rational numbers.
//!
//! A [`Rational`] is a quotient `num / den` of two signed integers of the
//! same primitive type, always stored in lowest terms with a positive
//! denominator. Arithmetic is carried out exactly in `i128` and narrowed
//! back to the component type; results that do not fit are reported as
//! [`RationalError::Overflow`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod int;
pub mod rational;

pub use carton_core::RationalError;
pub use int::RationalInt;
pub use rational::Rational;
