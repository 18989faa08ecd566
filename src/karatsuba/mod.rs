//! Karatsuba multiplier
//!
//! This module is the crate's only recursive component. It multiplies
//! two digit strings with three recursive sub-products per level and
//! recombines them using the primitives from [`crate::arith`].
//!
//! - `core`
//!   The recursion itself, the [`Multiplier`] entry point and the
//!   [`multiply`] convenience function.
//!
//! - `params`
//!   [`KaratsubaParams`]: optional parallel evaluation threshold and
//!   operand length limit, validated when a `Multiplier` is built.
//!
//! - [`reference`]
//!   Schoolbook long multiplication, used as an independent baseline by
//!   tests and benchmarks.
//!
//! With the `parallel` feature the three sub-products of large frames are
//! evaluated through `rayon::join`. The recursion tree and the result are
//! identical either way.

pub(crate) mod core;
mod params;
pub mod reference;

pub use self::core::{Multiplier, Product, RecursionStats, multiply};
pub use self::params::{KaratsubaParams, ParamError};
