//! This crate is my attempt at a type list: a compile-time sequence of types with a full set of
//! operations on it.
//!
//! # Purpose
//! Type lists come up whenever generic code has to deal with "some number of types" instead of
//! one: the variants of a sum type, the fields of a record, a set of capabilities. Rust doesn't
//! have variadic generics, so the usual answer is a cons list of types, and most crates that need
//! one write a small, ad hoc version of it. This crate tries to be the complete version: pushing,
//! popping, indexing, slicing, splitting, folding, filtering, mapping, searching and sorting, all
//! done by the trait solver.
//!
//! # Method
//! A list is either [`Nil`] or [`Cons<Head, Tail>`](Cons), usually written with the
//! [`List!`](List) macro. Every operation is a trait with the result as an associated type, plus a
//! type alias for convenience:
//!
//! ```
//! use typelist::{assert_same, At, List, Reversed, Sliced, U1};
//!
//! type L = List![u8, i32, f64];
//! assert_same::<At<L, U1>, i32>();
//! assert_same::<Reversed<L>, List![f64, i32, u8]>();
//! assert_same::<Sliced<L, U1>, List![i32, f64]>();
//! ```
//!
//! Positions and counts are unary type-level numbers from [`logic`] (`U0`, `U1`, ...), and
//! predicates, mappers and comparators are marker types implementing the traits in
//! [`list::params`].
//!
//! # Error Handling
//! There isn't any, in the runtime sense. Asking for something that doesn't exist (an element past
//! the end, a slice that runs off the list, the front of an empty list) means some trait isn't
//! implemented, so the program doesn't compile. The only "soft" failure is a search that finds
//! nothing, which reports [`NPOS`] like the standard library's string searches used to.
//!
//! The runtime reflection in [`reflect`] does return errors, as small structs implementing
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! The type-level parts only use `core` functionality. The [`reflect`] module (enabled by the
//! default `reflect` feature) uses `derive_more` for its error types, because writing `Display`
//! and `Error` impls by hand gets repetitive.
//!
//! # Limitations
//! - Deciding whether two arbitrary types are the same can't be done in the trait solver on
//!   stable Rust (it can prove that they are, but can't answer "no"). So `contains` and
//!   `index_of` live in [`reflect`] and use [`TypeId`](std::any::TypeId). [`assert_same`] covers
//!   the compile-time "yes".
//! - Long lists need a raised `#![recursion_limit]` in the crate that uses them, as with any
//!   trait-level recursion.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod holder;
pub mod list;
pub mod logic;
#[cfg(feature = "reflect")]
pub mod reflect;

pub(crate) mod util;

pub use holder::*;
pub use list::*;
pub use logic::*;
#[cfg(feature = "reflect")]
pub use reflect::*;
