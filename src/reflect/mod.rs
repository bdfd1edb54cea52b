//! Runtime views of type lists whose elements are all `'static`.
//!
//! Everything else in this crate happens in the trait solver. This module answers the questions
//! that the trait solver can't: whether a list holds exactly some type `U` (there's no stable way
//! to get a type-level "no" out of a type comparison), and what the elements are called. The
//! answers come from [`TypeId`](std::any::TypeId) and [`type_name`](std::any::type_name), so
//! they're computed at runtime, although the optimizer will usually fold them to constants.

mod error;
mod reflect;

pub use error::*;
pub use reflect::*;
