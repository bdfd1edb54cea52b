//! The type list and its operations.
//!
//! Every operation is a trait implemented by [`Nil`] and [`Cons`] (often through a blanket impl),
//! with the resulting list as an associated type. Each trait comes with a type alias named after
//! what it produces, so `<L as Reverse>::Output` can be written `Reversed<L>`. Results are lists
//! themselves, so operations chain:
//!
//! ```
//! # use typelist::{assert_same, List, PoppedFront, PushedBack, Reversed};
//! type L = List![u8, u16, u32];
//! assert_same::<PoppedFront<Reversed<PushedBack<L, List![u64]>>>, List![u32, u16, u8]>();
//! ```
//!
//! Operations that take a type-level function (a predicate, mapper, comparator or fold combiner)
//! take a marker type implementing one of the traits in [`params`].

mod fold;
pub mod params;
mod positional;
mod search;
mod sort;
mod transform;
mod type_list;
mod tests;

pub use fold::*;
pub use params::*;
pub use positional::*;
pub use search::*;
pub use sort::*;
pub use transform::*;
pub use type_list::*;
