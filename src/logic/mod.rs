//! Type-level booleans and natural numbers.
//!
//! These are the values that list operations compute with: predicates answer with a [`Bool`],
//! positions and counts are [`Nat`]s. Nothing here exists at runtime except the `VALUE` constants.

mod boolean;
mod natural;

pub use boolean::*;
pub use natural::*;
