//! Zero-sized stand-ins for types.
//!
//! A [`Holder<T>`] names `T` without needing a `T`, which makes it a convenient element for lists
//! of types that can't be used directly (or shouldn't be instantiated). [`Indexed<T, N>`] does
//! the same and also remembers a position, which is what [`Enumerate`](crate::Enumerate)
//! produces.

use std::marker::PhantomData;

use crate::list::Mapper;
use crate::logic::Nat;

/// Anything that stands in for another type.
pub trait Held {
    /// The type being held.
    type Type;
}

/// Holds the type `T`.
pub struct Holder<T>(PhantomData<fn() -> T>);

/// Holds the type `T` together with the position `N`.
pub struct Indexed<T, N>(PhantomData<fn() -> (T, N)>);

impl<T> Held for Holder<T> {
    type Type = T;
}

impl<T, N> Held for Indexed<T, N> {
    type Type = T;
}

impl<T, N: Nat> Indexed<T, N> {
    /// The position held.
    pub const INDEX: usize = N::VALUE;
}

/// Mapper that wraps every element in a [`Holder`].
pub struct Hold;

impl<T> Mapper<T> for Hold {
    type Output = Holder<T>;
}

/// Mapper that takes the held type out of every [`Held`] element.
///
/// # Examples
/// ```
/// # use typelist::{assert_same, Enumerated, Hold, List, Mapped, Unhold};
/// type L = List![u8, char];
/// assert_same::<Mapped<Mapped<L, Hold>, Unhold>, L>();
/// assert_same::<Mapped<Enumerated<L>, Unhold>, L>();
/// ```
pub struct Unhold;

impl<T: Held> Mapper<T> for Unhold {
    type Output = T::Type;
}

impl<T> Holder<T> {
    pub const fn new() -> Holder<T> {
        Holder(PhantomData)
    }
}

impl<T> Default for Holder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Holder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Holder<T> {}
