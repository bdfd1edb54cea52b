use std::marker::PhantomData;

use crate::logic::{If, Nat, S, Z};

use super::params::Predicate;
use super::{Cons, Nil, TypeList};

/// The position that means "not found". It can't be a real position, because no list can have
/// `usize::MAX + 1` elements.
pub const NPOS: usize = usize::MAX;

/// The result of a search: [`Found<N>`](Found) or [`NotFound`].
pub trait Position {
    /// The position found, or [`NPOS`].
    const INDEX: usize;

    /// Whether anything was found.
    const FOUND: bool = Self::INDEX != NPOS;
}

/// A search result pointing at position `N`.
pub struct Found<N>(PhantomData<N>);

/// A search result pointing nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotFound;

impl<N: Nat> Position for Found<N> {
    const INDEX: usize = N::VALUE;
}

impl Position for NotFound {
    const INDEX: usize = NPOS;
}

/// Searches from the head of the list, skipping the first `Skip` elements. `At` is the position of
/// the head in the list the search started on.
pub trait SearchFrom<P, Skip, At> {
    type Output: Position;
}

impl<P, Skip, At> SearchFrom<P, Skip, At> for Nil {
    type Output = NotFound;
}

impl<P, K, At, H, T> SearchFrom<P, S<K>, At> for Cons<H, T>
where
    T: SearchFrom<P, K, S<At>>,
{
    type Output = <T as SearchFrom<P, K, S<At>>>::Output;
}

impl<P, At, H, T> SearchFrom<P, Z, At> for Cons<H, T>
where
    P: Predicate<H>,
    T: SearchFrom<P, Z, S<At>>,
    If<<P as Predicate<H>>::Output, Found<At>, <T as SearchFrom<P, Z, S<At>>>::Output>: Position,
{
    type Output = If<<P as Predicate<H>>::Output, Found<At>, <T as SearchFrom<P, Z, S<At>>>::Output>;
}

/// The position of the first element at or after `From` for which `P` holds.
///
/// The result is never before `From`. If no element matches, or `From` is past the end of the
/// list, the result is [`NotFound`] and [`INDEX`](FindIf::INDEX) is [`NPOS`].
///
/// # Examples
/// ```
/// # use typelist::{FindIf, False, List, Predicate, True, NPOS, U1, U2};
/// struct IsUnsigned;
///
/// impl Predicate<u8> for IsUnsigned { type Output = True; }
/// impl Predicate<i8> for IsUnsigned { type Output = False; }
///
/// type L = List![i8, u8, i8];
/// assert_eq!(<L as FindIf<IsUnsigned>>::INDEX, 1);
/// assert_eq!(<L as FindIf<IsUnsigned, U1>>::INDEX, 1);
/// assert_eq!(<L as FindIf<IsUnsigned, U2>>::INDEX, NPOS);
/// ```
pub trait FindIf<P, From: Nat = Z>: TypeList {
    type Output: Position;

    const INDEX: usize = <Self::Output as Position>::INDEX;
}

impl<L, P, From: Nat> FindIf<P, From> for L
where
    L: TypeList + SearchFrom<P, From, Z>,
{
    type Output = <L as SearchFrom<P, From, Z>>::Output;
}

pub type FoundIf<L, P, From = Z> = <L as FindIf<P, From>>::Output;
