//! The traits that parameterize list operations.
//!
//! Operations like [`Filter`](super::Filter) take a marker type rather than a function. The marker
//! implements one of these traits for every element type it can handle; using it on an element it
//! doesn't handle is a compile error.

use std::marker::PhantomData;

use crate::logic::{Bool, Nat, NatLt};

/// A type-level function from an element type to a [`Bool`].
///
/// # Examples
/// ```
/// # use typelist::{Predicate, True, False};
/// struct IsSigned;
///
/// impl Predicate<i32> for IsSigned { type Output = True; }
/// impl Predicate<u32> for IsSigned { type Output = False; }
/// ```
pub trait Predicate<T> {
    type Output: Bool;
}

/// A type-level function from an element type to another type.
pub trait Mapper<T> {
    type Output;
}

/// A strict ordering between element types: [`True`](crate::True) iff `A` goes before `B`.
pub trait Comparator<A, B> {
    type Output: Bool;
}

/// One step of a fold: the new accumulator, given the current accumulator and the next element.
pub trait Combine<Acc, T> {
    type Output;
}

/// The negation of predicate `P`.
pub struct Not<P>(PhantomData<P>);

impl<P: Predicate<T>, T> Predicate<T> for Not<P> {
    type Output = <P::Output as Bool>::Not;
}

/// Comparator `C` with its arguments swapped, i.e. the reverse order.
pub struct Descending<C>(PhantomData<C>);

impl<C: Comparator<B, A>, A, B> Comparator<A, B> for Descending<C> {
    type Output = <C as Comparator<B, A>>::Output;
}

/// Types that have a position in some order, given as a type-level number.
///
/// Implement this for the element types you want to sort with [`ByRank`].
pub trait Ranked {
    type Rank: Nat;
}

/// Orders elements by ascending [`Ranked::Rank`].
///
/// # Examples
/// ```
/// # use typelist::{assert_same, ByRank, List, Ranked, Sorted, U1, U2, U4};
/// struct Small;
/// struct Medium;
/// struct Large;
///
/// impl Ranked for Small { type Rank = U1; }
/// impl Ranked for Medium { type Rank = U2; }
/// impl Ranked for Large { type Rank = U4; }
///
/// assert_same::<Sorted<List![Large, Small, Medium], ByRank>, List![Small, Medium, Large]>();
/// ```
pub struct ByRank;

impl<A: Ranked, B: Ranked> Comparator<A, B> for ByRank
where
    A::Rank: NatLt<B::Rank>,
{
    type Output = <A::Rank as NatLt<B::Rank>>::Output;
}
