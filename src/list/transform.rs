//! Operations that rebuild a list element by element. Each one is a [`FoldLeft`] with its own
//! combiner.

use std::marker::PhantomData;

use crate::holder::Indexed;
use crate::logic::{If, Nat, S, Z};

use super::fold::FoldLeft;
use super::params::{Combine, Mapper, Not, Predicate};
use super::positional::PushBack;
use super::{Cons, Nil, TypeList};

/// Combiner that puts each element in front of the accumulator.
pub struct Prepend;

impl<Acc, T> Combine<Acc, T> for Prepend {
    type Output = Cons<T, Acc>;
}

/// Combiner that appends each element for which `P` holds.
pub struct KeepIf<P>(PhantomData<P>);

impl<P: Predicate<T>, Acc: PushBack<Cons<T, Nil>>, T> Combine<Acc, T> for KeepIf<P> {
    type Output = If<P::Output, <Acc as PushBack<Cons<T, Nil>>>::Output, Acc>;
}

/// Combiner that appends the image of each element under `M`.
pub struct MapInto<M>(PhantomData<M>);

impl<M: Mapper<T>, Acc: PushBack<Cons<M::Output, Nil>>, T> Combine<Acc, T> for MapInto<M> {
    type Output = <Acc as PushBack<Cons<M::Output, Nil>>>::Output;
}

/// Fold accumulator that carries the position of the next element along with the list built so
/// far.
pub struct Tally<L, I>(PhantomData<(L, I)>);

/// Combiner that appends each element wrapped in an [`Indexed`] holding its position.
pub struct Number;

impl<L, I, T> Combine<Tally<L, I>, T> for Number
where
    L: PushBack<Cons<Indexed<T, I>, Nil>>,
    I: Nat,
{
    type Output = Tally<<L as PushBack<Cons<Indexed<T, I>, Nil>>>::Output, S<I>>;
}

/// Reads the finished list out of a [`Tally`].
pub trait Tallied {
    type List: TypeList;
}

impl<L: TypeList, I> Tallied for Tally<L, I> {
    type List = L;
}

/// The list in reverse order.
pub trait Reverse: TypeList {
    type Output: TypeList;
}

impl<L> Reverse for L
where
    L: FoldLeft<Nil, Prepend>,
    <L as FoldLeft<Nil, Prepend>>::Output: TypeList,
{
    type Output = <L as FoldLeft<Nil, Prepend>>::Output;
}

/// The elements for which `P` holds, in their original order.
///
/// # Examples
/// ```
/// # use typelist::{assert_same, Filtered, False, List, Predicate, True};
/// struct IsUnsigned;
///
/// impl Predicate<u8> for IsUnsigned { type Output = True; }
/// impl Predicate<i8> for IsUnsigned { type Output = False; }
///
/// assert_same::<Filtered<List![u8, i8, u8], IsUnsigned>, List![u8, u8]>();
/// ```
pub trait Filter<P>: TypeList {
    type Output: TypeList;
}

impl<L, P> Filter<P> for L
where
    L: FoldLeft<Nil, KeepIf<P>>,
    <L as FoldLeft<Nil, KeepIf<P>>>::Output: TypeList,
{
    type Output = <L as FoldLeft<Nil, KeepIf<P>>>::Output;
}

/// The elements for which `P` doesn't hold, in their original order. Together with
/// [`Filter<P>`](Filter) this partitions the list.
pub trait RemoveIf<P>: TypeList {
    type Output: TypeList;
}

impl<L: Filter<Not<P>>, P> RemoveIf<P> for L {
    type Output = <L as Filter<Not<P>>>::Output;
}

/// Each element replaced by its image under `M`. The length is unchanged.
pub trait Map<M>: TypeList {
    type Output: TypeList;
}

impl<L, M> Map<M> for L
where
    L: FoldLeft<Nil, MapInto<M>>,
    <L as FoldLeft<Nil, MapInto<M>>>::Output: TypeList,
{
    type Output = <L as FoldLeft<Nil, MapInto<M>>>::Output;
}

/// Each element `T` at position `i` replaced by [`Indexed<T, Ui>`](Indexed).
///
/// # Examples
/// ```
/// # use typelist::{assert_same, Enumerated, Indexed, List, U0, U1};
/// assert_same::<Enumerated<List![u8, char]>, List![Indexed<u8, U0>, Indexed<char, U1>]>();
/// ```
pub trait Enumerate: TypeList {
    type Output: TypeList;
}

impl<L> Enumerate for L
where
    L: FoldLeft<Tally<Nil, Z>, Number>,
    <L as FoldLeft<Tally<Nil, Z>, Number>>::Output: Tallied,
{
    type Output = <<L as FoldLeft<Tally<Nil, Z>, Number>>::Output as Tallied>::List;
}

pub type Reversed<L> = <L as Reverse>::Output;

pub type Filtered<L, P> = <L as Filter<P>>::Output;

pub type Removed<L, P> = <L as RemoveIf<P>>::Output;

pub type Mapped<L, M> = <L as Map<M>>::Output;

pub type Enumerated<L> = <L as Enumerate>::Output;
