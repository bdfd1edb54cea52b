//! Operations that address elements by position, or add and remove them at the ends.
//!
//! Positions and counts are type-level numbers ([`U0`](crate::U0), [`U1`](crate::U1), ...). An
//! out-of-range position leaves the trait unimplemented, so it fails to compile instead of being
//! clamped:
//!
//! ```compile_fail
//! # use typelist::{At, List, U2};
//! type Oops = At<List![u8, u16], U2>;
//! let _: Option<Oops> = None;
//! ```
//!
//! The same goes for replacing, slicing and splitting:
//!
//! ```compile_fail
//! # use typelist::{List, Replaced, U2};
//! let _: Option<Replaced<List![u8, u16], U2, i8>> = None;
//! ```
//!
//! ```compile_fail
//! # use typelist::{List, Sliced, U1, U2};
//! let _: Option<Sliced<List![u8, u16], U1, U2>> = None;
//! ```
//!
//! ```compile_fail
//! # use typelist::{List, SplitLeft, U3};
//! let _: Option<SplitLeft<List![u8, u16], U3>> = None;
//! ```
//!
//! Popping from an empty list is rejected the same way:
//!
//! ```compile_fail
//! # use typelist::{List, PoppedFront};
//! let _: Option<PoppedFront<List![]>> = None;
//! ```
//!
//! ```compile_fail
//! # use typelist::{List, PoppedBack};
//! let _: Option<PoppedBack<List![]>> = None;
//! ```

use crate::logic::{Nat, S, Z};

use super::{Cons, Nil, TypeList};

/// The element at position `N`.
pub trait Get<N: Nat>: TypeList {
    type Output;
}

impl<H, T: TypeList> Get<Z> for Cons<H, T> {
    type Output = H;
}

impl<H, T: Get<N>, N: Nat> Get<S<N>> for Cons<H, T> {
    type Output = <T as Get<N>>::Output;
}

/// The list with the element at position `N` replaced by `U`.
pub trait Set<N: Nat, U>: TypeList {
    type Output: TypeList;
}

impl<H, T: TypeList, U> Set<Z, U> for Cons<H, T> {
    type Output = Cons<U, T>;
}

impl<H, T: Set<N, U>, N: Nat, U> Set<S<N>, U> for Cons<H, T> {
    type Output = Cons<H, <T as Set<N, U>>::Output>;
}

/// The list without its first `N` elements. `N` may be at most the length of the list.
pub trait Skip<N>: TypeList {
    type Output: TypeList;
}

impl<L: TypeList> Skip<Z> for L {
    type Output = L;
}

impl<H, T: Skip<N>, N: Nat> Skip<S<N>> for Cons<H, T> {
    type Output = <T as Skip<N>>::Output;
}

/// A count meaning "all remaining elements", for [`Take`] and [`Slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rest;

/// The first `N` elements of the list. `N` is either a [`Nat`] no greater than the length of the
/// list, or [`Rest`] for the whole list.
pub trait Take<N>: TypeList {
    type Output: TypeList;
}

impl<L: TypeList> Take<Rest> for L {
    type Output = L;
}

impl<L: TypeList> Take<Z> for L {
    type Output = Nil;
}

impl<H, T: Take<N>, N: Nat> Take<S<N>> for Cons<H, T> {
    type Output = Cons<H, <T as Take<N>>::Output>;
}

/// `Count` elements starting from position `From`.
///
/// `From + Count` may be at most the length of the list. `Count` defaults to [`Rest`], which
/// takes everything from `From` onward. A `Count` of [`U0`](crate::U0) gives [`Nil`].
///
/// # Examples
/// ```
/// # use typelist::{assert_same, List, Sliced, U0, U1, U2};
/// type L = List![i32, u8, f32];
/// assert_same::<Sliced<L, U0>, L>();
/// assert_same::<Sliced<L, U1, U2>, List![u8, f32]>();
/// assert_same::<Sliced<L, U1, U0>, List![]>();
/// ```
pub trait Slice<From, Count = Rest>: TypeList {
    type Output: TypeList;
}

impl<L, From, Count> Slice<From, Count> for L
where
    L: Skip<From>,
    <L as Skip<From>>::Output: Take<Count>,
{
    type Output = <<L as Skip<From>>::Output as Take<Count>>::Output;
}

/// Splits the list in two at position `N`: `Left` holds positions `[0, N)` and `Right` holds
/// `[N, LEN)`. `N` may be at most the length of the list.
pub trait SplitAt<N: Nat>: TypeList {
    type Left: TypeList;
    type Right: TypeList;
}

impl<L: TypeList> SplitAt<Z> for L {
    type Left = Nil;
    type Right = L;
}

impl<H, T: SplitAt<N>, N: Nat> SplitAt<S<N>> for Cons<H, T> {
    type Left = Cons<H, <T as SplitAt<N>>::Left>;
    type Right = <T as SplitAt<N>>::Right;
}

/// All elements of `R` appended to the list.
pub trait Concat<R: TypeList>: TypeList {
    type Output: TypeList;
}

impl<R: TypeList> Concat<R> for Nil {
    type Output = R;
}

impl<H, T: Concat<R>, R: TypeList> Concat<R> for Cons<H, T> {
    type Output = Cons<H, <T as Concat<R>>::Output>;
}

/// The elements of `Us` added to the end. Pushing [`Nil`] gives back the same list.
///
/// # Examples
/// ```
/// # use typelist::{assert_same, List, PushedBack};
/// assert_same::<PushedBack<List![i32], List![u8, i32]>, List![i32, u8, i32]>();
/// assert_same::<PushedBack<List![i32], List![]>, List![i32]>();
/// ```
pub trait PushBack<Us: TypeList>: TypeList {
    type Output: TypeList;
}

impl<L: Concat<Us>, Us: TypeList> PushBack<Us> for L {
    type Output = <L as Concat<Us>>::Output;
}

/// The elements of `Us` added to the front, in their order. Pushing [`Nil`] gives back the same
/// list.
pub trait PushFront<Us: TypeList>: TypeList {
    type Output: TypeList;
}

impl<L: TypeList, Us: Concat<L>> PushFront<Us> for L {
    type Output = <Us as Concat<L>>::Output;
}

/// The list without its first element. Not implemented for [`Nil`].
pub trait PopFront: TypeList {
    type Output: TypeList;
}

impl<H, T: TypeList> PopFront for Cons<H, T> {
    type Output = T;
}

/// The list without its last element. Not implemented for [`Nil`].
pub trait PopBack: TypeList {
    type Output: TypeList;
}

impl<H> PopBack for Cons<H, Nil> {
    type Output = Nil;
}

impl<H, N, T> PopBack for Cons<H, Cons<N, T>>
where
    Cons<N, T>: PopBack,
{
    type Output = Cons<H, <Cons<N, T> as PopBack>::Output>;
}

pub type At<L, N> = <L as Get<N>>::Output;

pub type Replaced<L, N, U> = <L as Set<N, U>>::Output;

pub type Skipped<L, N> = <L as Skip<N>>::Output;

pub type Taken<L, N> = <L as Take<N>>::Output;

pub type Sliced<L, From, Count = Rest> = <L as Slice<From, Count>>::Output;

pub type SplitLeft<L, N> = <L as SplitAt<N>>::Left;

pub type SplitRight<L, N> = <L as SplitAt<N>>::Right;

/// Both halves of [`SplitAt`], as a pair.
pub type Split<L, N> = (SplitLeft<L, N>, SplitRight<L, N>);

pub type Concatenated<L, R> = <L as Concat<R>>::Output;

pub type PushedBack<L, Us> = <L as PushBack<Us>>::Output;

pub type PushedFront<L, Us> = <L as PushFront<Us>>::Output;

pub type PoppedFront<L> = <L as PopFront>::Output;

pub type PoppedBack<L> = <L as PopBack>::Output;
