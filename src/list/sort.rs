use crate::logic::If;

use super::params::Comparator;
use super::{Cons, Nil, TypeList};

/// Places `X` into an already sorted list: `X` moves past every element that goes strictly before
/// it, and stops in front of the first one that doesn't.
pub trait Insert<C, X> {
    type Output;
}

impl<C, X> Insert<C, X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<C, X, Y, R> Insert<C, X> for Cons<Y, R>
where
    C: Comparator<Y, X>,
    R: Insert<C, X>,
{
    type Output = If<
        <C as Comparator<Y, X>>::Output,
        Cons<Y, <R as Insert<C, X>>::Output>,
        Cons<X, Cons<Y, R>>,
    >;
}

/// The elements reordered by comparator `C`, using insertion sort.
///
/// The sort is stable: elements that `C` puts in neither order keep their relative order. Lists of
/// zero or one elements come back unchanged without `C` being consulted.
///
/// # Examples
/// ```
/// # use typelist::{assert_same, Descending, ByRank, List, Ranked, Sorted, U1, U2};
/// struct Low;
/// struct High;
///
/// impl Ranked for Low { type Rank = U1; }
/// impl Ranked for High { type Rank = U2; }
///
/// type L = List![Low, High, Low];
/// assert_same::<Sorted<L, ByRank>, List![Low, Low, High]>();
/// assert_same::<Sorted<L, Descending<ByRank>>, List![High, Low, Low]>();
/// ```
pub trait Sort<C>: TypeList {
    type Output: TypeList;
}

impl<C> Sort<C> for Nil {
    type Output = Nil;
}

impl<C, H, T> Sort<C> for Cons<H, T>
where
    T: Sort<C>,
    <T as Sort<C>>::Output: Insert<C, H>,
    <<T as Sort<C>>::Output as Insert<C, H>>::Output: TypeList,
{
    type Output = <<T as Sort<C>>::Output as Insert<C, H>>::Output;
}

pub type Sorted<L, C> = <L as Sort<C>>::Output;
