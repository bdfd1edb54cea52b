use super::params::Combine;
use super::{Cons, Nil, Reverse, TypeList};

/// Left-associative fold: starting from `Init`, combines the accumulator with each element from
/// first to last using `F`.
///
/// Folding [`Nil`] gives back `Init` unchanged. Most of the other operations are a fold with a
/// particular combiner.
///
/// # Examples
/// ```
/// # use typelist::{assert_same, Combine, Cons, FoldedLeft, List, Nil, TypeList};
/// struct Prepend;
///
/// impl<Acc: TypeList, T> Combine<Acc, T> for Prepend {
///     type Output = Cons<T, Acc>;
/// }
///
/// assert_same::<FoldedLeft<List![u8, u16, u32], Nil, Prepend>, List![u32, u16, u8]>();
/// ```
pub trait FoldLeft<Init, F>: TypeList {
    type Output;
}

impl<Init, F> FoldLeft<Init, F> for Nil {
    type Output = Init;
}

impl<H, T, Init, F> FoldLeft<Init, F> for Cons<H, T>
where
    F: Combine<Init, H>,
    T: FoldLeft<<F as Combine<Init, H>>::Output, F>,
{
    type Output = <T as FoldLeft<<F as Combine<Init, H>>::Output, F>>::Output;
}

/// Right-associative fold: [`FoldLeft`] over the reversed list, so elements are combined from last
/// to first.
pub trait FoldRight<Init, F>: TypeList {
    type Output;
}

impl<L, Init, F> FoldRight<Init, F> for L
where
    L: Reverse,
    <L as Reverse>::Output: FoldLeft<Init, F>,
{
    type Output = <<L as Reverse>::Output as FoldLeft<Init, F>>::Output;
}

pub type FoldedLeft<L, Init, F> = <L as FoldLeft<Init, F>>::Output;

pub type FoldedRight<L, Init, F> = <L as FoldRight<Init, F>>::Output;
