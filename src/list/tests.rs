#![cfg(test)]

use super::*;
use crate::holder::Indexed;
use crate::logic::{False, Nat, S, True, U0, U1, U2, U3, U4, U8, U9, Z};

struct IsIntegral;

struct Wrap;

/// Appends each element, the mirror image of `Prepend`.
struct Append;

/// Counts elements into a type-level number.
struct Count;

macro_rules! answers {
    ($pred:ty: $($ty:ty => $out:ty),* $(,)?) => {
        $(
            impl Predicate<$ty> for $pred {
                type Output = $out;
            }
        )*
    };
}

macro_rules! ranks {
    ($($ty:ty => $rank:ty),* $(,)?) => {
        $(
            impl Ranked for $ty {
                type Rank = $rank;
            }
        )*
    };
}

answers!(IsIntegral:
    u8 => True, i16 => True, i32 => True, u32 => True,
    f32 => False, f64 => False,
);

// Ranked by size in bytes.
ranks!(u8 => U1, i16 => U2, i32 => U4, u32 => U4, f32 => U4, f64 => U8);

impl<T> Mapper<T> for Wrap {
    type Output = Option<T>;
}

impl<Acc: PushBack<Cons<T, Nil>>, T> Combine<Acc, T> for Append {
    type Output = PushedBack<Acc, crate::List![T]>;
}

impl<N: Nat, T> Combine<N, T> for Count {
    type Output = S<N>;
}

#[test]
fn test_len() {
    assert_eq!(<crate::List![]>::LEN, 0, "The empty list should have no elements.");
    assert_eq!(<crate::List![i32]>::LEN, 1);
    assert_eq!(<crate::List![i32, u8, i32]>::LEN, 3, "Repeated types should each count.");

    assert!(<crate::List![]>::IS_EMPTY);
    assert!(Nil::IS_EMPTY);
    assert!(!<crate::List![i32]>::IS_EMPTY);

    assert_same::<<crate::List![i32, u8] as TypeList>::Len, U2>();
}

#[test]
fn test_pop_front() {
    assert_same::<PoppedFront<crate::List![i32, u8]>, crate::List![u8]>();
    assert_same::<PoppedFront<crate::List![i32]>, Nil>();
}

#[test]
fn test_pop_back() {
    assert_same::<PoppedBack<crate::List![i32, u8]>, crate::List![i32]>();
    assert_same::<PoppedBack<crate::List![i32]>, Nil>();
    assert_same::<PoppedBack<crate::List![i32, u8, f64]>, crate::List![i32, u8]>();
}

#[test]
fn test_push_back() {
    type L = crate::List![i32];

    assert_same::<PushedBack<L, Nil>, L>();
    assert_same::<PushedBack<L, crate::List![u8]>, crate::List![i32, u8]>();
    assert_same::<PushedBack<L, crate::List![u8, i32]>, crate::List![i32, u8, i32]>();
    assert_same::<PushedBack<Nil, crate::List![u8]>, crate::List![u8]>();
}

#[test]
fn test_push_front() {
    type L = crate::List![i32];

    assert_same::<PushedFront<L, Nil>, L>();
    assert_same::<PushedFront<L, crate::List![u8]>, crate::List![u8, i32]>();
    assert_same::<PushedFront<L, crate::List![u8, f64]>, crate::List![u8, f64, i32]>();
}

#[test]
fn test_push_then_pop() {
    type L = crate::List![i32, u8];

    assert_same::<PoppedBack<PushedBack<L, crate::List![f64]>>, L>();
    assert_same::<PoppedFront<PushedFront<L, crate::List![f64]>>, L>();
    assert_same::<PoppedBack<PushedBack<Nil, crate::List![f64]>>, Nil>();

    assert_eq!(
        <PushedBack<L, crate::List![f64, f32, u8]>>::LEN,
        L::LEN + 3,
        "Pushing k types should grow the list by k."
    );
    assert_eq!(<PoppedFront<L>>::LEN, L::LEN - 1);
    assert_eq!(<PoppedBack<L>>::LEN, L::LEN - 1);
}

#[test]
fn test_fold_left() {
    type L = crate::List![i32, u8, f64];

    assert_same::<FoldedLeft<L, Nil, Prepend>, crate::List![f64, u8, i32]>();
    assert_same::<FoldedLeft<L, Nil, Append>, L>();
    assert_same::<FoldedLeft<L, Z, Count>, U3>();
    assert_same::<FoldedLeft<Nil, f32, Count>, f32>();
}

#[test]
fn test_fold_right() {
    type L = crate::List![i32, u8, f64];

    assert_same::<FoldedRight<L, Nil, Append>, crate::List![f64, u8, i32]>();
    assert_same::<FoldedRight<L, Nil, Prepend>, L>();
    assert_same::<FoldedRight<Nil, u8, Append>, u8>();
}

#[test]
fn test_reverse() {
    type L = crate::List![i32, u8, f64];

    assert_same::<Reversed<L>, crate::List![f64, u8, i32]>();
    assert_same::<Reversed<Reversed<L>>, L>();
    assert_same::<Reversed<Nil>, Nil>();
    assert_same::<Reversed<Reversed<Nil>>, Nil>();
    assert_same::<Reversed<crate::List![u8]>, crate::List![u8]>();
}

#[test]
fn test_get() {
    type L = crate::List![f32, u8, f64, i16];

    assert_same::<At<L, U0>, f32>();
    assert_same::<At<L, U1>, u8>();
    assert_same::<At<L, U2>, f64>();
    assert_same::<At<L, U3>, i16>();
}

#[test]
fn test_set() {
    type L = crate::List![i32, u8, f32];

    assert_same::<Replaced<L, U0, i16>, crate::List![i16, u8, f32]>();
    assert_same::<Replaced<L, U2, i16>, crate::List![i32, u8, i16]>();
    assert_same::<Replaced<L, U1, u8>, L>();
}

#[test]
fn test_slice() {
    type L = crate::List![i32, u8, f32];

    assert_same::<Sliced<L, U0>, L>();
    assert_same::<Sliced<L, U0, U1>, crate::List![i32]>();
    assert_same::<Sliced<L, U0, U3>, L>();
    assert_same::<Sliced<L, U1, U2>, crate::List![u8, f32]>();
    assert_same::<Sliced<L, U1, U0>, Nil>();
    assert_same::<Sliced<L, U3>, Nil>();
    assert_same::<Sliced<L, U3, U0>, Nil>();

    type Pair = crate::List![i32, u8];

    assert_same::<Sliced<Pair, U1, U0>, Nil>();
    assert_same::<Sliced<Pair, U0, U2>, Pair>();
}

#[test]
fn test_skip_and_take() {
    type L = crate::List![i32, u8, f32];

    assert_same::<Skipped<L, U0>, L>();
    assert_same::<Skipped<L, U2>, crate::List![f32]>();
    assert_same::<Skipped<L, U3>, Nil>();

    assert_same::<Taken<L, U0>, Nil>();
    assert_same::<Taken<L, U2>, crate::List![i32, u8]>();
    assert_same::<Taken<L, Rest>, L>();
}

#[test]
fn test_split() {
    type L = crate::List![i32, u8, f32, i16];

    assert_same::<Split<L, U0>, (Nil, L)>();
    assert_same::<Split<L, U2>, (crate::List![i32, u8], crate::List![f32, i16])>();
    assert_same::<Split<L, U4>, (L, Nil)>();
    assert_same::<Split<Nil, U0>, (Nil, Nil)>();

    assert_same::<SplitLeft<L, U1>, crate::List![i32]>();
    assert_same::<SplitRight<L, U1>, crate::List![u8, f32, i16]>();
}

#[test]
fn test_split_then_concat() {
    type L = crate::List![i32, u8, f32, i16];

    assert_same::<Concatenated<SplitLeft<L, U0>, SplitRight<L, U0>>, L>();
    assert_same::<Concatenated<SplitLeft<L, U1>, SplitRight<L, U1>>, L>();
    assert_same::<Concatenated<SplitLeft<L, U2>, SplitRight<L, U2>>, L>();
    assert_same::<Concatenated<SplitLeft<L, U3>, SplitRight<L, U3>>, L>();
    assert_same::<Concatenated<SplitLeft<L, U4>, SplitRight<L, U4>>, L>();
}

#[test]
fn test_concat() {
    type A = crate::List![i32, u8];
    type B = crate::List![i16, f64];

    assert_same::<Concatenated<A, B>, crate::List![i32, u8, i16, f64]>();
    assert_same::<Concatenated<A, Nil>, A>();
    assert_same::<Concatenated<Nil, B>, B>();
    assert_same::<Concatenated<Nil, Nil>, Nil>();
}

#[test]
fn test_filter() {
    type L = crate::List![i32, u8, f64, i16, f32];

    assert_same::<Filtered<L, IsIntegral>, crate::List![i32, u8, i16]>();
    assert_same::<Filtered<Nil, IsIntegral>, Nil>();
    assert_same::<Filtered<crate::List![f32, f64], IsIntegral>, Nil>();
}

#[test]
fn test_remove_if() {
    type L = crate::List![i32, u8, f64, i16, f32];

    assert_same::<Removed<L, IsIntegral>, crate::List![f64, f32]>();
    assert_same::<Removed<L, Not<IsIntegral>>, Filtered<L, IsIntegral>>();
    assert_same::<Removed<crate::List![u8, u32], IsIntegral>, Nil>();
}

#[test]
fn test_filter_and_remove_if_partition() {
    type L = crate::List![i32, u8, f64, i16, f32, u8];
    type Parts = Concatenated<Filtered<L, IsIntegral>, Removed<L, IsIntegral>>;

    assert_eq!(
        <Filtered<L, IsIntegral>>::LEN + <Removed<L, IsIntegral>>::LEN,
        L::LEN,
        "Every element should land in exactly one part."
    );

    // Same multiset: sorting (stably) both sides has to give the same list.
    assert_same::<Sorted<Parts, ByRank>, Sorted<L, ByRank>>();
}

#[test]
fn test_map() {
    type L = crate::List![i32, u8, f32];

    assert_same::<Mapped<L, Wrap>, crate::List![Option<i32>, Option<u8>, Option<f32>]>();
    assert_same::<Mapped<Nil, Wrap>, Nil>();
    assert_eq!(
        <Mapped<L, Wrap>>::LEN,
        L::LEN,
        "Mapping should keep the number of elements."
    );
}

#[test]
fn test_enumerate() {
    type L = crate::List![i32, u8, i32];

    assert_same::<
        Enumerated<L>,
        crate::List![Indexed<i32, U0>, Indexed<u8, U1>, Indexed<i32, U2>],
    >();
    assert_same::<Enumerated<Nil>, Nil>();
    assert_eq!(<At<Enumerated<L>, U2>>::INDEX, 2);
}

#[test]
fn test_find_if() {
    type L = crate::List![i32, u8, f32, i32];

    assert_eq!(<L as FindIf<IsIntegral>>::INDEX, 0);
    assert_eq!(<L as FindIf<IsIntegral, U1>>::INDEX, 1);
    assert_eq!(
        <L as FindIf<IsIntegral, U2>>::INDEX,
        3,
        "The search should skip non-matching elements after the start."
    );
    assert_eq!(<L as FindIf<IsIntegral, U4>>::INDEX, NPOS);
    assert_eq!(
        <L as FindIf<IsIntegral, U9>>::INDEX,
        NPOS,
        "Starting past the end should find nothing rather than fail."
    );
    assert_eq!(<Nil as FindIf<IsIntegral>>::INDEX, NPOS);

    assert_same::<FoundIf<L, IsIntegral, U2>, Found<U3>>();
    assert_same::<FoundIf<crate::List![f32, f64], IsIntegral>, NotFound>();
    assert!(<FoundIf<L, IsIntegral>>::FOUND);
    assert!(!<NotFound as Position>::FOUND);
}

#[test]
fn test_find_if_never_before_start() {
    type L = crate::List![u8, u8, f32, u8];

    assert!(<L as FindIf<IsIntegral, U1>>::INDEX >= 1);
    assert!(<L as FindIf<IsIntegral, U2>>::INDEX >= 2);
    assert!(<L as FindIf<IsIntegral, U3>>::INDEX >= 3);
    assert_eq!(<L as FindIf<Not<IsIntegral>, U3>>::INDEX, NPOS);
}

#[test]
fn test_sort() {
    type L = crate::List![i16, u8, f64, i32];

    assert_same::<Sorted<L, ByRank>, crate::List![u8, i16, i32, f64]>();
    assert_same::<Sorted<L, Descending<ByRank>>, crate::List![f64, i32, i16, u8]>();
    assert_same::<Sorted<Nil, ByRank>, Nil>();
    assert_same::<Sorted<crate::List![i32], ByRank>, crate::List![i32]>();
    assert_same::<Sorted<crate::List![f64, i32], Descending<ByRank>>, crate::List![f64, i32]>();
    assert_same::<Sorted<crate::List![f64, f64], Descending<ByRank>>, crate::List![f64, f64]>();
    assert_same::<
        Sorted<crate::List![f64, i32, f64], Descending<ByRank>>,
        crate::List![f64, f64, i32],
    >();
}

#[test]
fn test_sort_short_lists_skip_comparator() {
    // No Comparator impls at all.
    struct Unordered;

    assert_same::<Sorted<Nil, Unordered>, Nil>();
    assert_same::<Sorted<crate::List![i32], Unordered>, crate::List![i32]>();
}

#[test]
fn test_sort_worst_case() {
    type L = crate::List![f64, i32, i16, u8];

    assert_same::<Sorted<L, ByRank>, crate::List![u8, i16, i32, f64]>();
    assert_same::<Sorted<Reversed<L>, Descending<ByRank>>, L>();
}

#[test]
fn test_sort_is_stable() {
    // i32, u32 and f32 all have the same rank.
    type Ties = crate::List![i32, f32, u32];

    assert_same::<Sorted<Ties, ByRank>, Ties>();
    assert_same::<Sorted<Ties, Descending<ByRank>>, Ties>();
    assert_same::<Sorted<crate::List![f32, u8, i32], ByRank>, crate::List![u8, f32, i32]>();
    assert_same::<
        Sorted<crate::List![u32, f64, i32, u8], ByRank>,
        crate::List![u8, u32, i32, f64],
    >();
}

#[test]
fn test_sort_is_idempotent() {
    type L = crate::List![i16, u8, f64, i32, f32];

    assert_same::<Sorted<Sorted<L, ByRank>, ByRank>, Sorted<L, ByRank>>();
    assert_same::<
        Sorted<Sorted<L, Descending<ByRank>>, Descending<ByRank>>,
        Sorted<L, Descending<ByRank>>,
    >();
}

#[test]
fn test_chaining() {
    type L = crate::List![u8, f32, i16, f64, i32];

    assert_same::<
        Mapped<Sorted<Filtered<L, IsIntegral>, Descending<ByRank>>, Wrap>,
        crate::List![Option<i32>, Option<i16>, Option<u8>],
    >();
    assert_same::<At<Reversed<Sliced<L, U1, U3>>, U0>, f64>();
}
