use std::marker::PhantomData;

use super::boolean::{Bool, False, True};

/// A natural number lifted to the type level, in unary: [`Z`] or [`S<N>`](S).
///
/// Positions and counts in list operations are `Nat`s so that "one less than N" is a pattern the
/// trait solver can match on. Use the `U0..=U64` aliases instead of spelling out the successors.
pub trait Nat: sealed::Sealed + 'static {
    /// The value-level equivalent.
    const VALUE: usize;
}

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Z;

/// The successor of `N`, i.e. `N + 1`.
pub struct S<N>(PhantomData<N>);

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Type-level equality of two naturals.
pub trait NatEq<M: Nat>: Nat {
    type Output: Bool;
}

impl NatEq<Z> for Z {
    type Output = True;
}

impl<M: Nat> NatEq<S<M>> for Z {
    type Output = False;
}

impl<N: Nat> NatEq<Z> for S<N> {
    type Output = False;
}

impl<N: NatEq<M>, M: Nat> NatEq<S<M>> for S<N> {
    type Output = <N as NatEq<M>>::Output;
}

/// Type-level `Self < M`.
pub trait NatLt<M: Nat>: Nat {
    type Output: Bool;
}

impl NatLt<Z> for Z {
    type Output = False;
}

impl<M: Nat> NatLt<S<M>> for Z {
    type Output = True;
}

impl<N: Nat> NatLt<Z> for S<N> {
    type Output = False;
}

impl<N: NatLt<M>, M: Nat> NatLt<S<M>> for S<N> {
    type Output = <N as NatLt<M>>::Output;
}

macro_rules! nat_aliases {
    ($last:ident =>) => {};
    ($prev:ident => $next:ident $(, $rest:ident)* $(,)?) => {
        #[doc = concat!("The type-level number one greater than [`", stringify!($prev), "`].")]
        pub type $next = S<$prev>;

        nat_aliases!($next => $($rest),*);
    };
}

/// The type-level number zero.
pub type U0 = Z;

nat_aliases!(
    U0 => U1, U2, U3, U4, U5, U6, U7, U8, U9, U10, U11, U12, U13, U14, U15, U16, U17, U18, U19,
    U20, U21, U22, U23, U24, U25, U26, U27, U28, U29, U30, U31, U32, U33, U34, U35, U36, U37, U38,
    U39, U40, U41, U42, U43, U44, U45, U46, U47, U48, U49, U50, U51, U52, U53, U54, U55, U56, U57,
    U58, U59, U60, U61, U62, U63, U64,
);

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Z {}
    impl<N: Sealed> Sealed for super::S<N> {}
}
