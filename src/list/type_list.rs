use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::logic::{Nat, S, Z};

/// An ordered, fixed-length list of types. Implemented only by [`Nil`] and [`Cons`].
///
/// A type list has no runtime content: it names some types in some order, and every operation in
/// this module computes a *new* list type from it. Lists with the same elements in the same order
/// are the same Rust type, so structural equality is just type identity.
///
/// Lists are easiest to write with the [`List!`](crate::List) macro.
///
/// # Examples
/// ```
/// # use typelist::{List, TypeList};
/// type Numbers = List![u8, i32, f64];
/// assert_eq!(Numbers::LEN, 3);
/// assert!(!Numbers::IS_EMPTY);
/// assert!(<List![]>::IS_EMPTY);
/// ```
pub trait TypeList: sealed::Sealed + Sized {
    /// The number of elements, as a type-level number.
    type Len: Nat;

    /// The number of elements.
    const LEN: usize = <Self::Len as Nat>::VALUE;

    /// Whether the list has no elements.
    const IS_EMPTY: bool = Self::LEN == 0;
}

/// The empty type list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;

/// The type list with `H` as its first element, followed by the elements of `T`.
///
/// `Cons` itself doesn't require `T` to be a list (which keeps the bounds of the operations
/// readable), but it is only a [`TypeList`] when `T` is one.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

impl TypeList for Nil {
    type Len = Z;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    type Len = S<T::Len>;
}

impl<H, T> Cons<H, T> {
    pub const fn new() -> Cons<H, T> {
        Cons(PhantomData)
    }
}

// Manual impls, so that the element types don't pick up bounds they don't need.

impl<H, T> Default for Cons<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, T> Clone for Cons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for Cons<H, T> {}

impl<H, T> PartialEq for Cons<H, T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<H, T> Eq for Cons<H, T> {}

impl<H, T> Hash for Cons<H, T> {
    fn hash<X: Hasher>(&self, _: &mut X) {}
}

impl Debug for Nil {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().finish()
    }
}

// With reflection enabled, lists of 'static types print their element names instead.
#[cfg(not(feature = "reflect"))]
impl<H, T> Debug for Cons<H, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[..]")
    }
}

/// Names a [`TypeList`] from its element types.
///
/// `List![A, B, C]` expands to `Cons<A, Cons<B, Cons<C, Nil>>>`. A final `..Rest` element splices
/// in another list, which is mostly useful for writing impls over lists of a given shape.
///
/// # Examples
/// ```
/// # use typelist::{assert_same, Cons, List, Nil};
/// assert_same::<List![], Nil>();
/// assert_same::<List![u8, u16], Cons<u8, Cons<u16, Nil>>>();
/// assert_same::<List![u8, ..List![u16, u32]], List![u8, u16, u32]>();
/// ```
#[macro_export]
macro_rules! List {
    [] => { $crate::Nil };
    [..$rest:ty] => { $rest };
    [$head:ty $(, $($tail:tt)*)?] => {
        $crate::Cons<$head, $crate::List![$($($tail)*)?]>
    };
}

/// Proof that `Self` and `T` are the same type. Only ever implemented as `T: Same<T>`.
pub trait Same<T: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Fails to compile unless `A` and `B` are the same type. Does nothing at runtime.
///
/// This is how list results are checked against expectations: the check happens entirely in the
/// trait solver, so it also works inside `const` items.
///
/// # Examples
/// ```
/// # use typelist::{assert_same, List, Reversed};
/// const _: () = assert_same::<Reversed<List![u8, u16]>, List![u16, u8]>();
/// ```
///
/// ```compile_fail
/// # use typelist::{assert_same, List, Reversed};
/// const _: () = assert_same::<Reversed<List![u8, u16]>, List![u8, u16]>();
/// ```
pub const fn assert_same<A: ?Sized + Same<B>, B: ?Sized>() {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nil {}
    impl<H, T: Sealed> Sealed for super::Cons<H, T> {}
}
