/// A boolean lifted to the type level. Implemented only by [`True`] and [`False`].
///
/// Predicates and comparators answer with one of these instead of a `bool`, because a list
/// operation has to pick between two *types* depending on the answer, and a `const bool` can't do
/// that on stable Rust.
pub trait Bool: sealed::Sealed + 'static {
    /// The value-level equivalent.
    const VALUE: bool;

    /// Logical negation.
    type Not: Bool;

    /// Logical conjunction with `B`.
    type And<B: Bool>: Bool;

    /// Logical disjunction with `B`.
    type Or<B: Bool>: Bool;

    /// Selects `A` if `Self` is [`True`], otherwise `B`. Both branches are named, so both have to
    /// be well-formed types, but only the selected one is the result.
    type If<A, B>;
}

/// The type-level `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

/// The type-level `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;

    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type If<A, B> = A;
}

impl Bool for False {
    const VALUE: bool = false;

    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type If<A, B> = B;
}

/// Shorthand for [`Bool::If`].
pub type If<C, A, B> = <C as Bool>::If<A, B>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::True {}
    impl Sealed for super::False {}
}
