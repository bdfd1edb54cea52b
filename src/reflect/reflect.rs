use std::any::{self, TypeId};
use std::fmt::{self, Debug, Display, Formatter};

use crate::list::{Cons, Nil, TypeList, NPOS};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

use super::{IndexOutOfBounds, RangeOutOfBounds};

/// The runtime identity of one element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    pub id: TypeId,
    pub name: &'static str,
}

impl TypeInfo {
    pub fn of<T: 'static>() -> TypeInfo {
        TypeInfo {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// Returns true if this describes exactly `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A [`TypeList`] whose elements can be inspected at runtime. Implemented for every list of
/// `'static` types.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the list.
/// - `i`: The index of the element in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `info_at` | `O(i)` |
/// | `contains` | `O(n²)` |
/// | `index_of` | `O(n²)` |
/// | `is_equal` | `O(1)` |
///
/// The search methods walk every position from the front, which is quadratic but irrelevant for
/// the lengths a type list can realistically have.
pub trait Reflect: TypeList + 'static {
    /// Returns the element at `index`, or [`None`] if the index is out of bounds.
    fn info_at(index: usize) -> Option<TypeInfo>;

    fn try_type_info_at(index: usize) -> Result<TypeInfo, IndexOutOfBounds> {
        Self::info_at(index).ok_or(IndexOutOfBounds {
            index,
            len: Self::LEN,
        })
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn type_info_at(index: usize) -> TypeInfo {
        Self::try_type_info_at(index).throw()
    }

    /// Returns the name of the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn type_name_at(index: usize) -> &'static str {
        Self::type_info_at(index).name
    }

    /// Returns an iterator over all elements, first to last.
    fn type_infos() -> impl Iterator<Item = TypeInfo> {
        (0..Self::LEN).filter_map(Self::info_at)
    }

    /// Returns an iterator over the names of all elements, first to last.
    fn type_names() -> impl Iterator<Item = &'static str> {
        Self::type_infos().map(|info| info.name)
    }

    /// Returns an iterator over `count` elements starting at `from`, the runtime counterpart of
    /// [`Slice`](crate::Slice).
    fn try_type_infos_in(
        from: usize,
        count: usize,
    ) -> Result<impl Iterator<Item = TypeInfo>, RangeOutOfBounds> {
        match from.checked_add(count) {
            Some(end) if end <= Self::LEN => Ok((from..end).filter_map(Self::info_at)),
            _ => Err(RangeOutOfBounds {
                from,
                count,
                len: Self::LEN,
            }),
        }
    }

    /// Returns the first position at or after `pos` holding exactly `U`, or [`NPOS`].
    fn index_of_from<U: 'static>(pos: usize) -> usize {
        (pos..Self::LEN)
            .find(|&index| Self::info_at(index).is_some_and(|info| info.is::<U>()))
            .unwrap_or(NPOS)
    }

    /// Returns the first position holding exactly `U`, or [`NPOS`].
    fn index_of<U: 'static>() -> usize {
        Self::index_of_from::<U>(0)
    }

    /// Returns true if some element is exactly `U`.
    fn contains<U: 'static>() -> bool {
        Self::index_of::<U>() != NPOS
    }

    /// Returns true if `L` has the same elements in the same order.
    fn is_equal<L: TypeList + 'static>() -> bool {
        TypeId::of::<Self>() == TypeId::of::<L>()
    }
}

impl Reflect for Nil {
    fn info_at(_: usize) -> Option<TypeInfo> {
        None
    }
}

impl<H: 'static, T: Reflect> Reflect for Cons<H, T> {
    fn info_at(index: usize) -> Option<TypeInfo> {
        match index {
            0 => Some(TypeInfo::of::<H>()),
            _ => T::info_at(index - 1),
        }
    }
}

impl<H: 'static, T: Reflect> Debug for Cons<H, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Self::type_names().map(DebugRaw))
            .finish()
    }
}
