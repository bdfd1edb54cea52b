use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("index {index} out of bounds for type list with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("{count} elements from index {from} out of bounds for type list with {len} elements")]
pub struct RangeOutOfBounds {
    pub from: usize,
    pub count: usize,
    pub len: usize,
}
