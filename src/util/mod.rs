#![warn(missing_docs)]

#[cfg(feature = "reflect")]
pub mod fmt;
pub mod panic;
#[cfg(feature = "reflect")]
pub mod result;
