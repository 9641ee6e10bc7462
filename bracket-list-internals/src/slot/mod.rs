//! Module containing the type-erased argument slot

mod raw;
pub(crate) mod vtable;

pub use self::raw::RawReference;
