//! Commonly used items for convenient importing.
//!
//! The prelude module re-exports the most frequently used types, traits, and
//! macros of the library, so that a single use statement covers both building
//! bracket lists and teaching new containers to accept them.
//!
//! # Usage
//!
//! ```rust
//! use bracket_list::prelude::*;
//!
//! struct Sum(i64);
//!
//! impl FromCursors for Sum {
//!     type Element = i64;
//!
//!     fn from_cursors<'a>(begin: Cursor<'a, i64>, end: Cursor<'a, i64>, (): ()) -> Self {
//!         Sum(Elements::new(begin, end).sum())
//!     }
//! }
//!
//! implicit_conversion!(Sum);
//!
//! let sum: Sum = init![1i8, 2u32, -3i64].into();
//! assert_eq!(sum.0, 0);
//! ```
//!
//! # What's Included
//!
//! - **[`init!`]**: The bracket list literal
//! - **[`BracketList`]**: The type it creates
//! - **[`FromCursors`]**, **[`Cursor`]** and **[`Elements`]**: Everything
//!   needed to build a container from a list
//! - **[`implicit_conversion!`]**: Opting a container into `.into()`
//! - **[`ConvertibleTo`]**: The bound describing which element types a list
//!   converts into

pub use crate::{
    BracketList, ConvertibleTo, Cursor, Elements, FromCursors, implicit_conversion, init,
};
