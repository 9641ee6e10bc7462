#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Heterogeneous, move-friendly list literals that convert lazily into any
//! container.
//!
//! ## Overview
//!
//! Array literals and `vec![...]` force every element to already have the
//! element type of the container. This crate provides [`init!`], a list
//! literal whose arguments keep their own types until the very moment the
//! destination container constructs its elements. Each argument is then
//! converted exactly once, straight into the container, through
//! [`Into`].
//!
//! That means you can mix literals, variables and temporaries of different
//! but compatible types, and you can build containers of values that are
//! neither `Copy` nor `Clone`:
//!
//! ```
//! use std::{borrow::Cow, sync::atomic::{AtomicI32, Ordering}};
//!
//! use bracket_list::init;
//!
//! // Heterogeneous arguments, one element type.
//! let suffix = String::from("c");
//! let words: Vec<String> = init!["a", 'b', &suffix, Cow::Borrowed("d")].into();
//! assert_eq!(words, ["a", "b", "c", "d"]);
//!
//! // Elements that can never be copied.
//! let counters: Vec<AtomicI32> = init![1, 2, 3].into();
//! assert_eq!(counters[2].load(Ordering::Relaxed), 3);
//!
//! // Move-only elements, mixed with a value that only converts into one.
//! let owned: Vec<Option<Box<i32>>> = init![None::<Box<i32>>, Box::new(42)].into();
//! assert!(owned[0].is_none());
//! assert_eq!(owned[1].as_deref(), Some(&42));
//! ```
//!
//! ## Core Concepts
//!
//! A [`BracketList`] owns its arguments. When it is converted, it builds
//! one [`Reference`] per argument. A reference is a non-copyable proxy that
//! knows the address and position of its argument, and can convert it into
//! the element type exactly once.
//!
//! The references sit next to each other, and a [`Cursor`] walks over them
//! with the full random-access surface of a pointer: arithmetic, distance,
//! subscript and ordering. Dereferencing a cursor yields a reference, never a
//! materialized element, so nothing is copied or converted until the
//! container asks for it.
//!
//! Containers describe how they are built from a pair of cursors by
//! implementing [`FromCursors`]. Most containers simply collect the
//! [`Elements`] iterator between the two cursors; the crate ships
//! integrations for the `alloc` collections, the `std` hash collections (with
//! the `std` feature), `hashbrown` (with the `compat-hashbrown016` feature)
//! and `indexmap` (with the `compat-indexmap2` feature).
//!
//! ## Conversion Paths
//!
//! All conversion paths are checked at compile time. A list only converts
//! into a container whose element type can be built from *every* argument.
//!
//! - **Implicit**: `.into()` or [`From`], for containers registered with
//!   [`implicit_conversion!`]. Every built-in container that also accepts an
//!   array literal is registered.
//! - **Explicit**: [`BracketList::to`], for any container implementing
//!   [`FromCursors`].
//! - **With extra arguments**: [`BracketList::to_with`], which forwards a
//!   tuple of trailing construction arguments, such as a hasher:
//!
//! ```
//! # #[cfg(feature = "compat-hashbrown016")] {
//! use hashbrown::HashSet;
//! use rustc_hash::FxBuildHasher;
//!
//! use bracket_list::init;
//!
//! let set = init![1u8, 2u16, 3u32].to_with::<HashSet<u64, FxBuildHasher>, _>((FxBuildHasher,));
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&2));
//! # }
//! ```
//!
//! - **Fallible**: [`BracketList::try_to`], which uses [`TryInto`] and reports
//!   the first failing argument as a [`rootcause`] report.
//!
//! ## Misuse
//!
//! There is no runtime error path for picking the wrong container; that is a
//! compile error. The remaining mistakes are misuses: dereferencing a cursor
//! outside its run, or converting the same reference twice. They are reported
//! to the installed [`hooks`] and then terminate the program. See
//! [`Misuse`] for details.
//!
//! For implementation details, see the [`bracket-list-internals`] crate.
//!
//! [`bracket-list-internals`]: bracket_list_internals

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod compat;
pub mod handlers;
pub mod hooks;
pub mod prelude;

mod arguments;
mod container;
mod cursor;
mod error;
mod list;
mod misuse;
mod reference;

pub use self::{
    arguments::{Arguments, ConvertibleTo, Dispatch, TryConvertibleTo},
    container::FromCursors,
    cursor::{Cursor, Elements},
    error::ConversionError,
    list::{BracketList, References},
    misuse::Misuse,
    reference::Reference,
};

/// A [`Result`](core::result::Result) type alias for fallible conversions.
///
/// The error is a [`rootcause::Report`] whose context is the
/// [`ConversionError`] describing the argument that failed.
///
/// # Examples
///
/// ```
/// use bracket_list::init;
///
/// fn bytes() -> bracket_list::Result<Vec<u8>> {
///     init![1u16, 2u32, 3i64].try_to::<Vec<u8>, u8>()
/// }
///
/// assert_eq!(bytes().unwrap(), [1, 2, 3]);
/// ```
pub type Result<T> = core::result::Result<T, rootcause::Report<ConversionError>>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    pub use core::convert::From;
}
