#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`bracket-list`].
//!
//! # Overview
//!
//! This crate contains the low-level, type-erased slot and the unsafe
//! operations that power the [`bracket-list`] library. A bracket list holds
//! `N` arguments of `N` distinct types, but the cursors that containers walk
//! over must all have one type. This crate provides that one type: a
//! [`RawReference`] that remembers the address of a single argument and
//! recovers its original type through a vtable.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`bracket-list`]
//! crate, not this one.
//!
//! # Architecture
//!
//! - **[`slot`]**: Type-erased argument storage
//!   - [`RawReference`]: Erased argument address, position index and
//!     consumption flag, paired with its dispatch entry
//!   - [`SlotVtable`]: Function pointers that convert the erased argument
//!     into the requested output type
//!
//! - **[`handlers`]**: The [`ConversionHandler`] trait, which decides how an
//!   argument of type `P` becomes the output of a slot
//!
//! # Safety Strategy
//!
//! When we erase the address of a `P` to `NonNull<Erased>`, we must ensure
//! that the vtable we later call was generated for exactly that `P`, and that
//! the value behind the address is read out at most once.
//!
//! This crate maintains safety through:
//!
//! - **Module-based encapsulation**: the fields of [`RawReference`] and
//!   [`SlotVtable`] are private to the [`slot`] module. The only constructor
//!   takes a typed `&mut P` and builds the matching vtable in the same call,
//!   so the two can never drift apart.
//! - **Consume-once flags**: every read is preceded by setting a flag owned by
//!   the bracket list, which also tells the owner which arguments it still has
//!   to drop.
//! - **Documented vtable contracts**: each vtable method specifies exactly
//!   when it can be safely called.
//!
//! [`bracket-list`]: https://docs.rs/bracket-list/latest/bracket_list/
//! [`SlotVtable`]: slot::vtable::SlotVtable
//! [`ConversionHandler`]: handlers::ConversionHandler

#[cfg(test)]
extern crate alloc;

pub mod handlers;
mod slot;
mod util;

pub use slot::RawReference;
