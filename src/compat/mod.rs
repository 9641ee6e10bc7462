//! Integrations with collections from other crates.
//!
//! # Overview
//!
//! [`FromCursors`] and [`implicit_conversion!`] let any container be built
//! from a bracket list. This module provides those implementations for
//! popular collection crates, so that their containers work out of the box.
//!
//! # Available Integrations
//!
//! - [`hashbrown016`] - `HashSet` and `HashMap` from `hashbrown` 0.16.x
//!   (requires the `compat-hashbrown016` feature flag)
//! - [`indexmap2`] - `IndexSet` and `IndexMap` from `indexmap` 2.x (requires
//!   the `compat-indexmap2` feature flag)
//!
//! Every integrated hash container can be built in two ways:
//! - With `()` as extra arguments, when the hasher implements [`Default`].
//!   This is what [`BracketList::to`] and the implicit conversions use.
//! - With `(S,)`, passing the hasher instance through
//!   [`BracketList::to_with`].
//!
//! In both cases the container reserves room for every element before
//! converting any of them.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "compat-indexmap2")] {
//! use bracket_list::init;
//! use indexmap::{IndexMap, IndexSet};
//! use rustc_hash::FxBuildHasher;
//!
//! // Implicit, with a default hasher
//! let map: IndexMap<String, u32, FxBuildHasher> =
//!     init![(String::from("b"), 2u32), (String::from("a"), 1u32)].into();
//! assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
//!
//! // Explicit, with a hasher instance
//! let set = init![3u8, 1u16].to_with::<IndexSet<u64, FxBuildHasher>, _>((FxBuildHasher,));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 1]);
//! # }
//! ```
//!
//! [`FromCursors`]: crate::FromCursors
//! [`BracketList::to`]: crate::BracketList::to
//! [`BracketList::to_with`]: crate::BracketList::to_with

#[cfg(feature = "compat-hashbrown016")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-hashbrown016")))]
pub mod hashbrown016;

#[cfg(feature = "compat-indexmap2")]
#[cfg_attr(docsrs, doc(cfg(feature = "compat-indexmap2")))]
pub mod indexmap2;
