//! Integration with the [`indexmap`] 2.x collections.
//!
//! This module specifically supports `indexmap` version 2.x. To enable this
//! integration, add the `compat-indexmap2` feature flag to your
//! `Cargo.toml`.
//!
//! [`IndexSet`] and [`IndexMap`] implement [`FromCursors`] and can be built
//! implicitly from a bracket list. They keep the argument order:
//!
//! ```
//! use bracket_list::init;
//! use indexmap::IndexSet;
//! use rustc_hash::FxBuildHasher;
//!
//! let set: IndexSet<&str, FxBuildHasher> = init!["c", "a", "b", "a"].into();
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), ["c", "a", "b"]);
//! ```
//!
//! [`FromCursors`]: crate::FromCursors

use indexmap::{IndexMap, IndexSet};

hash_containers!(IndexSet, IndexMap);
