//! Integration with the [`hashbrown`] 0.16.x hash collections.
//!
//! This module specifically supports `hashbrown` version 0.16.x. To enable
//! this integration, add the `compat-hashbrown016` feature flag to your
//! `Cargo.toml`.
//!
//! [`HashSet`] and [`HashMap`] implement [`FromCursors`] and can be built
//! implicitly from a bracket list. `hashbrown` is usually built without its
//! default hasher in `no_std` environments, so the hasher is always a type
//! parameter here:
//!
//! ```
//! use bracket_list::init;
//! use hashbrown::{HashMap, HashSet};
//! use rustc_hash::FxBuildHasher;
//!
//! let set: HashSet<String, FxBuildHasher> = init!["a", 'b', String::from("a")].into();
//! assert_eq!(set.len(), 2);
//!
//! let map = init![(1u8, 'x'), (2u8, 'y')].to_with::<HashMap<u8, char, _>, _>((FxBuildHasher,));
//! assert_eq!(map[&2], 'y');
//! ```
//!
//! [`FromCursors`]: crate::FromCursors

use hashbrown::{HashMap, HashSet};

hash_containers!(HashSet, HashMap);
