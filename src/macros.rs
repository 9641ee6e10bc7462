/// Creates a [`BracketList`] from a list of arguments.
///
/// Each argument is moved into the list as-is, keeping its own type. Nothing
/// is converted until the list is turned into a container, at which point
/// every argument is converted exactly once into the container's element
/// type.
///
/// Up to 16 arguments are supported. `init![]` creates an empty list, which
/// converts into an empty container of any element type.
///
/// [`BracketList`]: crate::BracketList
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeMap, VecDeque};
///
/// use bracket_list::init;
///
/// let numbers: VecDeque<i64> = init![1i8, 2u16, 3i32].into();
/// assert_eq!(numbers, [1, 2, 3]);
///
/// let map: BTreeMap<u8, &str> = init![(2u8, "two"), (1u8, "one")].into();
/// assert_eq!(map.values().copied().collect::<Vec<_>>(), ["one", "two"]);
///
/// let nothing: Vec<String> = init![].into();
/// assert!(nothing.is_empty());
/// ```
///
/// A borrowed argument is passed as a reference, and converts only if the
/// element type implements `From<&X>`. `String` does for `&String`, but
/// the integer types do not for references to integers. Dereference
/// `Copy` values or clone the others instead:
///
/// ```
/// use bracket_list::init;
///
/// let a = 2i32;
/// let b = &a;
/// let name = String::from("b");
///
/// let numbers: Vec<i64> = init![1i32, a, *b].into();
/// assert_eq!(numbers, [1, 2, 2]);
///
/// let names: Vec<String> = init!["a", &name, name.clone()].into();
/// assert_eq!(names, ["a", "b", "b"]);
/// ```
///
/// The macro can be renamed on import if `init` is taken:
///
/// ```
/// use bracket_list::init as list;
///
/// let v: Vec<u32> = list![7u8, 8u16].into();
/// assert_eq!(v, [7, 8]);
/// ```
#[macro_export]
macro_rules! init {
    () => {
        $crate::BracketList::new(())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::BracketList::new(($($arg,)+))
    };
}

/// Allows a container to be built from a [`BracketList`] through [`From`]
/// and [`Into`].
///
/// Containers implementing [`FromCursors`] can always be built explicitly
/// with [`BracketList::to`]. Registering them with this macro additionally
/// makes the conversion implicit, so that `let c: C = init![...].into();`
/// works.
///
/// Only register containers for which this feels natural, such as those that
/// can also be built from an array literal. Keeping the conversion explicit
/// for everything else avoids surprising conversions into unrelated types
/// that merely happen to be constructible from a list.
///
/// Generic containers list their generic parameters, with bounds, in
/// brackets after `impl`.
///
/// [`BracketList`]: crate::BracketList
/// [`BracketList::to`]: crate::BracketList::to
/// [`FromCursors`]: crate::FromCursors
///
/// # Examples
///
/// ```
/// use bracket_list::{Cursor, Elements, FromCursors, implicit_conversion, init};
///
/// struct Total(u64);
///
/// impl FromCursors for Total {
///     type Element = u64;
///
///     fn from_cursors<'a>(begin: Cursor<'a, u64>, end: Cursor<'a, u64>, (): ()) -> Self {
///         Total(Elements::new(begin, end).sum())
///     }
/// }
///
/// implicit_conversion!(Total);
///
/// let total: Total = init![1u8, 2u32, 3u64].into();
/// assert_eq!(total.0, 6);
///
/// struct Tagged<T>(Vec<T>);
///
/// impl<T> FromCursors for Tagged<T> {
///     type Element = T;
///
///     fn from_cursors<'a>(begin: Cursor<'a, T>, end: Cursor<'a, T>, (): ()) -> Self {
///         Tagged(Elements::new(begin, end).collect())
///     }
/// }
///
/// implicit_conversion!(impl[T] Tagged<T>);
///
/// let tagged: Tagged<String> = init!["x", 'y'].into();
/// assert_eq!(tagged.0, ["x", "y"]);
/// ```
#[macro_export]
macro_rules! implicit_conversion {
    (impl[$($generics:tt)*] $container:ty) => {
        impl<__Args, $($generics)*> $crate::__private::From<$crate::BracketList<__Args>> for $container
        where
            __Args: $crate::ConvertibleTo<<$container as $crate::FromCursors>::Element>,
        {
            #[inline]
            fn from(list: $crate::BracketList<__Args>) -> Self {
                list.to::<Self>()
            }
        }
    };
    ($container:ty) => {
        $crate::implicit_conversion!(impl[] $container);
    };
}

// Implements [`FromCursors`] for a hash set and a hash map sharing the
// `with_capacity_and_hasher` and [`Extend`] API of the standard library.
//
// Both accept `()` when the hasher implements [`Default`], and `(S,)` to
// supply a hasher instance. They reserve room for every element up front.
#[allow(unused_macros, reason = "only used when a hash collection feature is enabled")]
macro_rules! hash_containers {
    ($set:ident, $map:ident) => {
        impl<T, S> $crate::FromCursors for $set<T, S>
        where
            T: core::cmp::Eq + core::hash::Hash,
            S: core::hash::BuildHasher + core::default::Default,
        {
            type Element = T;

            #[inline]
            fn from_cursors<'a>(
                begin: $crate::Cursor<'a, T>,
                end: $crate::Cursor<'a, T>,
                (): (),
            ) -> Self {
                <Self as $crate::FromCursors<(S,)>>::from_cursors(begin, end, (S::default(),))
            }
        }

        impl<T, S> $crate::FromCursors<(S,)> for $set<T, S>
        where
            T: core::cmp::Eq + core::hash::Hash,
            S: core::hash::BuildHasher,
        {
            type Element = T;

            fn from_cursors<'a>(
                begin: $crate::Cursor<'a, T>,
                end: $crate::Cursor<'a, T>,
                (hasher,): (S,),
            ) -> Self {
                let elements = $crate::Elements::new(begin, end);
                let mut set = Self::with_capacity_and_hasher(elements.len(), hasher);
                set.extend(elements);
                set
            }
        }

        impl<K, V, S> $crate::FromCursors for $map<K, V, S>
        where
            K: core::cmp::Eq + core::hash::Hash,
            S: core::hash::BuildHasher + core::default::Default,
        {
            type Element = (K, V);

            #[inline]
            fn from_cursors<'a>(
                begin: $crate::Cursor<'a, (K, V)>,
                end: $crate::Cursor<'a, (K, V)>,
                (): (),
            ) -> Self {
                <Self as $crate::FromCursors<(S,)>>::from_cursors(begin, end, (S::default(),))
            }
        }

        impl<K, V, S> $crate::FromCursors<(S,)> for $map<K, V, S>
        where
            K: core::cmp::Eq + core::hash::Hash,
            S: core::hash::BuildHasher,
        {
            type Element = (K, V);

            fn from_cursors<'a>(
                begin: $crate::Cursor<'a, (K, V)>,
                end: $crate::Cursor<'a, (K, V)>,
                (hasher,): (S,),
            ) -> Self {
                let elements = $crate::Elements::new(begin, end);
                let mut map = Self::with_capacity_and_hasher(elements.len(), hasher);
                map.extend(elements);
                map
            }
        }

        $crate::implicit_conversion!(
            impl[T: core::cmp::Eq + core::hash::Hash, S: core::hash::BuildHasher + core::default::Default]
            $set<T, S>
        );
        $crate::implicit_conversion!(
            impl[K: core::cmp::Eq + core::hash::Hash, V, S: core::hash::BuildHasher + core::default::Default]
            $map<K, V, S>
        );
    };
}
