//! Integration tests for converting bracket lists into containers.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
    rc::Rc,
    sync::{
        Arc, Mutex,
        atomic::{AtomicI32, Ordering},
    },
};

use bracket_list::{BracketList, ConvertibleTo, Cursor, Elements, FromCursors, init};

#[test]
fn test_element_order_matches_argument_order() {
    let v: Vec<i64> = init![5i8, 4i16, 3i32, 2i64, 1u8].into();
    assert_eq!(v, [5, 4, 3, 2, 1]);

    let d: VecDeque<u32> = init![1u8, 2u16, 3u32].into();
    assert_eq!(d, [1, 2, 3]);

    let l: LinkedList<u32> = init![1u8, 2u16, 3u32].into();
    assert!(l.iter().eq(&[1, 2, 3]));

    let b: Box<[u32]> = init![1u8, 2u16, 3u32].into();
    assert_eq!(&*b, [1, 2, 3]);
}

#[test]
fn test_empty_list_converts_to_empty_container() {
    let v: Vec<String> = init![].into();
    let s: BTreeSet<u8> = init![].into();
    let m: BTreeMap<u8, String> = init![].into();
    let b: Box<[Mutex<u8>]> = init![].into();
    let a: Arc<[String]> = init![].to::<Arc<[String]>>();

    assert!(v.is_empty());
    assert!(s.is_empty());
    assert!(m.is_empty());
    assert!(b.is_empty());
    assert!(a.is_empty());
    assert_eq!(init![].into_array::<String>().len(), 0);
}

#[test]
fn test_mixed_value_categories() {
    let a = 2;
    let b = Box::new(3);
    let v: Vec<i32> = init![1, a, *b, 7u8].into();
    assert_eq!(v, [1, 2, 3, 7]);

    let owned = String::from("b");
    let borrowed = String::from("c");
    let words: Vec<String> = init!["a", owned, &borrowed, Cow::Borrowed("d"), 'e'].into();
    assert_eq!(words, ["a", "b", "c", "d", "e"]);
    assert_eq!(borrowed, "c");
}

#[test]
fn test_borrowed_arguments_need_a_reference_conversion() {
    let a = 4i32;
    let b = &a;
    let v: Vec<i64> = init![1i32, a, *b].into();
    assert_eq!(v, [1, 4, 4]);
    assert_eq!(a, 4);

    static_assertions::assert_not_impl_any!((i32, &'static i32): ConvertibleTo<i64>);
    static_assertions::assert_impl_all!((&'static str, &'static String): ConvertibleTo<String>);
}

#[test]
fn test_non_copyable_elements() {
    let atomics: Vec<AtomicI32> = init![1, 2, 3].into();
    let loaded: Vec<i32> = atomics.iter().map(|a| a.load(Ordering::SeqCst)).collect();
    assert_eq!(loaded, [1, 2, 3]);

    let mutexes: Box<[Mutex<u64>]> = init![1u64, 2u64].into();
    assert_eq!(*mutexes[1].lock().unwrap(), 2);
}

#[test]
fn test_move_only_elements() {
    let v: Vec<Option<Box<i32>>> = init![None::<Box<i32>>, Box::new(42)].into();
    assert_eq!(v.len(), 2);
    assert!(v[0].is_none());
    assert_eq!(v[1].as_deref(), Some(&42));

    let shared: Rc<[Box<str>]> = init![Box::<str>::from("x"), "y", String::from("z")].into();
    assert_eq!(shared.iter().map(|s| &**s).collect::<Vec<_>>(), ["x", "y", "z"]);
}

#[test]
fn test_convertible_types_produce_equal_values() {
    let direct: Vec<f64> = init![1.5f64, 2.0f64].into();
    let widened: Vec<f64> = init![1.5f32, 2u32].into();
    assert_eq!(direct, widened);

    let heap: BinaryHeap<u64> = init![3u8, 1u16, 2u32].into();
    assert_eq!(heap.into_sorted_vec(), [1, 2, 3]);
}

#[test]
fn test_map_from_pairs() {
    let map: BTreeMap<&str, u8> = init![("b", 2u8), ("a", 1u8)].into();
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [("a", 1), ("b", 2)]);
}

#[test]
fn test_explicit_and_implicit_agree() {
    let implicit: Vec<String> = init!["a", 'b'].into();
    let explicit = init!["a", 'b'].to::<Vec<String>>();
    let from = Vec::<String>::from(init!["a", 'b']);
    assert_eq!(implicit, explicit);
    assert_eq!(explicit, from);
}

#[test]
fn test_into_array() {
    let [a, b, c] = init![1u8, 2u16, 3u32].into_array::<u64>();
    assert_eq!((a, b, c), (1, 2, 3));
}

#[test]
fn test_sixteen_arguments() {
    let v: Vec<u8> = init![
        0u8, 1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u8, 9u8, 10u8, 11u8, 12u8, 13u8, 14u8, 15u8
    ]
    .into();
    assert_eq!(v, (0..16).collect::<Vec<u8>>());
}

#[test]
fn test_references_give_random_access() {
    let mut list = init!["zero", 'o', String::from("two")];
    let refs = list.references::<String>();
    let (begin, end) = (refs.begin(), refs.end());

    assert_eq!(end - begin, 3);
    assert_eq!(begin[2].convert(), "two");
    assert_eq!((end - 3).convert(), "zero");
    assert_eq!(Elements::new(begin + 1, end - 1).collect::<Vec<_>>(), ["o"]);
    assert!(refs.iter().all(|reference| reference.is_converted()));
}

#[cfg(feature = "std")]
mod std_collections {
    use std::{
        collections::{HashMap, HashSet},
        hash::{BuildHasherDefault, DefaultHasher, RandomState},
    };

    use bracket_list::init;

    #[test]
    fn test_hash_set() {
        let set: HashSet<String> = init!["a", 'b', String::from("a")].into();
        assert_eq!(set.len(), 2);
        assert!(set.contains("b"));
    }

    #[test]
    fn test_hash_map_with_hasher() {
        let map = init![(1u8, "one"), (2u8, "two")]
            .to_with::<HashMap<u8, &str, RandomState>, _>((RandomState::new(),));
        assert_eq!(map[&1], "one");
        assert!(map.capacity() >= 2);
    }

    #[test]
    fn test_hash_map_with_default_hasher() {
        let map: HashMap<u8, u8, BuildHasherDefault<DefaultHasher>> =
            init![(1u8, 10u8), (1u8, 11u8)].into();
        assert_eq!(map[&1], 11);
    }
}

/// A container without any way to be built from a list.
struct NoList;

/// A container that needs exactly three `i32`s as extra arguments.
#[derive(Debug, PartialEq)]
struct Forced {
    elements: Vec<u8>,
    extra: (i32, i32, i32),
}

impl FromCursors<(i32, i32, i32)> for Forced {
    type Element = u8;

    fn from_cursors<'a>(
        begin: Cursor<'a, u8>,
        end: Cursor<'a, u8>,
        extra: (i32, i32, i32),
    ) -> Self {
        Forced {
            elements: Elements::new(begin, end).collect(),
            extra,
        }
    }
}

/// A container that only supports the explicit conversion.
struct ExplicitOnly(usize);

impl FromCursors for ExplicitOnly {
    type Element = String;

    fn from_cursors<'a>(begin: Cursor<'a, String>, end: Cursor<'a, String>, (): ()) -> Self {
        ExplicitOnly(Elements::new(begin, end).len())
    }
}

#[test]
fn test_extra_arguments_need_the_exact_tuple() {
    let forced = init![1u8, 2u8].to_with::<Forced, _>((1, 2, 3));
    assert_eq!(
        forced,
        Forced {
            elements: vec![1, 2],
            extra: (1, 2, 3),
        }
    );

    static_assertions::assert_impl_all!(Forced: FromCursors<(i32, i32, i32)>);
    static_assertions::assert_not_impl_any!(Forced: FromCursors<()>, FromCursors<(i32, i32)>);
    static_assertions::assert_not_impl_any!(Forced: From<BracketList<(u8, u8)>>);
}

#[test]
fn test_unregistered_containers_are_explicit_only() {
    assert_eq!(init!["a", 'b'].to::<ExplicitOnly>().0, 2);
    static_assertions::assert_not_impl_any!(ExplicitOnly: From<BracketList<(&'static str, char)>>);
}

#[test]
fn test_incompatible_lists_are_rejected() {
    static_assertions::assert_not_impl_any!(NoList: FromCursors, From<BracketList<(u8,)>>);
    static_assertions::assert_not_impl_any!((String,): ConvertibleTo<u8>);
    static_assertions::assert_not_impl_any!((u64, u8): ConvertibleTo<u32>);
    static_assertions::assert_not_impl_any!(Vec<u32>: From<BracketList<(u8, i8)>>);
    static_assertions::assert_not_impl_any!(Vec<AtomicI32>: From<BracketList<(AtomicI32, i64)>>);
    static_assertions::assert_impl_all!(Vec<u32>: From<BracketList<(u8, u16)>>);
}

#[test]
fn test_list_is_not_sync() {
    static_assertions::assert_not_impl_any!(BracketList<(u8,)>: Sync);
    static_assertions::assert_impl_all!(BracketList<(u8,)>: Send);
    static_assertions::assert_not_impl_any!(BracketList<(Rc<u8>,)>: Send);
}
