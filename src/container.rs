//! Building containers from the cursors of a bracket list.
//!
//! [`FromCursors`] is implemented for the `alloc` collections here, for the
//! `std` hash collections when the `std` feature is enabled, and for the
//! collections of [`compat`](crate::compat) when their features are enabled.

use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
    rc::Rc,
    sync::Arc,
    vec::Vec,
};
use core::{
    mem::{self, MaybeUninit},
    ptr,
};

use crate::cursor::{Cursor, Elements};

/// A container that can be built from a pair of [`Cursor`]s.
///
/// This is how a [`BracketList`] learns what element type a container
/// holds, and how to build the container from a `[begin, end)` run of
/// references. Most implementations simply collect the [`Elements`] between
/// the two cursors, letting each reference convert its argument as it is
/// yielded.
///
/// `X` is a tuple of extra construction arguments forwarded by
/// [`BracketList::to_with`]. The plain conversions use `X = ()`.
///
/// Implementing this trait enables [`BracketList::to`]. To also enable
/// [`From`] and [`Into`], register the container with
/// [`implicit_conversion!`].
///
/// [`BracketList`]: crate::BracketList
/// [`BracketList::to`]: crate::BracketList::to
/// [`BracketList::to_with`]: crate::BracketList::to_with
///
/// # Examples
///
/// A container that needs an extra argument:
///
/// ```
/// use bracket_list::{Cursor, Elements, FromCursors, init};
///
/// struct Bounded {
///     items: Vec<u32>,
///     limit: usize,
/// }
///
/// impl FromCursors<(usize,)> for Bounded {
///     type Element = u32;
///
///     fn from_cursors<'a>(begin: Cursor<'a, u32>, end: Cursor<'a, u32>, (limit,): (usize,)) -> Self {
///         let items = Elements::new(begin, end).take(limit).collect();
///         Bounded { items, limit }
///     }
/// }
///
/// let bounded = init![1u8, 2u16, 3u32].to_with::<Bounded, _>((2,));
/// assert_eq!(bounded.items, [1, 2]);
/// assert_eq!(bounded.limit, 2);
/// ```
pub trait FromCursors<X = ()>: Sized {
    /// The element type of the container.
    type Element;

    /// Builds the container from the references in `[begin, end)` and the
    /// extra arguments `extra`.
    fn from_cursors<'a>(
        begin: Cursor<'a, Self::Element>,
        end: Cursor<'a, Self::Element>,
        extra: X,
    ) -> Self;
}

macro_rules! from_iterator {
    ($([$($generics:tt)*] $container:ty => $element:ty;)+) => {
        $(
            impl<$($generics)*> FromCursors for $container {
                type Element = $element;

                #[inline]
                fn from_cursors<'a>(
                    begin: Cursor<'a, $element>,
                    end: Cursor<'a, $element>,
                    (): (),
                ) -> Self {
                    Elements::new(begin, end).collect()
                }
            }

            implicit_conversion!(impl[$($generics)*] $container);
        )+
    };
}

from_iterator! {
    [T] Vec<T> => T;
    [T] VecDeque<T> => T;
    [T] LinkedList<T> => T;
    [T: Ord] BinaryHeap<T> => T;
    [T: Ord] BTreeSet<T> => T;
    [K: Ord, V] BTreeMap<K, V> => (K, V);
}

impl<T> FromCursors for Box<[T]> {
    type Element = T;

    /// Constructs every element directly in the final allocation.
    fn from_cursors<'a>(begin: Cursor<'a, T>, end: Cursor<'a, T>, (): ()) -> Self {
        let len = usize::try_from(end - begin).unwrap_or(0);
        let mut boxed = Box::<[T]>::new_uninit_slice(len);

        let mut prefix = InitializedPrefix {
            slots: &mut boxed[..],
            len: 0,
        };
        let mut cursor = begin;
        while prefix.len < prefix.slots.len() {
            let index = prefix.len;
            cursor.write_to(&mut prefix.slots[index]);
            prefix.len += 1;
            cursor += 1;
        }
        mem::forget(prefix);

        // SAFETY: The loop above initialized every slot.
        unsafe { boxed.assume_init() }
    }
}

/// The elements written so far into a slice under construction.
///
/// Dropping it drops those elements, so a panicking conversion does not leak
/// the ones built before it.
struct InitializedPrefix<'s, T> {
    slots: &'s mut [MaybeUninit<T>],
    len: usize,
}

impl<T> Drop for InitializedPrefix<'_, T> {
    fn drop(&mut self) {
        let prefix = ptr::slice_from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len);
        // SAFETY:
        // 1. The first `len` slots were initialized by `Reference::write_to`.
        // 2. The prefix is forgotten once the slice is complete, so the elements
        //    are only dropped here when construction did not finish.
        unsafe { ptr::drop_in_place(prefix) };
    }
}

impl<T> FromCursors for Rc<[T]> {
    type Element = T;

    #[inline]
    fn from_cursors<'a>(begin: Cursor<'a, T>, end: Cursor<'a, T>, (): ()) -> Self {
        Box::<[T]>::from_cursors(begin, end, ()).into()
    }
}

impl<T> FromCursors for Arc<[T]> {
    type Element = T;

    #[inline]
    fn from_cursors<'a>(begin: Cursor<'a, T>, end: Cursor<'a, T>, (): ()) -> Self {
        Box::<[T]>::from_cursors(begin, end, ()).into()
    }
}

implicit_conversion!(impl[T] Box<[T]>);
implicit_conversion!(impl[T] Rc<[T]>);
implicit_conversion!(impl[T] Arc<[T]>);

#[cfg(feature = "std")]
mod std_collections {
    use std::collections::{HashMap, HashSet};

    hash_containers!(HashSet, HashMap);
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;
    use crate::init;

    #[test]
    fn test_boxed_slice_in_place() {
        let boxed: Box<[String]> = init!["a", 'b', String::from("c")].into();
        assert_eq!(&*boxed, ["a", "b", "c"]);

        let empty: Box<[String]> = init![].into();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_shared_slices() {
        let rc: Rc<[u64]> = init![1u8, 2u16].into();
        let arc: Arc<[u64]> = init![3u32, 4u64].into();
        assert_eq!(&*rc, [1, 2]);
        assert_eq!(&*arc, [3, 4]);
    }

    #[test]
    fn test_ordered_collections() {
        let heap: BinaryHeap<i32> = init![3, 1i8, 2u16].into();
        assert_eq!(heap.into_sorted_vec(), [1, 2, 3]);

        let set: BTreeSet<i64> = init![2, 1, 2].into();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2]);

        let map: BTreeMap<u8, String> =
            init![(2u8, String::from("b")), (1u8, String::from("a"))].into();
        assert_eq!(map.values().cloned().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_sequences_keep_argument_order() {
        let deque: VecDeque<i32> = init![1, 2, 3].into();
        let list: LinkedList<i32> = init![1, 2, 3].into();
        let vec: Vec<i32> = init![1, 2, 3].into();
        assert!(deque.iter().eq(&vec));
        assert!(list.iter().eq(&vec));
    }
}
