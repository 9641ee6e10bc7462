use core::{cell::Cell, fmt, mem::ManuallyDrop, slice};

use rootcause::Report;

use crate::{
    arguments::{Arguments, ConvertibleTo, Dispatch, TryConvertibleTo},
    container::FromCursors,
    cursor::{Cursor, Elements},
    error::ConversionError,
    handlers::{Convert, TryConvert},
    reference::Reference,
};

/// A list of arguments of possibly different types, waiting to be converted
/// into a container.
///
/// A bracket list is usually created with the [`init!`] macro. It owns its
/// arguments, each with its original type, and converts them only when it is
/// turned into a container. Each argument is converted exactly once and moved
/// into the container; arguments that are never converted are dropped
/// together with the list.
///
/// # Conversions
///
/// - [`From`]/[`Into`], for containers registered with
///   [`implicit_conversion!`].
/// - [`to`](Self::to), for any container implementing [`FromCursors`].
/// - [`to_with`](Self::to_with), which additionally forwards extra
///   construction arguments such as a hasher.
/// - [`try_to`](Self::try_to), which converts through [`TryInto`].
/// - [`into_array`](Self::into_array), which produces a fixed-size array.
///
/// For anything else, [`references`](Self::references) gives direct access
/// to the per-argument [`Reference`]s.
///
/// # Examples
///
/// ```
/// use std::collections::LinkedList;
///
/// use bracket_list::init;
///
/// let list = init![1u8, 2u16, 3u32];
/// assert_eq!(list.len(), 3);
///
/// let numbers = list.to::<LinkedList<u64>>();
/// assert_eq!(numbers.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
#[must_use = "a bracket list does nothing unless it is converted into a container"]
pub struct BracketList<A: Arguments> {
    /// The arguments.
    ///
    /// # Safety
    ///
    /// An argument is initialized exactly as long as its flag in `consumed`
    /// is unset.
    args: ManuallyDrop<A>,
    /// One flag per argument, set once the argument has been moved out.
    consumed: A::Array<Cell<bool>>,
}

impl<A: Arguments> BracketList<A> {
    /// Creates a list from a tuple of arguments.
    ///
    /// Prefer the [`init!`] macro.
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_list::BracketList;
    ///
    /// let list = BracketList::new((1u8, 'x'));
    /// assert_eq!(list.len(), 2);
    /// # drop(list);
    /// ```
    #[inline]
    pub fn new(args: A) -> Self {
        Self {
            args: ManuallyDrop::new(args),
            consumed: A::array_from_fn(|_| Cell::new(false)),
        }
    }

    /// Returns the number of arguments.
    #[inline]
    pub fn len(&self) -> usize {
        A::LEN
    }

    /// Returns whether the list has no arguments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        A::LEN == 0
    }

    /// Returns one [`Reference`] per argument, converting into `T` through
    /// [`Into`].
    ///
    /// References are one-shot: an argument converted through a reference
    /// stays converted, and a reference created for it later can no longer
    /// convert it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_list::init;
    ///
    /// let mut list = init!["a", 'b'];
    /// let refs = list.references::<String>();
    /// assert_eq!(refs.len(), 2);
    /// assert_eq!(refs.end()[-1].convert(), "b");
    /// ```
    #[inline]
    pub fn references<T>(&mut self) -> References<'_, A, T>
    where
        A: ConvertibleTo<T>,
    {
        self.dispatch::<Convert<T>, T>()
    }

    /// Returns one [`Reference`] per argument, converting into `T` through
    /// [`TryInto`].
    ///
    /// Use [`Reference::try_convert`] on the returned references.
    #[inline]
    pub fn fallible_references<T>(&mut self) -> References<'_, A, Result<T, Report>>
    where
        A: TryConvertibleTo<T>,
    {
        self.dispatch::<TryConvert<T>, Result<T, Report>>()
    }

    fn dispatch<H, O>(&mut self) -> References<'_, A, O>
    where
        A: Dispatch<H, O>,
    {
        // SAFETY:
        // 1. The invariant of `args` guarantees that every argument whose flag is unset
        //    is initialized.
        // 2. Arguments are only ever read through references, and `Drop` skips every
        //    argument whose flag is set.
        // 3. The returned references borrow `self` mutably, so nothing else can touch
        //    the flags while they exist.
        let run = unsafe { A::references(&mut self.args, &self.consumed) };
        References { run }
    }

    /// Converts the list into the container `C`.
    ///
    /// This is the explicit conversion. It is available for every container
    /// implementing [`FromCursors`], whether or not it was registered with
    /// [`implicit_conversion!`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    ///
    /// use bracket_list::init;
    ///
    /// let shared = init!["x", String::from("y")].to::<Rc<[String]>>();
    /// assert_eq!(&*shared, ["x", "y"]);
    /// ```
    #[inline]
    pub fn to<C>(self) -> C
    where
        C: FromCursors,
        A: ConvertibleTo<C::Element>,
    {
        self.to_with(())
    }

    /// Converts the list into the container `C`, forwarding `extra` as
    /// trailing construction arguments.
    ///
    /// `extra` is a tuple. The built-in hash containers accept `(S,)` to
    /// use a specific hasher instance.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "std")] {
    /// use std::{collections::HashMap, hash::RandomState};
    ///
    /// use bracket_list::init;
    ///
    /// let hasher = RandomState::new();
    /// let map = init![(1u8, "one"), (2u8, "two")].to_with::<HashMap<u8, &str, _>, _>((hasher,));
    /// assert_eq!(map[&2], "two");
    /// # }
    /// ```
    #[inline]
    pub fn to_with<C, X>(mut self, extra: X) -> C
    where
        C: FromCursors<X>,
        A: ConvertibleTo<C::Element>,
    {
        let refs = self.references::<C::Element>();
        C::from_cursors(refs.begin(), refs.end(), extra)
    }

    /// Converts the list into the container `C` through [`TryInto`].
    ///
    /// Arguments are converted in order. The first failing conversion stops
    /// the process and is returned as a report whose context names the
    /// failing argument; the remaining arguments are dropped unconverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_list::init;
    ///
    /// let ok = init![1u16, 2i64].try_to::<Vec<u8>, u8>().unwrap();
    /// assert_eq!(ok, [1, 2]);
    ///
    /// let error = init![1u16, -2i64, 300u32].try_to::<Vec<u8>, u8>().unwrap_err();
    /// assert_eq!(error.current_context().index, 1);
    /// assert_eq!(error.current_context().argument, "i64");
    /// ```
    #[inline]
    pub fn try_to<C, T>(mut self) -> Result<C, Report<ConversionError>>
    where
        C: FromIterator<T>,
        A: TryConvertibleTo<T>,
    {
        let refs = self.fallible_references::<T>();
        refs.iter().map(|reference| reference.try_convert()).collect()
    }

    /// Converts the list into an array with one element per argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_list::init;
    ///
    /// let [a, b, c] = init!["a", 'b', String::from("c")].into_array::<String>();
    /// assert_eq!(a + &b + &c, "abc");
    /// ```
    #[inline]
    pub fn into_array<T>(mut self) -> A::Array<T>
    where
        A: ConvertibleTo<T>,
    {
        let refs = self.references::<T>();
        let run = refs.as_slice();
        A::array_from_fn(|i| run[i].convert())
    }
}

impl<A: Arguments> Drop for BracketList<A> {
    fn drop(&mut self) {
        // SAFETY:
        // 1. The invariant of `args` guarantees that every argument whose flag is unset
        //    is initialized.
        // 2. `self` is being dropped, so `args` is never used again.
        unsafe { A::drop_unconsumed(&mut self.args, &self.consumed) };
    }
}

impl<A: Arguments> fmt::Debug for BracketList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = self
            .consumed
            .as_ref()
            .iter()
            .filter(|flag| flag.get())
            .count();
        f.debug_struct("BracketList")
            .field("len", &A::LEN)
            .field("converted", &converted)
            .finish()
    }
}

/// The [`Reference`]s of a [`BracketList`], one per argument.
///
/// Created by [`BracketList::references`] and
/// [`BracketList::fallible_references`]. The references are laid out next to
/// each other, in argument order, and [`begin`](Self::begin) and
/// [`end`](Self::end) return cursors to the start and one past the end of
/// that run.
pub struct References<'a, A: Arguments, T> {
    run: A::Array<Reference<'a, T>>,
}

impl<'a, A: Arguments, T> References<'a, A, T> {
    /// Returns a cursor to the first reference.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Returns a cursor one past the last reference.
    ///
    /// For an empty list this is equal to [`begin`](Self::begin).
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        let run = self.as_slice();
        // A slice of non-zero-sized references never exceeds `isize::MAX`
        // elements.
        Cursor::new(run, run.len() as isize)
    }

    /// Returns an iterator converting every reference, in order.
    #[inline]
    pub fn elements(&self) -> Elements<'_, T> {
        Elements::new(self.begin(), self.end())
    }

    /// Returns an iterator over the references themselves, without
    /// converting them.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Reference<'a, T>> {
        self.as_slice().iter()
    }

    /// Returns the references as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Reference<'a, T>] {
        self.run.as_ref()
    }

    /// Returns the number of references.
    #[inline]
    pub fn len(&self) -> usize {
        A::LEN
    }

    /// Returns whether there are no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        A::LEN == 0
    }
}

impl<A: Arguments, T> fmt::Debug for References<'_, A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
