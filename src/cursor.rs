//! Random-access cursors over the references of a bracket list.
//!
//! A [`Cursor`] is to a run of [`Reference`]s what a raw pointer is to an
//! array: it can be moved by any signed offset, subtracted from another
//! cursor into the same run, compared and indexed. Unlike a raw pointer,
//! dereferencing it outside the run is never undefined behavior; it is a
//! [`Misuse`] instead.
//!
//! Dereferencing a cursor only yields a [`Reference`], so walking, comparing
//! or indexing cursors never converts anything. [`Elements`] turns a pair of
//! cursors into an iterator that converts each reference as it goes.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::{Add, AddAssign, Deref, Index, Sub, SubAssign},
};

use crate::{
    misuse::{Misuse, misuse},
    reference::Reference,
};

/// A random-access position within the run of [`Reference`]s of a bracket
/// list.
///
/// Cursors are obtained from [`References::begin`] and
/// [`References::end`], and are what [`FromCursors`] implementations
/// receive.
///
/// [`References::begin`]: crate::References::begin
/// [`References::end`]: crate::References::end
/// [`FromCursors`]: crate::FromCursors
///
/// # Examples
///
/// ```
/// use bracket_list::init;
///
/// let mut list = init![1u8, 2u16, 3u32];
/// let refs = list.references::<u64>();
/// let (begin, end) = (refs.begin(), refs.end());
///
/// assert_eq!(end - begin, 3);
/// assert_eq!(begin + 3, end);
/// assert!(begin < end);
/// assert_eq!(begin[2].slot_index(), (end - 1).slot_index());
///
/// let mut cursor = begin;
/// cursor += 1;
/// assert_eq!(cursor.convert(), 2);
/// ```
pub struct Cursor<'a, T> {
    run: &'a [Reference<'a, T>],
    position: isize,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(run: &'a [Reference<'a, T>], position: isize) -> Self {
        Self { run, position }
    }

    /// Returns the position of the cursor relative to the start of its run.
    ///
    /// The position may be negative or past the end; only dereferencing
    /// requires it to be in bounds.
    #[inline]
    pub fn position(&self) -> isize {
        self.position
    }

    /// Returns the reference the cursor points to.
    ///
    /// This is the same as dereferencing the cursor, except that the
    /// returned reference lives as long as the run rather than the cursor.
    ///
    /// # Misuse
    ///
    /// Reports [`Misuse::EmptyList`] if the run is empty, and
    /// [`Misuse::OutOfRange`] if the cursor is outside its run.
    #[inline]
    #[track_caller]
    pub fn get(&self) -> &'a Reference<'a, T> {
        let run = self.run;
        match usize::try_from(self.position).ok().and_then(|i| run.get(i)) {
            Some(reference) => reference,
            None if run.is_empty() => misuse(Misuse::EmptyList),
            None => misuse(Misuse::OutOfRange {
                position: self.position,
                len: run.len(),
            }),
        }
    }

    fn address(&self) -> *const Reference<'a, T> {
        self.run.as_ptr().wrapping_offset(self.position)
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    /// Returns a cursor that belongs to no list.
    ///
    /// Default cursors compare equal to each other. Dereferencing one
    /// reports [`Misuse::EmptyList`].
    #[inline]
    fn default() -> Self {
        Self::new(&[], 0)
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.address(), other.address())
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl<T> Hash for Cursor<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<'a, T> Deref for Cursor<'a, T> {
    type Target = Reference<'a, T>;

    #[inline]
    #[track_caller]
    fn deref(&self) -> &Reference<'a, T> {
        self.get()
    }
}

impl<'a, T> Index<isize> for Cursor<'a, T> {
    type Output = Reference<'a, T>;

    #[inline]
    #[track_caller]
    fn index(&self, offset: isize) -> &Reference<'a, T> {
        (*self + offset).get()
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn add(self, offset: isize) -> Self {
        Self::new(self.run, self.position + offset)
    }
}

impl<'a, T> Add<Cursor<'a, T>> for isize {
    type Output = Cursor<'a, T>;

    #[inline]
    fn add(self, cursor: Cursor<'a, T>) -> Cursor<'a, T> {
        cursor + self
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn add_assign(&mut self, offset: isize) {
        self.position += offset;
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: isize) -> Self {
        Self::new(self.run, self.position - offset)
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[inline]
    fn sub_assign(&mut self, offset: isize) {
        self.position -= offset;
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    /// Returns the signed distance between two cursors into the same run.
    #[inline]
    fn sub(self, other: Self) -> isize {
        debug_assert!(
            core::ptr::eq(self.run.as_ptr(), other.run.as_ptr()),
            "subtracted cursors into different bracket lists"
        );
        self.position - other.position
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.run.len())
            .finish()
    }
}

/// An iterator converting the references between two cursors.
///
/// Each reference is converted when it is yielded, so elements are
/// constructed one at a time in the order the consumer asks for them.
/// References that are never yielded stay unconverted, and their arguments
/// are dropped together with the bracket list.
///
/// # Examples
///
/// ```
/// use bracket_list::{Elements, init};
///
/// let mut list = init!["a", 'b', String::from("c")];
/// let refs = list.references::<String>();
///
/// let mut elements = Elements::new(refs.begin(), refs.end());
/// assert_eq!(elements.len(), 3);
/// assert_eq!(elements.next_back().as_deref(), Some("c"));
/// assert_eq!(elements.collect::<Vec<_>>(), ["a", "b"]);
/// ```
pub struct Elements<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T> Elements<'a, T> {
    /// Creates an iterator over `[begin, end)`.
    ///
    /// `end` must not precede `begin`.
    #[inline]
    pub fn new(begin: Cursor<'a, T>, end: Cursor<'a, T>) -> Self {
        debug_assert!(begin <= end, "end cursor precedes begin cursor");
        Self {
            front: begin,
            back: end,
        }
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.back - self.front).unwrap_or(0)
    }
}

impl<T> Iterator for Elements<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let reference = self.front.get();
        self.front += 1;
        Some(reference.convert())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    /// Skips `n` references without converting them.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        match isize::try_from(n) {
            Ok(n) if n < self.back - self.front => {
                self.front += n;
                self.next()
            }
            _ => {
                self.front = self.back;
                None
            }
        }
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining()
    }

    #[inline]
    fn last(mut self) -> Option<T> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Elements<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.back.get().convert())
    }

    /// Skips `n` references from the back without converting them.
    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        match isize::try_from(n) {
            Ok(n) if n < self.back - self.front => {
                self.back -= n;
                self.next_back()
            }
            _ => {
                self.back = self.front;
                None
            }
        }
    }
}

impl<T> ExactSizeIterator for Elements<'_, T> {}

impl<T> FusedIterator for Elements<'_, T> {}

impl<T> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elements")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
