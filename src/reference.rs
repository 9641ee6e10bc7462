use core::mem::MaybeUninit;

use bracket_list_internals::RawReference;
use rootcause::Report;

use crate::{
    error::ConversionError,
    misuse::{Misuse, misuse},
};

/// A proxy for one argument of a [`BracketList`], converting it into a `T` on
/// demand.
///
/// References are what [`Cursor`]s point to. A reference knows the address
/// and the position of its argument, and which conversion to apply to it,
/// but it never materializes an element until asked to. It can convert its
/// argument exactly once: the argument is moved out by that conversion.
///
/// References are neither [`Clone`] nor [`Copy`], and are only ever handed
/// out by shared reference. Converting the same reference a second time is a
/// [`Misuse`].
///
/// [`BracketList`]: crate::BracketList
/// [`Cursor`]: crate::Cursor
///
/// # Examples
///
/// ```
/// use bracket_list::init;
///
/// let mut list = init![1u8, 2u16];
/// let refs = list.references::<u32>();
/// let first = refs.begin().get();
///
/// assert_eq!(first.slot_index(), 0);
/// assert_eq!(first.argument_type_name(), "u8");
/// assert!(!first.is_converted());
/// assert_eq!(first.convert(), 1);
/// assert!(first.is_converted());
/// ```
#[repr(transparent)]
pub struct Reference<'a, T> {
    raw: RawReference<'a, T>,
}

impl<'a, T> Reference<'a, T> {
    #[inline]
    pub(crate) fn from_raw(raw: RawReference<'a, T>) -> Self {
        Self { raw }
    }

    /// Moves the argument out of its list and converts it into a `T`.
    ///
    /// # Misuse
    ///
    /// Each reference converts at most once. Calling this on a reference
    /// that was already converted reports [`Misuse::AlreadyConverted`].
    #[inline]
    #[track_caller]
    pub fn convert(&self) -> T {
        match self.raw.take() {
            Some(value) => value,
            None => self.already_converted(),
        }
    }

    /// Moves the argument out of its list and converts it directly into
    /// `dst`, returning a reference to the now-initialized element.
    ///
    /// This is the building block for containers that construct their
    /// elements in place, such as [`Box<[T]>`](alloc::boxed::Box).
    ///
    /// # Misuse
    ///
    /// Reports [`Misuse::AlreadyConverted`] if the reference was already
    /// converted. `dst` is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::mem::MaybeUninit;
    ///
    /// use bracket_list::init;
    ///
    /// let mut list = init!['x'];
    /// let refs = list.references::<String>();
    ///
    /// let mut slot = MaybeUninit::uninit();
    /// let element = refs.begin().write_to(&mut slot);
    /// element.push('y');
    ///
    /// // SAFETY: `write_to` initialized the slot.
    /// let element = unsafe { slot.assume_init() };
    /// assert_eq!(element, "xy");
    /// ```
    #[inline]
    #[track_caller]
    pub fn write_to<'d>(&self, dst: &'d mut MaybeUninit<T>) -> &'d mut T {
        match self.raw.take_into(dst) {
            Some(element) => element,
            None => self.already_converted(),
        }
    }

    /// Returns the position of the argument within its list.
    #[inline]
    pub fn slot_index(&self) -> usize {
        self.raw.index()
    }

    /// Returns the [`core::any::type_name`] of the argument, before
    /// conversion.
    #[inline]
    pub fn argument_type_name(&self) -> &'static str {
        self.raw.argument_type_name()
    }

    /// Returns whether the argument has already been converted.
    #[inline]
    pub fn is_converted(&self) -> bool {
        self.raw.is_consumed()
    }

    #[cold]
    #[track_caller]
    fn already_converted(&self) -> ! {
        misuse(Misuse::AlreadyConverted {
            index: self.slot_index(),
            argument: self.argument_type_name(),
        })
    }
}

impl<T> Reference<'_, Result<T, Report>> {
    /// Moves the argument out of its list and tries to convert it into a `T`.
    ///
    /// On failure, the report produced by the conversion is wrapped in a
    /// [`ConversionError`] naming this argument.
    ///
    /// # Misuse
    ///
    /// Reports [`Misuse::AlreadyConverted`] if the reference was already
    /// converted, whether that conversion succeeded or not.
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_list::init;
    ///
    /// let mut list = init![300u16, 7i64];
    /// let refs = list.fallible_references::<u8>();
    ///
    /// let error = refs.begin()[0].try_convert().unwrap_err();
    /// assert_eq!(error.current_context().index, 0);
    /// assert_eq!(refs.begin()[1].try_convert().unwrap(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn try_convert(&self) -> Result<T, Report<ConversionError>> {
        self.convert().map_err(|report| {
            report.context(ConversionError {
                index: self.slot_index(),
                argument: self.argument_type_name(),
                element: core::any::type_name::<T>(),
            })
        })
    }
}

impl<T> core::fmt::Debug for Reference<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reference")
            .field("slot_index", &self.slot_index())
            .field("argument", &self.argument_type_name())
            .field("converted", &self.is_converted())
            .finish()
    }
}
