//! The tuples of arguments stored by a [`BracketList`].
//!
//! A bracket list of `N` arguments stores them as an `N`-tuple, so that every
//! argument keeps its own type. The traits in this module are implemented
//! for tuples of up to 16 elements and describe what the list needs from its
//! arguments: how many there are, how to drop the ones nobody consumed, and
//! how to build one [`Reference`] per argument for a given conversion.
//!
//! [`BracketList`]: crate::BracketList

use core::{cell::Cell, mem::ManuallyDrop};

use bracket_list_internals::{RawReference, handlers::ConversionHandler};
use rootcause::Report;

use crate::{
    handlers::{Convert, TryConvert},
    reference::Reference,
};

mod sealed {
    pub trait Sealed {}
}

/// The arguments of a [`BracketList`].
///
/// This trait is implemented for tuples of up to 16 elements, of any types.
/// It cannot be implemented outside of this crate.
///
/// [`BracketList`]: crate::BracketList
///
/// # Examples
///
/// ```
/// use bracket_list::Arguments;
///
/// assert_eq!(<() as Arguments>::LEN, 0);
/// assert_eq!(<(u8, &str, Vec<char>) as Arguments>::LEN, 3);
/// ```
pub trait Arguments: sealed::Sealed + Sized {
    /// The number of arguments.
    const LEN: usize;

    /// An array of [`LEN`](Self::LEN) elements of type `X`.
    type Array<X>: AsRef<[X]> + AsMut<[X]>;

    #[doc(hidden)]
    fn array_from_fn<X>(f: impl FnMut(usize) -> X) -> Self::Array<X>;

    /// Drops every argument whose flag is unset.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. Every argument whose flag is unset is initialized.
    /// 2. `args` is never read or dropped again after this call.
    #[doc(hidden)]
    unsafe fn drop_unconsumed(args: &mut ManuallyDrop<Self>, consumed: &Self::Array<Cell<bool>>);
}

/// Arguments that can all be converted by the handler `H` into `O`.
///
/// This is implemented for every tuple whose element types `P` all satisfy
/// `H: ConversionHandler<P, Output = O>`. The empty tuple satisfies it for any
/// handler.
///
/// Most code should use the [`ConvertibleTo`] and [`TryConvertibleTo`]
/// aliases instead of naming a handler.
pub trait Dispatch<H, O>: Arguments {
    /// Creates one reference per argument.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. Every argument whose flag is unset is initialized.
    /// 2. Once a flag is set, the corresponding argument is treated as moved
    ///    out and is neither read nor dropped again.
    /// 3. The flags are only set by the returned references.
    #[doc(hidden)]
    unsafe fn references<'a>(
        args: &'a mut Self,
        consumed: &'a Self::Array<Cell<bool>>,
    ) -> Self::Array<Reference<'a, O>>;
}

/// Arguments that can all be converted into `T` through [`Into`].
///
/// This is the bound behind every infallible conversion of a
/// [`BracketList`]. It holds exactly when `T: From<P>` (or `P: Into<T>`) for
/// every argument type `P`, so a list whose arguments cannot all become `T`
/// is rejected at compile time.
///
/// [`BracketList`]: crate::BracketList
///
/// # Examples
///
/// ```
/// use bracket_list::ConvertibleTo;
///
/// fn accepts<A: ConvertibleTo<String>>(_: &A) {}
///
/// accepts(&("a", 'b', String::from("c")));
/// accepts(&());
/// ```
pub trait ConvertibleTo<T>: Dispatch<Convert<T>, T> {}

impl<A, T> ConvertibleTo<T> for A where A: Dispatch<Convert<T>, T> {}

/// Arguments that can all be converted into `T` through [`TryInto`].
///
/// This is the bound behind [`BracketList::try_to`].
///
/// [`BracketList::try_to`]: crate::BracketList::try_to
pub trait TryConvertibleTo<T>: Dispatch<TryConvert<T>, Result<T, Report>> {}

impl<A, T> TryConvertibleTo<T> for A where A: Dispatch<TryConvert<T>, Result<T, Report>> {}

impl sealed::Sealed for () {}

impl Arguments for () {
    const LEN: usize = 0;

    type Array<X> = [X; 0];

    #[inline]
    fn array_from_fn<X>(_f: impl FnMut(usize) -> X) -> [X; 0] {
        []
    }

    #[inline]
    unsafe fn drop_unconsumed(_args: &mut ManuallyDrop<Self>, _consumed: &[Cell<bool>; 0]) {}
}

impl<H, O> Dispatch<H, O> for () {
    #[inline]
    unsafe fn references<'a>(
        _args: &'a mut Self,
        _consumed: &'a [Cell<bool>; 0],
    ) -> [Reference<'a, O>; 0] {
        []
    }
}

macro_rules! impl_arguments {
    ($len:literal; $(($idx:tt $arg:ident))+) => {
        impl<$($arg,)+> sealed::Sealed for ($($arg,)+) {}

        impl<$($arg,)+> Arguments for ($($arg,)+) {
            const LEN: usize = $len;

            type Array<X> = [X; $len];

            #[inline]
            fn array_from_fn<X>(f: impl FnMut(usize) -> X) -> [X; $len] {
                core::array::from_fn(f)
            }

            #[inline]
            unsafe fn drop_unconsumed(args: &mut ManuallyDrop<Self>, consumed: &[Cell<bool>; $len]) {
                $(
                    if !consumed[$idx].get() {
                        // SAFETY:
                        // 1. The flag is unset, so the argument is initialized.
                        // 2. The caller guarantees that `args` is not used again.
                        unsafe { core::ptr::drop_in_place(&raw mut args.$idx) };
                    }
                )+
            }
        }

        impl<H, O, $($arg,)+> Dispatch<H, O> for ($($arg,)+)
        where
            $(H: ConversionHandler<$arg, Output = O>,)+
        {
            #[inline]
            unsafe fn references<'a>(
                args: &'a mut Self,
                consumed: &'a [Cell<bool>; $len],
            ) -> [Reference<'a, O>; $len] {
                [$(
                    Reference::from_raw(
                        // SAFETY: Guaranteed by the caller.
                        unsafe { RawReference::new::<$arg, H>(&mut args.$idx, $idx, &consumed[$idx]) },
                    ),
                )+]
            }
        }
    };
}

impl_arguments!(1; (0 P0));
impl_arguments!(2; (0 P0) (1 P1));
impl_arguments!(3; (0 P0) (1 P1) (2 P2));
impl_arguments!(4; (0 P0) (1 P1) (2 P2) (3 P3));
impl_arguments!(5; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4));
impl_arguments!(6; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5));
impl_arguments!(7; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6));
impl_arguments!(8; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7));
impl_arguments!(9; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8));
impl_arguments!(10; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9));
impl_arguments!(11; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10));
impl_arguments!(12; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11));
impl_arguments!(13; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11) (12 P12));
impl_arguments!(14; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11) (12 P12) (13 P13));
impl_arguments!(15; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11) (12 P12) (13 P13) (14 P14));
impl_arguments!(16; (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11) (12 P12) (13 P13) (14 P14) (15 P15));
