//! Handlers that control how each argument of a bracket list becomes an
//! element.
//!
//! A handler is a zero-sized type implementing [`ConversionHandler`] for
//! every argument type it accepts. When a list is converted, one dispatch
//! entry is generated per argument, each calling the handler with that
//! argument's original type.
//!
//! # Built-in Handlers
//!
//! ## [`Convert`]
//!
//! Converts through [`Into`]. This is the handler behind [`BracketList::to`],
//! [`BracketList::to_with`] and the implicit conversions. Lists using it are
//! described by the [`ConvertibleTo`] trait.
//!
//! ## [`TryConvert`]
//!
//! Converts through [`TryInto`], turning the conversion error into a
//! [`Report`]. This is the handler behind [`BracketList::try_to`]. Lists using
//! it are described by the [`TryConvertibleTo`] trait.
//!
//! [`BracketList::to`]: crate::BracketList::to
//! [`BracketList::to_with`]: crate::BracketList::to_with
//! [`BracketList::try_to`]: crate::BracketList::try_to
//! [`ConvertibleTo`]: crate::ConvertibleTo
//! [`TryConvertibleTo`]: crate::TryConvertibleTo

use core::marker::PhantomData;

pub use bracket_list_internals::handlers::ConversionHandler;
use rootcause::Report;

/// Handler converting each argument into `T` using [`Into`].
///
/// # Examples
///
/// ```
/// use bracket_list::handlers::{ConversionHandler, Convert};
///
/// let value = <Convert<u64> as ConversionHandler<u8>>::convert(7);
/// assert_eq!(value, 7u64);
/// ```
pub struct Convert<T>(PhantomData<fn() -> T>);

impl<P, T> ConversionHandler<P> for Convert<T>
where
    P: Into<T>,
{
    type Output = T;

    #[inline]
    fn convert(value: P) -> T {
        value.into()
    }
}

/// Handler converting each argument into `T` using [`TryInto`].
///
/// The conversion error becomes a dynamic [`Report`], which the bracket list
/// later wraps with a [`ConversionError`] naming the failing argument.
///
/// [`ConversionError`]: crate::ConversionError
///
/// # Examples
///
/// ```
/// use bracket_list::handlers::{ConversionHandler, TryConvert};
///
/// assert!(<TryConvert<u8> as ConversionHandler<i32>>::convert(7).is_ok());
/// assert!(<TryConvert<u8> as ConversionHandler<i32>>::convert(-7).is_err());
/// ```
pub struct TryConvert<T>(PhantomData<fn() -> T>);

impl<P, T> ConversionHandler<P> for TryConvert<T>
where
    P: TryInto<T>,
    P::Error: core::error::Error + Send + Sync + 'static,
{
    type Output = Result<T, Report>;

    #[inline]
    fn convert(value: P) -> Result<T, Report> {
        value
            .try_into()
            .map_err(|error| Report::new(error).into_dynamic())
    }
}
