//! Handlers that define how a single argument is turned into the output of
//! its slot.
//!
//! A slot only knows the address of its argument. When the slot is consumed,
//! the vtable built for it calls [`ConversionHandler::convert`] with the
//! argument, moved out of its original storage, and hands the result back to
//! the caller.

/// Trait for implementing the conversion performed when a slot is consumed.
///
/// The handler type is usually a zero-sized marker that is never
/// instantiated. It is only used to select the conversion at compile time,
/// once per argument type.
///
/// # When to Implement
///
/// The `bracket-list` crate ships handlers for infallible (`Into`) and
/// fallible (`TryInto`) conversions. Implement this trait when a different
/// mapping from arguments to outputs is needed, for example one that records
/// where each element came from.
///
/// # Examples
///
/// ```
/// use bracket_list_internals::handlers::ConversionHandler;
///
/// // Measures the length of every argument that can be viewed as a string.
/// struct Length;
///
/// impl<P: AsRef<str>> ConversionHandler<P> for Length {
///     type Output = usize;
///
///     fn convert(value: P) -> usize {
///         value.as_ref().len()
///     }
/// }
///
/// assert_eq!(<Length as ConversionHandler<&str>>::convert("four"), 4);
/// ```
pub trait ConversionHandler<P> {
    /// The value produced for the argument.
    type Output;

    /// Converts the argument, which has been moved out of the bracket list,
    /// into the output of the slot.
    fn convert(value: P) -> Self::Output;
}
