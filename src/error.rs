use core::fmt;

/// Context attached to a failed fallible conversion.
///
/// Produced by [`Reference::try_convert`] and [`BracketList::try_to`] as the
/// context of a [`rootcause::Report`]. The report's only child is the report
/// built from the argument's own [`TryInto`] error.
///
/// [`Reference::try_convert`]: crate::Reference::try_convert
/// [`BracketList::try_to`]: crate::BracketList::try_to
///
/// # Examples
///
/// ```
/// use bracket_list::{ConversionError, init};
///
/// let report = init![1u16, 256u16].try_to::<Vec<u8>, u8>().unwrap_err();
/// assert_eq!(
///     *report.current_context(),
///     ConversionError {
///         index: 1,
///         argument: "u16",
///         element: "u8",
///     }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionError {
    /// The position of the failing argument within its list.
    pub index: usize,
    /// The [`core::any::type_name`] of the failing argument.
    pub argument: &'static str,
    /// The [`core::any::type_name`] of the element it should have become.
    pub element: &'static str,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not convert argument #{} ({}) into {}",
            self.index, self.argument, self.element
        )
    }
}

impl core::error::Error for ConversionError {}
