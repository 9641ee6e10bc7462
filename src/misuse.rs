use core::{fmt, panic::Location};

/// A runtime misuse of a bracket list.
///
/// Choosing a container that the arguments cannot be converted into is a
/// compile error, so there is no error path for it. The mistakes that remain
/// are the ones the type system cannot see: dereferencing a [`Cursor`]
/// outside the run it walks over, and converting the same [`Reference`]
/// twice.
///
/// A misuse is first passed to the installed [misuse hooks], and then
/// terminates the program. With the `std` feature the process is aborted.
/// Without it, the misuse panics and the unwind is turned into an abort, so
/// it cannot be caught with `catch_unwind` either. A misuse hook that panics
/// is the only way to unwind from a misuse.
///
/// [`Cursor`]: crate::Cursor
/// [`Reference`]: crate::Reference
/// [misuse hooks]: crate::hooks::Hooks::misuse_hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Misuse {
    /// A cursor over an empty list was dereferenced.
    EmptyList,
    /// A cursor was dereferenced outside the run of references it walks over.
    OutOfRange {
        /// The position of the cursor within its run.
        position: isize,
        /// The length of the run.
        len: usize,
    },
    /// A reference was converted a second time.
    AlreadyConverted {
        /// The position of the argument within its list.
        index: usize,
        /// The [`core::any::type_name`] of the argument.
        argument: &'static str,
    },
}

impl Misuse {
    /// Returns a short, stable, machine-readable name for the kind of
    /// misuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use bracket_list::Misuse;
    ///
    /// assert_eq!(Misuse::EmptyList.kind(), "empty_list");
    /// ```
    pub fn kind(&self) -> &'static str {
        match self {
            Misuse::EmptyList => "empty_list",
            Misuse::OutOfRange { .. } => "out_of_range",
            Misuse::AlreadyConverted { .. } => "already_converted",
        }
    }

    /// Returns the position involved in the misuse, if there is one.
    ///
    /// For out-of-range dereferences this is the cursor position, which may
    /// be negative; for repeated conversions it is the argument index.
    pub fn position(&self) -> Option<isize> {
        match *self {
            Misuse::EmptyList => None,
            Misuse::OutOfRange { position, .. } => Some(position),
            Misuse::AlreadyConverted { index, .. } => isize::try_from(index).ok(),
        }
    }
}

impl fmt::Display for Misuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Misuse::EmptyList => write!(f, "dereferenced a cursor over an empty bracket list"),
            Misuse::OutOfRange { position, len } => write!(
                f,
                "dereferenced a cursor at position {position} of a bracket list of length {len}"
            ),
            Misuse::AlreadyConverted { index, argument } => write!(
                f,
                "converted argument #{index} ({argument}) of a bracket list more than once"
            ),
        }
    }
}

/// Reports a misuse to the installed hooks and terminates.
#[cold]
#[track_caller]
pub(crate) fn misuse(misuse: Misuse) -> ! {
    crate::hooks::run_misuse_hooks(&misuse);
    terminate(misuse, Location::caller())
}

#[cfg(feature = "std")]
fn terminate(misuse: Misuse, location: &Location<'_>) -> ! {
    std::eprintln!("bracket-list misuse at {location}: {misuse}");
    std::process::abort()
}

#[cfg(not(feature = "std"))]
fn terminate(misuse: Misuse, location: &Location<'_>) -> ! {
    // Panicking again while unwinding aborts.
    struct AbortOnUnwind;

    impl Drop for AbortOnUnwind {
        fn drop(&mut self) {
            panic!("bracket-list misuse cannot be recovered from");
        }
    }

    let _abort = AbortOnUnwind;
    panic!("bracket-list misuse at {location}: {misuse}")
}
