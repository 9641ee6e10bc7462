#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Tracing events for bracket-list misuse.
//!
//! A misuse of a bracket list, such as dereferencing a cursor outside its
//! run or converting the same reference twice, terminates the program. This
//! crate makes sure the misuse is recorded by your `tracing` subscriber
//! first, as a structured `ERROR` event.
//!
//! # Quick Start
//!
//! ```
//! // Set up tracing as usual
//! tracing_subscriber::fmt().init();
//!
//! // Install the hook once, at startup
//! bracket_list_tracing::install().expect("failed to install hooks");
//! ```
//!
//! To combine the hook with your own hooks, register [`TracingMisuseHook`]
//! yourself:
//!
//! ```
//! use bracket_list::{Misuse, hooks::Hooks};
//! use bracket_list_tracing::TracingMisuseHook;
//!
//! Hooks::new()
//!     .misuse_hook(TracingMisuseHook)
//!     .misuse_hook(|misuse: &Misuse| eprintln!("{misuse}"))
//!     .install()
//!     .expect("failed to install hooks");
//! ```
//!
//! # Event Fields
//!
//! Every event is emitted at the `ERROR` level with the target
//! `bracket_list::misuse` and the following fields:
//!
//! - `misuse.kind` - `empty_list`, `out_of_range` or `already_converted`
//! - `misuse.slot` - the cursor position or argument index, if any
//! - `misuse.argument` - the argument type, for repeated conversions
//!
//! The event message is the [`Display`](std::fmt::Display) output of the
//! [`Misuse`].

use bracket_list::{
    Misuse,
    hooks::{Hooks, HooksAlreadyInstalledError, MisuseHook},
};

/// A misuse hook that emits a `tracing` event for every misuse.
///
/// # Examples
///
/// ```
/// use bracket_list::hooks::Hooks;
/// use bracket_list_tracing::TracingMisuseHook;
///
/// let hooks = Hooks::new().misuse_hook(TracingMisuseHook);
/// # drop(hooks);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMisuseHook;

impl MisuseHook for TracingMisuseHook {
    fn on_misuse(&self, misuse: &Misuse) {
        let argument = match misuse {
            Misuse::AlreadyConverted { argument, .. } => Some(*argument),
            _ => None,
        };

        tracing::error!(
            target: "bracket_list::misuse",
            {
                misuse.kind = misuse.kind(),
                misuse.slot = misuse.position(),
                misuse.argument = argument,
            },
            "{misuse}"
        );
    }
}

/// Installs a [`TracingMisuseHook`] as the only global misuse hook.
///
/// # Errors
///
/// Returns [`HooksAlreadyInstalledError`] if hooks were already installed,
/// for example by another call to this function.
pub fn install() -> Result<(), HooksAlreadyInstalledError> {
    Hooks::new().misuse_hook(TracingMisuseHook).install()
}
