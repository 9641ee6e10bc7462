//! Hooks for observing misuse before the program terminates.
//!
//! # Quick Start
//!
//! ```rust
//! use bracket_list::hooks::Hooks;
//!
//! // Log every misuse before the process goes down
//! Hooks::new()
//!     .misuse_hook(|misuse: &bracket_list::Misuse| eprintln!("bracket list misuse: {misuse}"))
//!     .install()
//!     .expect("failed to install hooks");
//! ```
//!
//! # When to Use Hooks
//!
//! A [`Misuse`] is a programming error, and always terminates the program:
//! with the `std` feature the process is aborted, without it the misuse
//! panics in a way that cannot be caught. Hooks run right before that
//! happens. Use them to:
//! - Forward misuse to a logging or observability system (the
//!   `bracket-list-tracing` crate does this for `tracing`)
//! - Record extra diagnostics, such as the current request
//! - Turn misuse into a panic in tests, so that it can be asserted with
//!   `#[should_panic]` instead of aborting the test binary
//!
//! A hook may panic, in which case the panic unwinds from the misuse site
//! and the remaining hooks are skipped.

mod hook_lock;

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use self::hook_lock::HookLock;
use crate::misuse::Misuse;

static HOOKS: HookLock<HookData> = HookLock::new();

/// A hook called with every [`Misuse`] before the program terminates.
///
/// This is implemented for every `Fn(&Misuse) + Send + Sync + 'static`
/// closure.
///
/// # Examples
///
/// ```rust
/// use bracket_list::{Misuse, hooks::MisuseHook};
///
/// struct CountingHook(std::sync::atomic::AtomicUsize);
///
/// impl MisuseHook for CountingHook {
///     fn on_misuse(&self, _misuse: &Misuse) {
///         self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
///     }
/// }
/// ```
pub trait MisuseHook: 'static + Send + Sync {
    /// Called with the misuse that is about to terminate the program.
    fn on_misuse(&self, misuse: &Misuse);
}

impl<F> MisuseHook for F
where
    F: Fn(&Misuse) + Send + Sync + 'static,
{
    #[inline]
    fn on_misuse(&self, misuse: &Misuse) {
        self(misuse)
    }
}

/// Builder for configuring and installing hooks globally.
///
/// # Examples
///
/// ```rust
/// use bracket_list::{Misuse, hooks::Hooks};
///
/// Hooks::new()
///     .misuse_hook(|misuse: &Misuse| eprintln!("first: {misuse}"))
///     .misuse_hook(|misuse: &Misuse| eprintln!("second: {}", misuse.kind()))
///     .install()
///     .expect("failed to install hooks");
/// ```
pub struct Hooks(HookData);

struct HookData {
    misuse: Vec<Box<dyn MisuseHook>>,
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("misuse_hooks", &self.0.misuse.len())
            .finish()
    }
}

/// Error returned when attempting to install hooks when they're already
/// installed.
///
/// Contains the hooks that were attempted to be installed, allowing you to
/// recover them if needed.
pub struct HooksAlreadyInstalledError(pub Hooks);

impl fmt::Debug for HooksAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HooksAlreadyInstalledError").finish()
    }
}

impl fmt::Display for HooksAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hooks are already installed globally")
    }
}

impl core::error::Error for HooksAlreadyInstalledError {}

impl Hooks {
    /// Creates a new `Hooks` builder without any hooks.
    pub fn new() -> Self {
        Self(HookData { misuse: Vec::new() })
    }

    /// Registers a hook that is called on every [`Misuse`].
    ///
    /// Hooks are called in the order they were registered.
    pub fn misuse_hook<H>(mut self, hook: H) -> Self
    where
        H: MisuseHook,
    {
        self.0.misuse.push(Box::new(hook));
        self
    }

    /// Installs the hooks globally.
    ///
    /// If hooks are already installed, returns an error
    /// [`HooksAlreadyInstalledError`], containing the hooks that were attempted
    /// to be installed.
    ///
    /// See also [`replace`](Self::replace) which will replace any existing
    /// hooks without erroring.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bracket_list::hooks::Hooks;
    ///
    /// // First installation succeeds
    /// Hooks::new().install().expect("failed to install hooks");
    ///
    /// // Second installation fails
    /// Hooks::new().install().unwrap_err();
    /// ```
    pub fn install(self) -> Result<(), HooksAlreadyInstalledError> {
        let mut guard = HOOKS.write();
        let installed = guard.get();
        if installed.is_some() {
            return Err(HooksAlreadyInstalledError(self));
        }
        *installed = Some(self.0);
        Ok(())
    }

    /// Replaces the currently installed hooks with `self`.
    ///
    /// Returns the previously installed hooks, if any.
    ///
    /// See also [`install`](Self::install) which will error if hooks are
    /// already installed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bracket_list::{Misuse, hooks::Hooks};
    ///
    /// Hooks::new().install().expect("failed to install hooks");
    ///
    /// let previous = Hooks::new().misuse_hook(|_: &Misuse| {}).replace();
    /// assert!(previous.is_some());
    /// ```
    pub fn replace(self) -> Option<Hooks> {
        HOOKS.write().get().replace(self.0).map(Hooks)
    }
}

/// Runs every installed misuse hook.
pub(crate) fn run_misuse_hooks(misuse: &Misuse) {
    let guard = HOOKS.read();
    if let Some(hooks) = guard.get() {
        for hook in &hooks.misuse {
            hook.on_misuse(misuse);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_builder_debug() {
        let hooks = Hooks::new()
            .misuse_hook(|_: &Misuse| {})
            .misuse_hook(|_: &Misuse| {});
        assert_eq!(format!("{hooks:?}"), "Hooks { misuse_hooks: 2 }");
        assert_eq!(format!("{:?}", Hooks::default()), "Hooks { misuse_hooks: 0 }");
    }

    #[test]
    fn test_send_sync() {
        static_assertions::assert_impl_all!(Hooks: Send, Sync);
        static_assertions::assert_impl_all!(HooksAlreadyInstalledError: Send, Sync);
    }
}
