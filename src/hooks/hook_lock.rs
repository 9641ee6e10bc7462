#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// Global storage for installed hooks.
///
/// Backed by [`std::sync::RwLock`] with the `std` feature and by
/// [`spin::RwLock`] without it. Poisoning is ignored: hooks are only ever
/// replaced as a whole, so a panic while holding the lock cannot leave them
/// half-updated.
#[repr(transparent)]
pub(crate) struct HookLock<T: 'static + Send + Sync>(impl_::RwLock<Option<T>>);

#[repr(transparent)]
pub(crate) struct HookLockReadGuard<T: 'static + Send + Sync>(
    impl_::RwLockReadGuard<'static, Option<T>>,
);

#[repr(transparent)]
pub(crate) struct HookLockWriteGuard<T: 'static + Send + Sync>(
    impl_::RwLockWriteGuard<'static, Option<T>>,
);

impl<T: 'static + Send + Sync> HookLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    #[inline]
    pub(crate) fn read(&'static self) -> HookLockReadGuard<T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(std::sync::PoisonError::into_inner);

        HookLockReadGuard(guard)
    }

    #[inline]
    pub(crate) fn write(&'static self) -> HookLockWriteGuard<T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.write();

        #[cfg(feature = "std")]
        let guard = self.0.write().unwrap_or_else(std::sync::PoisonError::into_inner);

        HookLockWriteGuard(guard)
    }
}

impl<T: 'static + Send + Sync> HookLockReadGuard<T> {
    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T: 'static + Send + Sync> HookLockWriteGuard<T> {
    #[inline]
    pub(crate) fn get(&mut self) -> &mut Option<T> {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_after_write() {
        static LOCK: HookLock<u32> = HookLock::new();

        assert!(LOCK.read().get().is_none());
        *LOCK.write().get() = Some(7);
        assert_eq!(LOCK.read().get(), Some(&7));
        assert_eq!(LOCK.write().get().take(), Some(7));
        assert!(LOCK.read().get().is_none());
    }
}
