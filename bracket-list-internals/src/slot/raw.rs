//! Type-erased argument slot.
//!
//! This module encapsulates the fields of [`RawReference`], ensuring they are
//! only visible within this module. This visibility restriction guarantees the
//! safety invariant: **the vtable always matches the type of the argument
//! behind the erased pointer**.
//!
//! # Safety Invariant
//!
//! Since the fields can only be set via [`RawReference::new`] (which receives
//! a typed `&mut P` and builds the vtable for that same `P`), and cannot be
//! modified afterward, the vtable and the pointee stay in sync for the
//! lifetime of the value.
//!
//! # Consumption
//!
//! The argument is owned by the bracket list, not by the slot. The slot only
//! borrows it, together with a consumption flag that the list also owns. The
//! flag is set *before* the argument is moved out, so once it is `true` the
//! list knows that it must not drop the argument itself, even if the
//! conversion that follows panics.

use core::{cell::Cell, marker::PhantomData, mem::MaybeUninit, ptr::NonNull};

use crate::{handlers::ConversionHandler, slot::vtable::SlotVtable, util::Erased};

/// A lifetime-bound slot for one argument of a bracket list, guaranteed to
/// point to an initialized `P` for some specific `P` as long as its
/// consumption flag is unset, though we do not know which actual `P` it is.
///
/// Consuming the slot produces an `O`, by way of the conversion handler that
/// was selected when the slot was created.
///
/// We cannot use a `&'a mut P` directly, because that would require us to know
/// the actual type of the argument, which we do not.
pub struct RawReference<'a, O> {
    /// Pointer to the argument
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long as
    /// this struct exists:
    ///
    /// 1. The pointer was derived from a `&'a mut P`, where `P` is the argument
    ///    type `vtable` was created for.
    /// 2. While `consumed` is `false`, the pointee is initialized and nobody
    ///    else reads, writes or drops it.
    ptr: NonNull<Erased>,
    /// Position of the argument within its bracket list
    index: usize,
    /// Flag shared with the owner of the argument. Set once the argument has
    /// been moved out.
    consumed: &'a Cell<bool>,
    /// The dispatch entry for the argument type
    vtable: SlotVtable<O>,
    /// Marker to tell the compiler that we should behave the same as a
    /// `&'a mut Erased`
    _marker: PhantomData<&'a mut Erased>,
}

impl<'a, O> RawReference<'a, O> {
    /// Creates a new [`RawReference`] for the argument `arg`, sitting at
    /// position `index` of its bracket list.
    ///
    /// Consuming the returned slot will convert the argument using the
    /// handler `H`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. If `consumed` is `false`, `*arg` is initialized.
    /// 2. Once `consumed` is `true`, whether it was already `true` when this
    ///    function was called or was set by the returned slot, the owner of
    ///    `*arg` treats it as moved-out: it is neither read nor dropped
    ///    again.
    /// 3. Nothing except the returned slot sets `consumed` while the slot is
    ///    alive.
    #[inline]
    pub unsafe fn new<P, H>(arg: &'a mut P, index: usize, consumed: &'a Cell<bool>) -> Self
    where
        H: ConversionHandler<P, Output = O>,
    {
        let ptr: NonNull<P> = NonNull::from(arg);
        Self {
            ptr: ptr.cast::<Erased>(),
            index,
            consumed,
            vtable: SlotVtable::new::<P, H>(),
            _marker: PhantomData,
        }
    }

    /// Returns the position of the argument within its bracket list.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the [`core::any::type_name`] of the argument.
    #[inline]
    pub fn argument_type_name(&self) -> &'static str {
        self.vtable.type_name()
    }

    /// Returns whether the argument has already been moved out.
    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Moves the argument out and converts it.
    ///
    /// Returns `None` if the argument was already consumed, either through
    /// this slot or through another slot sharing the same flag.
    #[inline]
    pub fn take(&self) -> Option<O> {
        if self.consumed.replace(true) {
            return None;
        }

        // SAFETY:
        // 1. The vtable was created for the argument type behind `self.ptr`, as
        //    guaranteed by `RawReference::new`.
        // 2. The flag was unset, so the pointee is initialized.
        // 3. The flag is now set, so the owner will neither read nor drop the
        //    pointee again.
        let value = unsafe { self.vtable.take(self.ptr) };
        Some(value)
    }

    /// Moves the argument out and converts it directly into `dst`.
    ///
    /// Returns `None`, leaving `dst` untouched, if the argument was already
    /// consumed.
    #[inline]
    pub fn take_into<'d>(&self, dst: &'d mut MaybeUninit<O>) -> Option<&'d mut O> {
        if self.consumed.replace(true) {
            return None;
        }

        // SAFETY:
        // 1. The vtable was created for the argument type behind `self.ptr`, as
        //    guaranteed by `RawReference::new`.
        // 2. The flag was unset, so the pointee is initialized.
        // 3. The flag is now set, so the owner will neither read nor drop the
        //    pointee again.
        unsafe { self.vtable.write(self.ptr, dst) };

        // SAFETY: `SlotVtable::write` always initializes `dst` when it returns.
        let value = unsafe { dst.assume_init_mut() };
        Some(value)
    }
}

impl<O> core::fmt::Debug for RawReference<'_, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawReference")
            .field("index", &self.index)
            .field("argument", &self.argument_type_name())
            .field("consumed", &self.is_consumed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, string::String};

    use super::*;

    struct Identity;
    impl<P> ConversionHandler<P> for Identity {
        type Output = P;

        fn convert(value: P) -> P {
            value
        }
    }

    struct Stringify;
    impl ConversionHandler<&str> for Stringify {
        type Output = String;

        fn convert(value: &str) -> String {
            String::from(value)
        }
    }
    impl ConversionHandler<char> for Stringify {
        type Output = String;

        fn convert(value: char) -> String {
            String::from(value)
        }
    }

    #[test]
    fn test_raw_reference_size() {
        assert_eq!(
            core::mem::size_of::<RawReference<'_, u8>>(),
            core::mem::size_of::<usize>() * 6
        );
        assert_eq!(
            core::mem::size_of::<Option<RawReference<'_, u8>>>(),
            core::mem::size_of::<RawReference<'_, u8>>()
        );
    }

    #[test]
    fn test_raw_reference_take_once() {
        let mut arg = Box::new(5);
        let flag = Cell::new(false);
        // SAFETY: `arg` is initialized and is forgotten below once consumed.
        let slot = unsafe { RawReference::new::<Box<i32>, Identity>(&mut arg, 3, &flag) };

        assert_eq!(slot.index(), 3);
        assert!(!slot.is_consumed());
        assert_eq!(slot.take().as_deref(), Some(&5));
        assert!(slot.is_consumed());
        assert!(slot.take().is_none());

        assert!(flag.get());
        core::mem::forget(arg);
    }

    #[test]
    fn test_raw_reference_heterogeneous_arguments() {
        let mut first = "ab";
        let mut second = 'c';
        let flags = [Cell::new(false), Cell::new(false)];

        // SAFETY: Both arguments are `Copy`, so reading them out leaves nothing to
        // drop.
        let first = unsafe { RawReference::new::<&str, Stringify>(&mut first, 0, &flags[0]) };
        // SAFETY: Same as above.
        let second = unsafe { RawReference::new::<char, Stringify>(&mut second, 1, &flags[1]) };
        let slots = [first, second];

        assert_eq!(slots[0].argument_type_name(), "&str");
        assert_eq!(slots[1].argument_type_name(), "char");
        assert_eq!(slots[1].take().as_deref(), Some("c"));
        assert_eq!(slots[0].take().as_deref(), Some("ab"));
    }

    #[test]
    fn test_raw_reference_take_into() {
        let mut arg = 'x';
        let flag = Cell::new(false);
        // SAFETY: `arg` is initialized and `Copy`.
        let slot = unsafe { RawReference::new::<char, Stringify>(&mut arg, 0, &flag) };

        let mut dst = MaybeUninit::uninit();
        let written = slot.take_into(&mut dst).map(|s| s.clone());
        assert_eq!(written.as_deref(), Some("x"));

        let mut second = MaybeUninit::uninit();
        assert!(slot.take_into(&mut second).is_none());

        // SAFETY: The first `take_into` initialized `dst`.
        drop(unsafe { dst.assume_init() });
    }

    #[test]
    fn test_send_sync() {
        static_assertions::assert_not_impl_any!(RawReference<'_, u8>: Send, Sync);
    }
}
