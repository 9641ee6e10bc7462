//! Vtable for type-erased slot operations.
//!
//! This module contains the [`SlotVtable`] which enables consuming an argument
//! when its concrete type `P` and conversion handler `H` have been erased. The
//! vtable stores function pointers that dispatch to the correct typed
//! implementations.
//!
//! A bracket list of `N` arguments builds one vtable per argument. Taken
//! together, the `N` vtables of one list form its dispatch table: entry `i`
//! knows the original type of argument `i`, and nothing else does.
//!
//! This module encapsulates the fields of [`SlotVtable`] so they cannot be
//! accessed directly. This visibility restriction guarantees the safety
//! invariant: **the vtable's type parameters must match the actual argument
//! type behind the erased address it is paired with**.
//!
//! # Safety Invariant
//!
//! This invariant is maintained because vtables are only created through
//! [`SlotVtable::new`], which pairs the function pointers with specific types
//! `P` and `H` at compile time, and because the only caller of that function
//! is [`RawReference::new`], which receives a `&mut P` of the same `P`.
//!
//! [`RawReference::new`]: crate::RawReference::new

use core::{mem::MaybeUninit, ptr::NonNull};

use crate::{handlers::ConversionHandler, util::Erased};

/// Vtable for type-erased slot operations.
///
/// Contains function pointers for consuming an argument without knowing its
/// concrete type at compile time. The output type `O` is not erased: every
/// slot of one dispatch table produces the same `O`.
///
/// # Safety Invariant
///
/// The fields `type_name`, `take` and `write` are guaranteed to point to the
/// functions defined below instantiated with the argument type `P` and
/// handler type `H` that were used to create this [`SlotVtable`].
pub(crate) struct SlotVtable<O> {
    /// Gets the [`core::any::type_name`] of the argument type that was used
    /// to create this [`SlotVtable`].
    type_name: fn() -> &'static str,
    /// Moves the argument out of its storage and converts it.
    take: unsafe fn(NonNull<Erased>) -> O,
    /// Moves the argument out of its storage and converts it directly into
    /// the provided destination.
    write: unsafe fn(NonNull<Erased>, &mut MaybeUninit<O>),
}

impl<O> Clone for SlotVtable<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for SlotVtable<O> {}

impl<O> SlotVtable<O> {
    /// Creates a new [`SlotVtable`] for the argument type `P` and the handler
    /// type `H`.
    pub(super) const fn new<P, H>() -> Self
    where
        H: ConversionHandler<P, Output = O>,
    {
        Self {
            type_name: core::any::type_name::<P>,
            take: take::<P, H>,
            write: write::<P, H>,
        }
    }

    /// Gets the [`core::any::type_name`] of the argument type that was used
    /// to create this [`SlotVtable`].
    #[inline]
    pub(super) fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Moves the argument out of `ptr` and converts it using the handler
    /// used when creating this [`SlotVtable`].
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`SlotVtable`] must be a vtable for the argument type stored
    ///    behind `ptr`.
    /// 2. The pointee is initialized and valid for reads.
    /// 3. This method moves the argument out, so the caller must ensure that
    ///    the pointee is neither read nor dropped afterwards.
    #[inline]
    pub(super) unsafe fn take(&self, ptr: NonNull<Erased>) -> O {
        // SAFETY: We know that `self.take` points to the function `take::<P, H>`
        // below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        unsafe { (self.take)(ptr) }
    }

    /// Moves the argument out of `ptr`, converts it using the handler used
    /// when creating this [`SlotVtable`] and writes the result into `dst`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`SlotVtable`] must be a vtable for the argument type stored
    ///    behind `ptr`.
    /// 2. The pointee is initialized and valid for reads.
    /// 3. This method moves the argument out, so the caller must ensure that
    ///    the pointee is neither read nor dropped afterwards.
    #[inline]
    pub(super) unsafe fn write(&self, ptr: NonNull<Erased>, dst: &mut MaybeUninit<O>) {
        // SAFETY: We know that `self.write` points to the function
        // `write::<P, H>` below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        unsafe { (self.write)(ptr, dst) }
    }
}

/// Moves the `P` pointed to by `ptr` out and converts it with `H`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `P` matches the actual argument type stored behind `ptr`.
/// 2. The pointee is initialized and valid for reads.
/// 3. The pointee is neither read nor dropped after this call.
unsafe fn take<P, H: ConversionHandler<P>>(ptr: NonNull<Erased>) -> H::Output {
    let ptr: NonNull<P> = ptr.cast::<P>();
    // SAFETY:
    // 1. The pointer has the correct type, as guaranteed by the caller.
    // 2. The pointee is initialized and readable, as guaranteed by the caller.
    // 3. Ownership of the value is transferred to us, since the caller promises
    //    not to use the pointee again.
    let value = unsafe { ptr.read() };
    H::convert(value)
}

/// Moves the `P` pointed to by `ptr` out, converts it with `H` and constructs
/// the result directly in `dst`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `P` matches the actual argument type stored behind `ptr`.
/// 2. The pointee is initialized and valid for reads.
/// 3. The pointee is neither read nor dropped after this call.
unsafe fn write<P, H: ConversionHandler<P>>(
    ptr: NonNull<Erased>,
    dst: &mut MaybeUninit<H::Output>,
) {
    let ptr: NonNull<P> = ptr.cast::<P>();
    // SAFETY: See `take` above; the requirements are identical.
    let value = unsafe { ptr.read() };
    dst.write(H::convert(value));
}
