//! Internal utility types.

/// Marker type used when type-erasing the address of an argument.
///
/// This zero-sized type serves as the pointee of `NonNull<Erased>` once the
/// concrete argument type has been forgotten. No value of this type is ever
/// created or read.
///
/// Using a distinct marker type (rather than `()`) makes the intent clearer
/// in type signatures and error messages.
pub(crate) struct Erased;
