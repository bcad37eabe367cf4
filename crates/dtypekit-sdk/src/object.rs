//! RefCountRuntime: the external object system's retain/release seam
//!
//! The host runtime owns its objects and counts references to them. Native
//! code only ever sees raw pointers plus these two operations; what the
//! object looks like and when it is freed stays the runtime's business.

use std::ptr::NonNull;

/// Reference counting operations of an external object system.
///
/// # Safety
///
/// Implementors must guarantee that:
/// - `retain` adds exactly one reference to a live object.
/// - `release` drops exactly one reference and may free the object once
///   the count reaches zero.
/// - Both are sound to call from whichever thread may own an
///   `Object` pointer, which is at least every thread on which
///   `Self::Object: Send` allows it to travel.
pub unsafe trait RefCountRuntime {
    /// The runtime's object header type
    type Object;

    /// Increment the reference count of `obj`.
    ///
    /// # Safety
    /// `obj` must point at a live object of this runtime.
    unsafe fn retain(obj: NonNull<Self::Object>);

    /// Decrement the reference count of `obj`, freeing it at zero.
    ///
    /// # Safety
    /// The caller must own one reference to `obj` and gives it up here.
    unsafe fn release(obj: NonNull<Self::Object>);
}
