//! SafeObject: scoped ownership of one external reference
//!
//! Wraps a raw pointer the caller already owns a reference to and gives it
//! back to the runtime exactly once: on [`SafeObject::release`], on
//! [`SafeObject::reset`], or on drop, whichever comes first. Early returns
//! through `?` and panics unwinding past the wrapper release it as well.
//!
//! The wrapper is move-only. A second owner needs a second reference, taken
//! explicitly with [`SafeObject::from_borrowed`]:
//!
//! ```compile_fail
//! # use std::ptr::NonNull;
//! # use dtypekit_core::SafeObject;
//! # use dtypekit_sdk::RefCountRuntime;
//! # struct Rt;
//! # unsafe impl RefCountRuntime for Rt {
//! #     type Object = u32;
//! #     unsafe fn retain(_: NonNull<u32>) {}
//! #     unsafe fn release(_: NonNull<u32>) {}
//! # }
//! let owner: SafeObject<Rt> = SafeObject::null();
//! let copy = owner.clone();
//! ```

use std::fmt;
use std::mem;
use std::ptr::{self, NonNull};

use dtypekit_sdk::RefCountRuntime;

/// Owner of one reference to an object of runtime `R`.
///
/// Never `Sync`. `Send` only when `R::Object` is, so a reference crosses
/// threads by moving its single owner.
pub struct SafeObject<R: RefCountRuntime> {
    ptr: Option<NonNull<R::Object>>,
}

// SAFETY: the wrapper is the sole owner of its reference; moving it moves
// that ownership, and `R` vouches that release is sound wherever
// `R::Object: Send` lets the pointer go.
unsafe impl<R: RefCountRuntime> Send for SafeObject<R> where R::Object: Send {}

impl<R: RefCountRuntime> SafeObject<R> {
    /// Empty wrapper; dropping it does nothing
    #[inline]
    pub const fn null() -> Self {
        Self { ptr: None }
    }

    /// Take ownership of a reference the caller already holds.
    ///
    /// The reference count is not touched. A null pointer gives an empty
    /// wrapper.
    ///
    /// # Safety
    /// `ptr` must be null or point at a live object of `R` on which the
    /// caller owns one reference, and that reference must not be released
    /// by anyone else afterwards.
    #[inline]
    pub unsafe fn from_owned(ptr: *mut R::Object) -> Self {
        Self {
            ptr: NonNull::new(ptr),
        }
    }

    /// Retain `ptr` and own the new reference.
    ///
    /// # Safety
    /// `ptr` must be null or point at a live object of `R`.
    pub unsafe fn from_borrowed(ptr: *mut R::Object) -> Self {
        let ptr = NonNull::new(ptr);
        if let Some(obj) = ptr {
            log::trace!("retaining external object {:p}", obj);
            R::retain(obj);
        }
        Self { ptr }
    }

    /// Whether the wrapper holds no reference
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// Raw pointer, still owned by the wrapper (null if empty)
    #[inline]
    pub fn as_ptr(&self) -> *mut R::Object {
        self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Non-null pointer, still owned by the wrapper
    #[inline]
    pub fn get(&self) -> Option<NonNull<R::Object>> {
        self.ptr
    }

    /// Give the reference back to the runtime now.
    ///
    /// Calling it again, or dropping afterwards, does nothing.
    pub fn release(&mut self) {
        if let Some(obj) = self.ptr.take() {
            log::trace!("releasing external object {:p}", obj);
            // SAFETY: `from_owned`/`from_borrowed` established that this
            // wrapper owns exactly one reference to `obj`.
            unsafe { R::release(obj) };
        }
    }

    /// Own `ptr` instead, releasing the previously held reference.
    ///
    /// # Safety
    /// Same contract as [`SafeObject::from_owned`].
    pub unsafe fn reset(&mut self, ptr: *mut R::Object) {
        let old = mem::replace(self, Self::from_owned(ptr));
        drop(old);
    }

    /// Move the reference out, leaving this wrapper empty
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            ptr: self.ptr.take(),
        }
    }

    /// Hand the reference to the caller without releasing it
    #[must_use = "the returned pointer owns a reference that must be released"]
    pub fn into_raw(mut self) -> *mut R::Object {
        self.ptr.take().map_or(ptr::null_mut(), NonNull::as_ptr)
    }
}

impl<R: RefCountRuntime> Drop for SafeObject<R> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<R: RefCountRuntime> Default for SafeObject<R> {
    fn default() -> Self {
        Self::null()
    }
}

impl<R: RefCountRuntime> fmt::Debug for SafeObject<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SafeObject").field(&self.as_ptr()).finish()
    }
}

/// Wrap an owned reference; see [`SafeObject::from_owned`]
///
/// # Safety
/// Same contract as [`SafeObject::from_owned`].
#[inline]
pub unsafe fn make_safe<R: RefCountRuntime>(ptr: *mut R::Object) -> SafeObject<R> {
    SafeObject::from_owned(ptr)
}
