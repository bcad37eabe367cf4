//! Distinct C integer names
//!
//! Rust's `c_int`, `c_long` and `c_longlong` are aliases of fixed-width
//! primitives, so `c_long` and `i64` are the same type on LP64 targets. The
//! host numbers `int`, `long` and `long long` separately regardless of
//! width, so each name gets its own transparent wrapper here.

use std::ffi::{c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong};

macro_rules! c_integer {
    ($(#[$doc:meta])* $name:ident($inner:ty)) => {
        $(#[$doc])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub $inner);

        impl $name {
            /// Wrap a raw C value
            #[inline(always)]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Get the raw C value
            #[inline(always)]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

c_integer!(
    /// C `int`
    CInt(c_int)
);
c_integer!(
    /// C `unsigned int`
    CUInt(c_uint)
);
c_integer!(
    /// C `long`
    CLong(c_long)
);
c_integer!(
    /// C `unsigned long`
    CULong(c_ulong)
);
c_integer!(
    /// C `long long`
    CLongLong(c_longlong)
);
c_integer!(
    /// C `unsigned long long`
    CULongLong(c_ulonglong)
);
