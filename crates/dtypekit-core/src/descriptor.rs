//! TypeDescriptor: compile-time registry of native representations
//!
//! Each supported native type implements [`TypeDescriptor`] for its storage
//! type, [`LegacyTypeNum`] when the host has a native equivalent, and
//! [`HasDTypeMeta`] when the host's newer type system ships a metadata
//! object for it. Generic code names what it needs as a bound, so every
//! query resolves during monomorphization:
//!
//! ```
//! use dtypekit_core::{legacy_type_num, LegacyTypeNum, Repr};
//! use dtypekit_sdk::TypeNum;
//!
//! fn itemsize<T: LegacyTypeNum>() -> (TypeNum, usize) {
//!     (legacy_type_num::<T>(), std::mem::size_of::<Repr<T>>())
//! }
//!
//! assert_eq!(itemsize::<bool>(), (TypeNum::Bool, 1));
//! assert_eq!(itemsize::<u16>(), (TypeNum::UShort, 2));
//! ```
//!
//! Types outside the table are rejected by the compiler, never defaulted:
//!
//! ```compile_fail
//! use dtypekit_core::legacy_type_num;
//!
//! struct Unregistered;
//! let _ = legacy_type_num::<Unregistered>();
//! ```
//!
//! Asking for dtype metadata a type does not ship is a compile error too:
//!
//! ```compile_fail
//! use dtypekit_core::dtype_of;
//!
//! let _ = dtype_of::<f64>();
//! ```
//!
//! Adding a representation means adding impls for it; nothing that consumes
//! the registry changes. Software-emulated formats implement
//! [`TypeDescriptor`] alone, since the host has no legacy number for them.

use std::ffi::{c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong};
use std::mem::size_of;

use dtypekit_sdk::{DTypeMeta, TypeNum, BOOL_DTYPE, INT_DTYPE, UBYTE_DTYPE};
use half::f16;

use crate::c_types::{CInt, CLong, CLongLong, CUInt, CULong, CULongLong};
use crate::long_double::LongDouble;

/// Descriptor bundle of a native representation type.
pub trait TypeDescriptor: 'static {
    /// Type used to store one value in host memory
    type Repr: Copy + 'static;

    /// Registry name of the representation
    const NAME: &'static str;

    /// True only for paired real/imaginary representations
    const IS_COMPLEX: bool = false;
}

/// Storage type of `T`
pub type Repr<T> = <T as TypeDescriptor>::Repr;

/// Representation with a host-native legacy type number.
pub trait LegacyTypeNum: TypeDescriptor {
    /// Legacy type number of the host-native equivalent
    const TYPE_NUM: TypeNum;
}

/// Representation the host's newer type system describes with a
/// statically allocated metadata object.
pub trait HasDTypeMeta: TypeDescriptor {
    /// Process-wide metadata object; never owned by the registry
    const DTYPE: &'static DTypeMeta;
}

/// Legacy type number of `T`
#[inline(always)]
pub const fn legacy_type_num<T: LegacyTypeNum>() -> TypeNum {
    T::TYPE_NUM
}

/// Runtime dtype metadata of `T`
#[inline(always)]
pub const fn dtype_of<T: HasDTypeMeta>() -> &'static DTypeMeta {
    T::DTYPE
}

// 64-bit integers are `long` on LP64 and `long long` on LLP64/ILP32.
const LONG_IS_64_BIT: bool = size_of::<c_long>() == 8;

const I64_TYPE_NUM: TypeNum = if LONG_IS_64_BIT {
    TypeNum::Long
} else {
    TypeNum::LongLong
};

const U64_TYPE_NUM: TypeNum = if LONG_IS_64_BIT {
    TypeNum::ULong
} else {
    TypeNum::ULongLong
};

macro_rules! register {
    ($ty:ty as $repr:ty, $name:literal, $num:expr) => {
        impl TypeDescriptor for $ty {
            type Repr = $repr;
            const NAME: &'static str = $name;
        }

        impl LegacyTypeNum for $ty {
            const TYPE_NUM: TypeNum = $num;
        }
    };
    ($ty:ty as $repr:ty, $name:literal, $num:expr, $dtype:ident) => {
        register!($ty as $repr, $name, $num);

        impl HasDTypeMeta for $ty {
            const DTYPE: &'static DTypeMeta = &$dtype;
        }
    };
}

// Unsigned integers
register!(u8 as u8, "uint8", TypeNum::UByte, UBYTE_DTYPE);
register!(u16 as u16, "uint16", TypeNum::UShort);
register!(u32 as u32, "uint32", TypeNum::UInt);
register!(u64 as u64, "uint64", U64_TYPE_NUM);
register!(CUInt as c_uint, "uintc", TypeNum::UInt);
register!(CULong as c_ulong, "ulong", TypeNum::ULong);
register!(CULongLong as c_ulonglong, "ulonglong", TypeNum::ULongLong);

// Signed integers
register!(i8 as i8, "int8", TypeNum::Byte);
register!(i16 as i16, "int16", TypeNum::Short);
register!(i32 as i32, "int32", TypeNum::Int, INT_DTYPE);
register!(i64 as i64, "int64", I64_TYPE_NUM);
register!(CInt as c_int, "intc", TypeNum::Int, INT_DTYPE);
register!(CLong as c_long, "long", TypeNum::Long);
register!(CLongLong as c_longlong, "longlong", TypeNum::LongLong);

// Booleans occupy one byte, like the host's own storage
register!(bool as u8, "bool", TypeNum::Bool, BOOL_DTYPE);

// Floating point
register!(f16 as f16, "float16", TypeNum::Half);
register!(f32 as f32, "float32", TypeNum::Float);
register!(f64 as f64, "float64", TypeNum::Double);
register!(LongDouble as LongDouble, "longdouble", TypeNum::LongDouble);
