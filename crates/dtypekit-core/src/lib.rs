//! dtypekit core - native representation registry and scoped references
//!
//! Two independent building blocks for extending a host array runtime with
//! native numeric representations:
//!
//! - [`TypeDescriptor`] and friends: a compile-time table from a native
//!   Rust type to the storage type, legacy type number and optional dtype
//!   metadata the host needs. Unsupported types fail to compile.
//! - [`SafeObject`]: a move-only owner of one reference to an externally
//!   reference-counted object, released exactly once on every exit path.
//!
//! # Example
//!
//! ```
//! use dtypekit_core::{dtype_of, is_complex, legacy_type_num, Complex, Repr};
//! use dtypekit_sdk::TypeNum;
//!
//! assert_eq!(legacy_type_num::<f64>(), TypeNum::Double);
//! assert_eq!(std::mem::size_of::<Repr<bool>>(), 1);
//! assert_eq!(dtype_of::<bool>().type_num(), TypeNum::Bool);
//! assert!(is_complex::<Complex<f32>>());
//! assert!(!is_complex::<f32>());
//! ```

#![warn(missing_docs)]

pub mod c_types;
pub mod complex;
pub mod descriptor;
pub mod long_double;
pub mod record;
pub mod safe_object;

pub use c_types::{CInt, CLong, CLongLong, CUInt, CULong, CULongLong};
pub use complex::{is_complex, Complex, ComplexType, RealFloat};
pub use descriptor::{
    dtype_of, legacy_type_num, HasDTypeMeta, LegacyTypeNum, Repr, TypeDescriptor,
};
pub use long_double::LongDouble;
pub use record::{builtin_records, find, lookup, lookup_raw, TypeRecord};
pub use safe_object::{make_safe, SafeObject};

pub use half::f16;
