//! TypeRecord: the registration boundary
//!
//! This is the one place where a compile-time representation turns into
//! runtime values the host's registration calls take. Records are built by
//! const fns from the trait table, so the builtin table below is laid out
//! by the compiler. Runtime codes are only translated *into* records here;
//! generic code keeps using the traits.

use std::mem::{align_of, size_of};

use dtypekit_sdk::{DTypeError, DTypeMeta, DTypeResult, TypeNum};
use half::f16;

use crate::c_types::{CInt, CLong, CLongLong, CUInt, CULong, CULongLong};
use crate::complex::Complex;
use crate::descriptor::{HasDTypeMeta, LegacyTypeNum, TypeDescriptor};
use crate::long_double::LongDouble;

/// Runtime snapshot of one descriptor bundle.
#[derive(Debug, Clone, Copy)]
pub struct TypeRecord {
    /// Registry name
    pub name: &'static str,
    /// Legacy type number, absent for emulated representations
    pub type_num: Option<TypeNum>,
    /// Size of the storage type in bytes
    pub itemsize: usize,
    /// Alignment of the storage type in bytes
    pub alignment: usize,
    /// Whether the representation is a real/imaginary pair
    pub is_complex: bool,
    /// Runtime dtype metadata, when the host ships one
    pub dtype: Option<&'static DTypeMeta>,
}

impl TypeRecord {
    /// Record of a representation without a host-native equivalent
    pub const fn of<T: TypeDescriptor>() -> Self {
        Self {
            name: T::NAME,
            type_num: None,
            itemsize: size_of::<T::Repr>(),
            alignment: align_of::<T::Repr>(),
            is_complex: T::IS_COMPLEX,
            dtype: None,
        }
    }

    /// Record of a representation with a legacy type number
    pub const fn of_legacy<T: LegacyTypeNum>() -> Self {
        let mut record = Self::of::<T>();
        record.type_num = Some(T::TYPE_NUM);
        record
    }

    /// Record of a representation with a legacy number and dtype metadata
    pub const fn of_dtype<T: LegacyTypeNum + HasDTypeMeta>() -> Self {
        let mut record = Self::of_legacy::<T>();
        record.dtype = Some(T::DTYPE);
        record
    }

    /// Whether dtype metadata is attached
    pub const fn has_dtype(&self) -> bool {
        self.dtype.is_some()
    }

    /// Type character, if the record has a legacy number
    pub fn type_char(&self) -> Option<char> {
        self.type_num.map(TypeNum::as_char)
    }
}

// Fixed-width primitives come before the C-named wrappers so lookups by a
// shared number resolve to the primitive.
static BUILTIN_RECORDS: [TypeRecord; 22] = [
    TypeRecord::of_dtype::<bool>(),
    TypeRecord::of_legacy::<i8>(),
    TypeRecord::of_dtype::<u8>(),
    TypeRecord::of_legacy::<i16>(),
    TypeRecord::of_legacy::<u16>(),
    TypeRecord::of_dtype::<i32>(),
    TypeRecord::of_legacy::<u32>(),
    TypeRecord::of_legacy::<i64>(),
    TypeRecord::of_legacy::<u64>(),
    TypeRecord::of_dtype::<CInt>(),
    TypeRecord::of_legacy::<CUInt>(),
    TypeRecord::of_legacy::<CLong>(),
    TypeRecord::of_legacy::<CULong>(),
    TypeRecord::of_legacy::<CLongLong>(),
    TypeRecord::of_legacy::<CULongLong>(),
    TypeRecord::of_legacy::<f16>(),
    TypeRecord::of_legacy::<f32>(),
    TypeRecord::of_legacy::<f64>(),
    TypeRecord::of_legacy::<LongDouble>(),
    TypeRecord::of_legacy::<Complex<f32>>(),
    TypeRecord::of_legacy::<Complex<f64>>(),
    TypeRecord::of_legacy::<Complex<LongDouble>>(),
];

/// Every builtin registration, primitives first
pub fn builtin_records() -> &'static [TypeRecord] {
    &BUILTIN_RECORDS
}

/// First record in `records` carrying `type_num`
///
/// Libraries that register emulated representations keep their own tables
/// and search them the same way.
pub fn find(
    records: &'static [TypeRecord],
    type_num: TypeNum,
) -> DTypeResult<&'static TypeRecord> {
    let found = records
        .iter()
        .find(|record| record.type_num == Some(type_num));

    match found {
        Some(record) => Ok(record),
        None => {
            log::debug!(
                "no registration for {} among {} records",
                type_num,
                records.len()
            );
            Err(DTypeError::NotRegistered { type_num })
        }
    }
}

/// Canonical builtin record for a legacy type number
pub fn lookup(type_num: TypeNum) -> DTypeResult<&'static TypeRecord> {
    find(builtin_records(), type_num)
}

/// Canonical builtin record for a raw host type number
pub fn lookup_raw(raw: i32) -> DTypeResult<&'static TypeRecord> {
    let type_num = TypeNum::try_from(raw).inspect_err(|_| {
        log::debug!("rejecting non-numeric type number {}", raw);
    })?;
    lookup(type_num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_number_has_a_builtin() {
        for num in TypeNum::ALL {
            let record = lookup(num).unwrap();
            assert_eq!(record.type_num, Some(num));
            assert_eq!(record.is_complex, num.is_complex());
        }
    }

    #[test]
    fn test_lookup_prefers_primitives() {
        assert_eq!(lookup(TypeNum::Int).unwrap().name, "int32");
        assert_eq!(lookup(TypeNum::UByte).unwrap().name, "uint8");
        let long = lookup(TypeNum::Long).unwrap().name;
        if size_of::<std::ffi::c_long>() == 8 {
            assert_eq!(long, "int64");
        } else {
            assert_eq!(long, "long");
        }
    }

    #[test]
    fn test_lookup_raw() {
        assert_eq!(lookup_raw(12).unwrap().name, "float64");
        assert_eq!(lookup_raw(23).unwrap().itemsize, 2);
        assert_eq!(lookup_raw(17).unwrap_err(), DTypeError::UnknownTypeNum(17));
        assert_eq!(lookup_raw(-3).unwrap_err(), DTypeError::UnknownTypeNum(-3));
    }

    #[test]
    fn test_find_in_partial_table() {
        static ONLY_FLOATS: [TypeRecord; 2] =
            [TypeRecord::of_legacy::<f32>(), TypeRecord::of_legacy::<f64>()];

        assert_eq!(find(&ONLY_FLOATS, TypeNum::Float).unwrap().name, "float32");
        assert_eq!(
            find(&ONLY_FLOATS, TypeNum::Bool).unwrap_err(),
            DTypeError::NotRegistered {
                type_num: TypeNum::Bool
            }
        );
    }

    #[test]
    fn test_dtype_only_on_subset() {
        let with_dtype: Vec<&str> = builtin_records()
            .iter()
            .filter(|record| record.has_dtype())
            .map(|record| record.name)
            .collect();
        assert_eq!(with_dtype, vec!["bool", "uint8", "int32", "intc"]);
    }

    #[test]
    fn test_emulated_record_has_no_number() {
        struct Emulated;
        impl TypeDescriptor for Emulated {
            type Repr = u16;
            const NAME: &'static str = "emulated16";
        }

        let record = TypeRecord::of::<Emulated>();
        assert_eq!(record.type_num, None);
        assert_eq!(record.type_char(), None);
        assert_eq!(record.itemsize, 2);
        assert!(!record.has_dtype());
    }

    #[test]
    fn test_type_char() {
        assert_eq!(lookup(TypeNum::Bool).unwrap().type_char(), Some('?'));
        assert_eq!(lookup(TypeNum::CDouble).unwrap().type_char(), Some('D'));
    }
}
