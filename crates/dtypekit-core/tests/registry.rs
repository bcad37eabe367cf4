//! Registry properties across the whole builtin table

use std::any::TypeId;
use std::collections::HashSet;
use std::mem::size_of;

use dtypekit_core::{
    builtin_records, dtype_of, f16, is_complex, legacy_type_num, lookup, CInt, CLong,
    CLongLong, Complex, HasDTypeMeta, LegacyTypeNum, LongDouble, Repr, TypeDescriptor,
    TypeRecord,
};
use dtypekit_sdk::{TypeNum, BOOL_DTYPE};

// ============================================================================
// Generic consumers
// ============================================================================

/// Accumulator slots a reduction needs for `T`
fn accumulator_slots<T: TypeDescriptor>() -> usize {
    if is_complex::<T>() {
        2
    } else {
        1
    }
}

/// Registration arguments for a host call, derived from the type alone
fn registration_args<T: LegacyTypeNum>() -> (i32, usize, char) {
    let num = legacy_type_num::<T>();
    (num.as_raw(), size_of::<Repr<T>>(), num.as_char())
}

/// Emulated 16-bit format known only to this library
#[allow(dead_code)]
#[derive(Clone, Copy)]
#[repr(transparent)]
struct BrainFloat(u16);

impl TypeDescriptor for BrainFloat {
    type Repr = u16;
    const NAME: &'static str = "bfloat16";
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_repr_queries_are_stable() {
    assert_eq!(TypeId::of::<Repr<bool>>(), TypeId::of::<u8>());
    assert_eq!(TypeId::of::<Repr<bool>>(), TypeId::of::<Repr<bool>>());
    assert_eq!(TypeId::of::<Repr<Complex<f64>>>(), TypeId::of::<Complex<f64>>());
    assert_eq!(TypeId::of::<Repr<LongDouble>>(), TypeId::of::<LongDouble>());
}

#[test]
fn test_bool_occupies_one_unit() {
    assert_eq!(size_of::<Repr<bool>>(), 1);
    assert_eq!(size_of::<Repr<bool>>(), BOOL_DTYPE.itemsize());
}

#[test]
fn test_distinct_host_types_have_distinct_numbers() {
    let primitives = [
        legacy_type_num::<bool>(),
        legacy_type_num::<u8>(),
        legacy_type_num::<u16>(),
        legacy_type_num::<u32>(),
        legacy_type_num::<u64>(),
        legacy_type_num::<i8>(),
        legacy_type_num::<i16>(),
        legacy_type_num::<i32>(),
        legacy_type_num::<i64>(),
        legacy_type_num::<f16>(),
        legacy_type_num::<f32>(),
        legacy_type_num::<f64>(),
        legacy_type_num::<LongDouble>(),
        legacy_type_num::<Complex<f32>>(),
        legacy_type_num::<Complex<f64>>(),
        legacy_type_num::<Complex<LongDouble>>(),
    ];
    let unique: HashSet<TypeNum> = primitives.iter().copied().collect();
    assert_eq!(unique.len(), primitives.len());
}

#[test]
fn test_c_names_are_distinct_even_when_widths_coincide() {
    assert_ne!(TypeId::of::<CLong>(), TypeId::of::<CLongLong>());
    assert_ne!(legacy_type_num::<CLong>(), legacy_type_num::<CLongLong>());
    assert_ne!(legacy_type_num::<CInt>(), legacy_type_num::<CLong>());
}

#[test]
fn test_exactly_three_complex_records() {
    let complex: Vec<&str> = builtin_records()
        .iter()
        .filter(|record| record.is_complex)
        .map(|record| record.name)
        .collect();
    assert_eq!(complex, vec!["complex64", "complex128", "clongdouble"]);
}

#[test]
fn test_generic_consumers() {
    assert_eq!(accumulator_slots::<f64>(), 1);
    assert_eq!(accumulator_slots::<Complex<f64>>(), 2);
    assert_eq!(accumulator_slots::<BrainFloat>(), 1);

    assert_eq!(registration_args::<bool>(), (0, 1, '?'));
    assert_eq!(registration_args::<f32>(), (11, 4, 'f'));
    assert_eq!(registration_args::<Complex<f32>>(), (14, 8, 'F'));
}

#[test]
fn test_emulated_type_registers_without_host_number() {
    let record = TypeRecord::of::<BrainFloat>();
    assert_eq!(record.name, "bfloat16");
    assert_eq!(record.type_num, None);
    assert_eq!(record.itemsize, 2);
    assert!(!record.is_complex);
}

#[test]
fn test_records_agree_with_traits() {
    fn check<T: LegacyTypeNum>() {
        let record = lookup(legacy_type_num::<T>()).unwrap();
        assert_eq!(record.itemsize, size_of::<Repr<T>>(), "{}", T::NAME);
        assert_eq!(record.is_complex, is_complex::<T>(), "{}", T::NAME);
    }
    check::<bool>();
    check::<u8>();
    check::<i16>();
    check::<i32>();
    check::<i64>();
    check::<f16>();
    check::<f64>();
    check::<LongDouble>();
    check::<Complex<LongDouble>>();
}

#[test]
fn test_record_dtype_is_the_static_object() {
    fn check<T: LegacyTypeNum + HasDTypeMeta>() {
        let record = lookup(legacy_type_num::<T>()).unwrap();
        let meta = record.dtype.expect("dtype attached");
        assert!(meta.same(dtype_of::<T>()));
    }
    check::<bool>();
    check::<u8>();
    check::<i32>();
}

#[test]
fn test_table_names_unique() {
    let names: HashSet<&str> = builtin_records().iter().map(|r| r.name).collect();
    assert_eq!(names.len(), builtin_records().len());
}
