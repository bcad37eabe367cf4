//! DTypeMeta: runtime dtype metadata objects
//!
//! The host's newer type-description system identifies a dtype by the
//! address of a process-wide metadata object. Only a subset of the legacy
//! numbers has one; the legacy [`TypeNum`] stays the universal fallback.
//!
//! Metadata objects are always `static`. Code that hands them out uses
//! `&'static DTypeMeta` and never owns or frees them.

use std::ptr;

use crate::type_num::TypeNum;

/// Statically allocated description of a host dtype class.
#[derive(Debug)]
pub struct DTypeMeta {
    name: &'static str,
    type_num: TypeNum,
    itemsize: usize,
    alignment: usize,
}

impl DTypeMeta {
    /// Describe a dtype class. Intended for `static` items only.
    pub const fn new(
        name: &'static str,
        type_num: TypeNum,
        itemsize: usize,
        alignment: usize,
    ) -> Self {
        Self {
            name,
            type_num,
            itemsize,
            alignment,
        }
    }

    /// Class name as the host reports it
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Legacy type number of the class
    pub const fn type_num(&self) -> TypeNum {
        self.type_num
    }

    /// Size of one element in bytes
    pub const fn itemsize(&self) -> usize {
        self.itemsize
    }

    /// Required element alignment in bytes
    pub const fn alignment(&self) -> usize {
        self.alignment
    }

    /// Kind character of the class
    pub const fn kind(&self) -> char {
        self.type_num.kind()
    }

    /// Identity comparison: two metadata references name the same dtype
    /// only if they point at the same object.
    #[inline]
    pub fn same(&self, other: &DTypeMeta) -> bool {
        ptr::eq(self, other)
    }
}

/// Boolean dtype class
pub static BOOL_DTYPE: DTypeMeta = DTypeMeta::new("BoolDType", TypeNum::Bool, 1, 1);

/// C `unsigned char` dtype class
pub static UBYTE_DTYPE: DTypeMeta = DTypeMeta::new("UInt8DType", TypeNum::UByte, 1, 1);

/// C `int` dtype class
pub static INT_DTYPE: DTypeMeta = DTypeMeta::new(
    "Int32DType",
    TypeNum::Int,
    std::mem::size_of::<std::ffi::c_int>(),
    std::mem::align_of::<std::ffi::c_int>(),
);
