//! TypeNum: the host runtime's legacy numeric type numbering
//!
//! These integers predate width-based naming: `Int`, `Long` and `LongLong`
//! are separate numbers even on platforms where two of them share a width.
//!
//! ```text
//! 0  Bool      4  UShort    8  ULong       12 Double       16 CLongDouble
//! 1  Byte      5  Int       9  LongLong    13 LongDouble   23 Half
//! 2  UByte     6  UInt      10 ULongLong   14 CFloat
//! 3  Short     7  Long      11 Float       15 CDouble
//! ```
//!
//! Numbers 17-22 belong to non-numeric host types and are not part of
//! this enumeration.

use std::fmt;

use crate::error::{DTypeError, DTypeResult};

/// Legacy numeric type number, identical to the host runtime's values.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeNum {
    /// Boolean, one byte per value
    Bool = 0,
    /// C `signed char`
    Byte = 1,
    /// C `unsigned char`
    UByte = 2,
    /// C `short`
    Short = 3,
    /// C `unsigned short`
    UShort = 4,
    /// C `int`
    Int = 5,
    /// C `unsigned int`
    UInt = 6,
    /// C `long`
    Long = 7,
    /// C `unsigned long`
    ULong = 8,
    /// C `long long`
    LongLong = 9,
    /// C `unsigned long long`
    ULongLong = 10,
    /// C `float`
    Float = 11,
    /// C `double`
    Double = 12,
    /// C `long double`
    LongDouble = 13,
    /// Pair of `float`
    CFloat = 14,
    /// Pair of `double`
    CDouble = 15,
    /// Pair of `long double`
    CLongDouble = 16,
    /// IEEE 754 binary16
    Half = 23,
}

impl TypeNum {
    /// Every numeric type number, in numbering order
    pub const ALL: [TypeNum; 18] = [
        TypeNum::Bool,
        TypeNum::Byte,
        TypeNum::UByte,
        TypeNum::Short,
        TypeNum::UShort,
        TypeNum::Int,
        TypeNum::UInt,
        TypeNum::Long,
        TypeNum::ULong,
        TypeNum::LongLong,
        TypeNum::ULongLong,
        TypeNum::Float,
        TypeNum::Double,
        TypeNum::LongDouble,
        TypeNum::CFloat,
        TypeNum::CDouble,
        TypeNum::CLongDouble,
        TypeNum::Half,
    ];

    /// Raw integer as the host runtime sees it
    #[inline(always)]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Translate a raw host integer, `None` if it is not numeric
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(TypeNum::Bool),
            1 => Some(TypeNum::Byte),
            2 => Some(TypeNum::UByte),
            3 => Some(TypeNum::Short),
            4 => Some(TypeNum::UShort),
            5 => Some(TypeNum::Int),
            6 => Some(TypeNum::UInt),
            7 => Some(TypeNum::Long),
            8 => Some(TypeNum::ULong),
            9 => Some(TypeNum::LongLong),
            10 => Some(TypeNum::ULongLong),
            11 => Some(TypeNum::Float),
            12 => Some(TypeNum::Double),
            13 => Some(TypeNum::LongDouble),
            14 => Some(TypeNum::CFloat),
            15 => Some(TypeNum::CDouble),
            16 => Some(TypeNum::CLongDouble),
            23 => Some(TypeNum::Half),
            _ => None,
        }
    }

    /// Single-character type code used by the host's type strings
    pub const fn as_char(self) -> char {
        match self {
            TypeNum::Bool => '?',
            TypeNum::Byte => 'b',
            TypeNum::UByte => 'B',
            TypeNum::Short => 'h',
            TypeNum::UShort => 'H',
            TypeNum::Int => 'i',
            TypeNum::UInt => 'I',
            TypeNum::Long => 'l',
            TypeNum::ULong => 'L',
            TypeNum::LongLong => 'q',
            TypeNum::ULongLong => 'Q',
            TypeNum::Float => 'f',
            TypeNum::Double => 'd',
            TypeNum::LongDouble => 'g',
            TypeNum::CFloat => 'F',
            TypeNum::CDouble => 'D',
            TypeNum::CLongDouble => 'G',
            TypeNum::Half => 'e',
        }
    }

    /// Parse a single-character type code
    pub fn from_char(c: char) -> DTypeResult<Self> {
        TypeNum::ALL
            .iter()
            .copied()
            .find(|num| num.as_char() == c)
            .ok_or(DTypeError::UnknownTypeChar(c))
    }

    /// Kind character: `b` bool, `i` signed, `u` unsigned, `f` float, `c` complex
    pub const fn kind(self) -> char {
        match self {
            TypeNum::Bool => 'b',
            TypeNum::Byte | TypeNum::Short | TypeNum::Int | TypeNum::Long | TypeNum::LongLong => {
                'i'
            }
            TypeNum::UByte
            | TypeNum::UShort
            | TypeNum::UInt
            | TypeNum::ULong
            | TypeNum::ULongLong => 'u',
            TypeNum::Half | TypeNum::Float | TypeNum::Double | TypeNum::LongDouble => 'f',
            TypeNum::CFloat | TypeNum::CDouble | TypeNum::CLongDouble => 'c',
        }
    }

    /// True for the paired real/imaginary numbers
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(
            self,
            TypeNum::CFloat | TypeNum::CDouble | TypeNum::CLongDouble
        )
    }

    /// Scalar type name in the host's naming
    pub const fn name(self) -> &'static str {
        match self {
            TypeNum::Bool => "bool",
            TypeNum::Byte => "byte",
            TypeNum::UByte => "ubyte",
            TypeNum::Short => "short",
            TypeNum::UShort => "ushort",
            TypeNum::Int => "intc",
            TypeNum::UInt => "uintc",
            TypeNum::Long => "long",
            TypeNum::ULong => "ulong",
            TypeNum::LongLong => "longlong",
            TypeNum::ULongLong => "ulonglong",
            TypeNum::Float => "single",
            TypeNum::Double => "double",
            TypeNum::LongDouble => "longdouble",
            TypeNum::CFloat => "csingle",
            TypeNum::CDouble => "cdouble",
            TypeNum::CLongDouble => "clongdouble",
            TypeNum::Half => "half",
        }
    }
}

impl TryFrom<i32> for TypeNum {
    type Error = DTypeError;

    fn try_from(raw: i32) -> DTypeResult<Self> {
        TypeNum::from_raw(raw).ok_or(DTypeError::UnknownTypeNum(raw))
    }
}

impl From<TypeNum> for i32 {
    fn from(num: TypeNum) -> Self {
        num.as_raw()
    }
}

impl fmt::Display for TypeNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_raw())
    }
}
