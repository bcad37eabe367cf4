//! Opaque storage for C `long double`
//!
//! Rust has no extended-precision float. The registry only needs a type
//! with the same size and alignment as the target's `long double`, so this
//! is a byte container; arithmetic on it is out of scope.
//!
//! | Target | Size | Align |
//! |--------|------|-------|
//! | MSVC, Apple aarch64, 32-bit ARM | 8 | 8 |
//! | 32-bit x86 (non-MSVC) | 12 | 4 |
//! | everything else | 16 | 16 |

#[cfg(any(
    target_env = "msvc",
    target_arch = "arm",
    all(target_vendor = "apple", target_arch = "aarch64")
))]
const LONG_DOUBLE_SIZE: usize = 8;
#[cfg(all(target_arch = "x86", not(target_env = "msvc")))]
const LONG_DOUBLE_SIZE: usize = 12;
#[cfg(not(any(
    target_env = "msvc",
    target_arch = "arm",
    target_arch = "x86",
    all(target_vendor = "apple", target_arch = "aarch64")
)))]
const LONG_DOUBLE_SIZE: usize = 16;

/// Raw bytes of a C `long double`, laid out like the target's.
#[cfg_attr(
    any(
        target_env = "msvc",
        target_arch = "arm",
        all(target_vendor = "apple", target_arch = "aarch64")
    ),
    repr(C, align(8))
)]
#[cfg_attr(
    all(target_arch = "x86", not(target_env = "msvc")),
    repr(C, align(4))
)]
#[cfg_attr(
    not(any(
        target_env = "msvc",
        target_arch = "arm",
        target_arch = "x86",
        all(target_vendor = "apple", target_arch = "aarch64")
    )),
    repr(C, align(16))
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LongDouble {
    bytes: [u8; LONG_DOUBLE_SIZE],
}

impl LongDouble {
    /// Size in bytes on this target
    pub const SIZE: usize = LONG_DOUBLE_SIZE;

    /// All-zero bit pattern (positive zero on every supported layout)
    pub const ZERO: LongDouble = LongDouble {
        bytes: [0; LONG_DOUBLE_SIZE],
    };

    /// Reinterpret native-endian bytes
    pub const fn from_bytes(bytes: [u8; LONG_DOUBLE_SIZE]) -> Self {
        Self { bytes }
    }

    /// Native-endian bytes
    pub const fn to_bytes(self) -> [u8; LONG_DOUBLE_SIZE] {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_size_matches_table() {
        assert_eq!(size_of::<LongDouble>(), LongDouble::SIZE);
        assert!(align_of::<LongDouble>() >= 4);
        assert_eq!(size_of::<LongDouble>() % align_of::<LongDouble>(), 0);
    }

    #[test]
    fn test_zero() {
        assert_eq!(LongDouble::default(), LongDouble::ZERO);
        assert!(LongDouble::ZERO.to_bytes().iter().all(|&b| b == 0));
    }
}
