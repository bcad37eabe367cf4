//! Complex representations and the complex-number predicate
//!
//! A complex value is a `#[repr(C)]` pair of real components laid out like
//! C's `_Complex`. Only the host's three complex widths are registered:
//! pairs of `f32`, `f64` and [`LongDouble`]. Generic code picks its real or
//! complex path with [`is_complex`] or a [`ComplexType`] bound.

use dtypekit_sdk::TypeNum;

use crate::descriptor::{LegacyTypeNum, TypeDescriptor};
use crate::long_double::LongDouble;

/// Pair of real and imaginary components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
    /// Real component
    pub re: T,
    /// Imaginary component
    pub im: T,
}

impl<T> Complex<T> {
    /// Build from components
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for super::LongDouble {}
}

/// Real component type with a host complex counterpart.
pub trait RealFloat: LegacyTypeNum<Repr = Self> + Copy + sealed::Sealed {
    /// Legacy type number of `Complex<Self>`
    const COMPLEX_TYPE_NUM: TypeNum;

    /// Registry name of `Complex<Self>`
    const COMPLEX_NAME: &'static str;
}

impl RealFloat for f32 {
    const COMPLEX_TYPE_NUM: TypeNum = TypeNum::CFloat;
    const COMPLEX_NAME: &'static str = "complex64";
}

impl RealFloat for f64 {
    const COMPLEX_TYPE_NUM: TypeNum = TypeNum::CDouble;
    const COMPLEX_NAME: &'static str = "complex128";
}

impl RealFloat for LongDouble {
    const COMPLEX_TYPE_NUM: TypeNum = TypeNum::CLongDouble;
    const COMPLEX_NAME: &'static str = "clongdouble";
}

impl<T: RealFloat> TypeDescriptor for Complex<T> {
    type Repr = Complex<T>;
    const NAME: &'static str = T::COMPLEX_NAME;
    const IS_COMPLEX: bool = true;
}

impl<T: RealFloat> LegacyTypeNum for Complex<T> {
    const TYPE_NUM: TypeNum = T::COMPLEX_TYPE_NUM;
}

/// Registered complex representation, exposing its component type.
pub trait ComplexType: TypeDescriptor {
    /// Type of each of the two components
    type Real: RealFloat;
}

impl<T: RealFloat> ComplexType for Complex<T> {
    type Real = T;
}

/// True exactly for the registered complex representations
#[inline(always)]
pub const fn is_complex<T: TypeDescriptor>() -> bool {
    T::IS_COMPLEX
}
