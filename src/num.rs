use core::f32::consts::PI as PI32;

// Minimal float trait for the generic detector (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Narrowing for `f32`, exact for `f64`.
    fn from_f64(x: f64) -> Self;
    /// Convert a sample count into the floating-point type.
    ///
    /// Counts beyond the exactly representable range round to the nearest
    /// value instead of failing; a block that long is already far outside
    /// the precision the recursion can keep.
    fn from_usize(x: usize) -> Self;
    fn cos(self) -> Self;
    fn log10(self) -> Self;
    fn pi() -> Self;
    fn is_finite(self) -> bool;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn log10(self) -> Self {
        libm::log10f(self)
    }
    fn pi() -> Self {
        PI32
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn log10(self) -> Self {
        libm::log10(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
