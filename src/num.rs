//! Scalar domains and the numeric traits vectors are generic over.

#![allow(clippy::excessive_precision)]

use crate::promotion::Promote;
use half::f16;
use num_complex::Complex64;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

/// A scalar domain that can be stored in a vector, matrix or quaternion.
///
/// The domain zero is the [`Default`] value (`false` for booleans).
pub trait Scalar:
    Copy
    + PartialEq
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr<Err: fmt::Display>
    + Send
    + Sync
    + 'static
{
    /// Whether the value equals the domain zero.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Bits to feed into a combined hash. Values that compare equal must give
    /// the same bits.
    fn hash_bits(&self) -> u64;
}

/// A domain with a notion of magnitude, and thereby of vector length.
pub trait Metric: Scalar {
    /// The domain lengths and norms are expressed in.
    type Length: Scalar + Add<Output = Self::Length> + PartialOrd;

    /// The squared magnitude `|self|²`.
    fn magnitude_squared(self) -> Self::Length;

    /// The magnitude `|self|`.
    fn magnitude(self) -> Self::Length;

    /// Takes the square root of a sum of squared magnitudes. The root is
    /// computed in double precision and narrowed back.
    fn sqrt_length(squared: Self::Length) -> Self::Length;

    /// The magnitude in double precision.
    fn magnitude_f64(self) -> f64;
}

/// Absolute value.
pub trait Abs: Scalar {
    type Output: Scalar;

    fn abs(self) -> Self::Output;
}

/// Rounding to integral values. [`Rounding::round`] rounds half-way cases to
/// the nearest even value.
pub trait Rounding: Scalar {
    fn floor(self) -> Self;
    fn ceiling(self) -> Self;
    fn round(self) -> Self;
    fn truncate(self) -> Self;
}

/// Trigonometric, hyperbolic, logarithmic and root functions.
pub trait Transcendental: Scalar {
    fn acos(self) -> Self;
    fn asin(self) -> Self;
    fn atan(self) -> Self;
    fn cos(self) -> Self;
    fn cosh(self) -> Self;
    fn sin(self) -> Self;
    fn sinh(self) -> Self;
    fn tan(self) -> Self;
    fn tanh(self) -> Self;
    /// Natural logarithm.
    fn log(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn sqrt(self) -> Self;
}

/// Gathers traits useful for working with the floating point domains.
pub trait Real:
    Scalar
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Metric<Length = Self>
    + Abs<Output = Self>
    + Rounding
    + Transcendental
    + Promote<Self, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const EPSILON: Self;
    const MIN: Self;
    const MAX: Self;
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;

    fn from_f64(value: f64) -> Self;

    fn is_nan(self) -> bool;
}

macro_rules! impl_real {
    ($f:ident) => {
        impl Scalar for $f {
            #[inline]
            fn hash_bits(&self) -> u64 {
                // Zero and negative zero compare equal
                if *self == 0.0 {
                    0
                } else {
                    u64::from(self.to_bits())
                }
            }
        }

        impl Metric for $f {
            type Length = Self;

            #[inline]
            fn magnitude_squared(self) -> Self {
                self * self
            }

            #[inline]
            fn magnitude(self) -> Self {
                $f::abs(self)
            }

            #[inline]
            fn sqrt_length(squared: Self) -> Self {
                f64::from(squared).sqrt() as $f
            }

            #[inline]
            fn magnitude_f64(self) -> f64 {
                f64::from($f::abs(self))
            }
        }

        impl Abs for $f {
            type Output = Self;

            #[inline]
            fn abs(self) -> Self {
                $f::abs(self)
            }
        }

        impl Rounding for $f {
            #[inline]
            fn floor(self) -> Self {
                $f::floor(self)
            }

            #[inline]
            fn ceiling(self) -> Self {
                $f::ceil(self)
            }

            #[inline]
            fn round(self) -> Self {
                $f::round_ties_even(self)
            }

            #[inline]
            fn truncate(self) -> Self {
                $f::trunc(self)
            }
        }

        impl Transcendental for $f {
            #[inline]
            fn acos(self) -> Self {
                $f::acos(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $f::asin(self)
            }

            #[inline]
            fn atan(self) -> Self {
                $f::atan(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $f::cos(self)
            }

            #[inline]
            fn cosh(self) -> Self {
                $f::cosh(self)
            }

            #[inline]
            fn sin(self) -> Self {
                $f::sin(self)
            }

            #[inline]
            fn sinh(self) -> Self {
                $f::sinh(self)
            }

            #[inline]
            fn tan(self) -> Self {
                $f::tan(self)
            }

            #[inline]
            fn tanh(self) -> Self {
                $f::tanh(self)
            }

            #[inline]
            fn log(self) -> Self {
                $f::ln(self)
            }

            #[inline]
            fn log2(self) -> Self {
                $f::log2(self)
            }

            #[inline]
            fn log10(self) -> Self {
                $f::log10(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $f::sqrt(self)
            }
        }

        impl Real for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const EPSILON: Self = $f::EPSILON;
            const MIN: Self = $f::MIN;
            const MAX: Self = $f::MAX;
            const NAN: Self = $f::NAN;
            const INFINITY: Self = $f::INFINITY;
            const NEG_INFINITY: Self = $f::NEG_INFINITY;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $f
            }

            #[inline]
            fn is_nan(self) -> bool {
                $f::is_nan(self)
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

// Half precision arithmetic goes through single precision.

impl Scalar for f16 {
    #[inline]
    fn hash_bits(&self) -> u64 {
        if *self == f16::ZERO {
            0
        } else {
            u64::from(self.to_bits())
        }
    }
}

impl Metric for f16 {
    type Length = Self;

    #[inline]
    fn magnitude_squared(self) -> Self {
        self * self
    }

    #[inline]
    fn magnitude(self) -> Self {
        half_abs(self)
    }

    #[inline]
    fn sqrt_length(squared: Self) -> Self {
        f16::from_f64(squared.to_f64().sqrt())
    }

    #[inline]
    fn magnitude_f64(self) -> f64 {
        half_abs(self).to_f64()
    }
}

impl Abs for f16 {
    type Output = Self;

    #[inline]
    fn abs(self) -> Self {
        half_abs(self)
    }
}

/// Clears the sign bit, which leaves NaN payloads untouched.
#[inline]
fn half_abs(value: f16) -> f16 {
    f16::from_bits(value.to_bits() & 0x7fff)
}

macro_rules! via_f32 {
    ($value:expr, $method:ident) => {
        f16::from_f32($value.to_f32().$method())
    };
}

impl Rounding for f16 {
    #[inline]
    fn floor(self) -> Self {
        via_f32!(self, floor)
    }

    #[inline]
    fn ceiling(self) -> Self {
        via_f32!(self, ceil)
    }

    #[inline]
    fn round(self) -> Self {
        via_f32!(self, round_ties_even)
    }

    #[inline]
    fn truncate(self) -> Self {
        via_f32!(self, trunc)
    }
}

impl Transcendental for f16 {
    #[inline]
    fn acos(self) -> Self {
        via_f32!(self, acos)
    }

    #[inline]
    fn asin(self) -> Self {
        via_f32!(self, asin)
    }

    #[inline]
    fn atan(self) -> Self {
        via_f32!(self, atan)
    }

    #[inline]
    fn cos(self) -> Self {
        via_f32!(self, cos)
    }

    #[inline]
    fn cosh(self) -> Self {
        via_f32!(self, cosh)
    }

    #[inline]
    fn sin(self) -> Self {
        via_f32!(self, sin)
    }

    #[inline]
    fn sinh(self) -> Self {
        via_f32!(self, sinh)
    }

    #[inline]
    fn tan(self) -> Self {
        via_f32!(self, tan)
    }

    #[inline]
    fn tanh(self) -> Self {
        via_f32!(self, tanh)
    }

    #[inline]
    fn log(self) -> Self {
        via_f32!(self, ln)
    }

    #[inline]
    fn log2(self) -> Self {
        via_f32!(self, log2)
    }

    #[inline]
    fn log10(self) -> Self {
        via_f32!(self, log10)
    }

    #[inline]
    fn sqrt(self) -> Self {
        via_f32!(self, sqrt)
    }
}

impl Real for f16 {
    const ZERO: Self = f16::ZERO;
    const ONE: Self = f16::ONE;
    const TWO: Self = f16::from_f32_const(2.0);
    const ONE_HALF: Self = f16::from_f32_const(0.5);
    const EPSILON: Self = f16::EPSILON;
    const MIN: Self = f16::MIN;
    const MAX: Self = f16::MAX;
    const NAN: Self = f16::NAN;
    const INFINITY: Self = f16::INFINITY;
    const NEG_INFINITY: Self = f16::NEG_INFINITY;

    #[inline]
    fn from_f64(value: f64) -> Self {
        f16::from_f64(value)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f16::is_nan(self)
    }
}

macro_rules! impl_integer {
    ($i:ty, $to_f64:expr, $abs:expr) => {
        impl Scalar for $i {
            #[inline]
            fn hash_bits(&self) -> u64 {
                i64::from(*self) as u64
            }
        }

        impl Metric for $i {
            type Length = f64;

            #[inline]
            fn magnitude_squared(self) -> f64 {
                let value: f64 = $to_f64(self);
                value * value
            }

            #[inline]
            fn magnitude(self) -> f64 {
                let value: f64 = $to_f64(self);
                value.abs()
            }

            #[inline]
            fn sqrt_length(squared: f64) -> f64 {
                squared.sqrt()
            }

            #[inline]
            fn magnitude_f64(self) -> f64 {
                self.magnitude()
            }
        }

        impl Abs for $i {
            type Output = Self;

            #[inline]
            fn abs(self) -> Self {
                $abs(self)
            }
        }
    };
}

impl_integer!(i32, f64::from, i32::abs);
impl_integer!(i64, |value: i64| value as f64, i64::abs);
impl_integer!(u32, f64::from, |value: u32| value);

impl Scalar for bool {
    #[inline]
    fn hash_bits(&self) -> u64 {
        u64::from(*self)
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn hash_bits(&self) -> u64 {
        self.re.hash_bits().wrapping_mul(397) ^ self.im.hash_bits()
    }
}

impl Metric for Complex64 {
    type Length = f64;

    #[inline]
    fn magnitude_squared(self) -> f64 {
        self.norm_sqr()
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn sqrt_length(squared: f64) -> f64 {
        squared.sqrt()
    }

    #[inline]
    fn magnitude_f64(self) -> f64 {
        self.norm()
    }
}

impl Abs for Complex64 {
    type Output = f64;

    #[inline]
    fn abs(self) -> f64 {
        self.norm()
    }
}

impl Transcendental for Complex64 {
    #[inline]
    fn acos(self) -> Self {
        Complex64::acos(self)
    }

    #[inline]
    fn asin(self) -> Self {
        Complex64::asin(self)
    }

    #[inline]
    fn atan(self) -> Self {
        Complex64::atan(self)
    }

    #[inline]
    fn cos(self) -> Self {
        Complex64::cos(self)
    }

    #[inline]
    fn cosh(self) -> Self {
        Complex64::cosh(self)
    }

    #[inline]
    fn sin(self) -> Self {
        Complex64::sin(self)
    }

    #[inline]
    fn sinh(self) -> Self {
        Complex64::sinh(self)
    }

    #[inline]
    fn tan(self) -> Self {
        Complex64::tan(self)
    }

    #[inline]
    fn tanh(self) -> Self {
        Complex64::tanh(self)
    }

    #[inline]
    fn log(self) -> Self {
        self.ln()
    }

    #[inline]
    fn log2(self) -> Self {
        Complex64::log(self, 2.0)
    }

    #[inline]
    fn log10(self) -> Self {
        Complex64::log(self, 10.0)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Complex64::sqrt(self)
    }
}

impl Scalar for Decimal {
    #[inline]
    fn hash_bits(&self) -> u64 {
        // `Decimal` hashes equal values with different scales identically
        let mut hasher = std::hash::DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Metric for Decimal {
    type Length = Self;

    #[inline]
    fn magnitude_squared(self) -> Self {
        self * self
    }

    #[inline]
    fn magnitude(self) -> Self {
        Decimal::abs(&self)
    }

    fn sqrt_length(squared: Self) -> Self {
        squared
            .to_f64()
            .and_then(|squared| Decimal::from_f64(squared.sqrt()))
            .unwrap_or_default()
    }

    #[inline]
    fn magnitude_f64(self) -> f64 {
        Decimal::abs(&self).to_f64().unwrap_or(f64::NAN)
    }
}

impl Abs for Decimal {
    type Output = Self;

    #[inline]
    fn abs(self) -> Self {
        Decimal::abs(&self)
    }
}

impl Rounding for Decimal {
    #[inline]
    fn floor(self) -> Self {
        Decimal::floor(&self)
    }

    #[inline]
    fn ceiling(self) -> Self {
        Decimal::ceil(&self)
    }

    #[inline]
    fn round(self) -> Self {
        // Banker's rounding is the default strategy
        Decimal::round(&self)
    }

    #[inline]
    fn truncate(self) -> Self {
        Decimal::trunc(&self)
    }
}

/// The sign of `value` as -1, 0 or 1. Unordered values (NaN) give 0.
#[inline]
pub fn sign<T: Scalar + PartialOrd>(value: T) -> i32 {
    let zero = T::default();
    if value > zero {
        1
    } else if value < zero {
        -1
    } else {
        0
    }
}

#[inline]
pub(crate) fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
pub(crate) fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}
