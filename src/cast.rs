//! Explicit conversions between scalar domains.
//!
//! Numeric casts truncate toward zero when narrowing a floating point value
//! to an integer. Values that the target domain cannot represent (NaN, or
//! out of range) become the target zero. Complex values contribute their
//! real part, and booleans map to one or zero and back.

use crate::num::Scalar;
use half::f16;
use num_complex::Complex64;
use num_traits::{FromPrimitive, NumCast, One};
use rust_decimal::Decimal;

/// Explicit conversion from the domain `U`.
pub trait CastFrom<U: Scalar>: Scalar {
    fn cast_from(value: U) -> Self;
}

impl<U: Scalar> CastFrom<U> for bool {
    #[inline]
    fn cast_from(value: U) -> Self {
        !value.is_zero()
    }
}

macro_rules! impl_casts_to_primitive {
    (@numeric $to:ty; $($from:ty),+) => {
        $(
            impl CastFrom<$from> for $to {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    <$to as NumCast>::from(value).unwrap_or_default()
                }
            }
        )+
    };
    ($to:ty) => {
        impl_casts_to_primitive!(@numeric $to; f16, f32, f64, i32, i64, u32, Decimal);

        impl CastFrom<Complex64> for $to {
            #[inline]
            fn cast_from(value: Complex64) -> Self {
                <$to as CastFrom<f64>>::cast_from(value.re)
            }
        }

        impl CastFrom<bool> for $to {
            #[inline]
            fn cast_from(value: bool) -> Self {
                if value { <$to>::one() } else { <$to>::default() }
            }
        }
    };
}

impl_casts_to_primitive!(f16);
impl_casts_to_primitive!(f32);
impl_casts_to_primitive!(f64);
impl_casts_to_primitive!(i32);
impl_casts_to_primitive!(i64);
impl_casts_to_primitive!(u32);

macro_rules! impl_casts_to_decimal {
    ($($from:ty => $convert:expr),+ $(,)?) => {
        $(
            impl CastFrom<$from> for Decimal {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    let convert: fn($from) -> Option<Decimal> = $convert;
                    convert(value).unwrap_or_default()
                }
            }
        )+
    };
}

impl_casts_to_decimal!(
    i32 => |value| Some(Decimal::from(value)),
    i64 => |value| Some(Decimal::from(value)),
    u32 => |value| Some(Decimal::from(value)),
    f16 => |value| Decimal::from_f32(value.to_f32()),
    f32 => Decimal::from_f32,
    f64 => Decimal::from_f64,
    Decimal => Some,
    Complex64 => |value| Decimal::from_f64(value.re),
    bool => |value| Some(if value { Decimal::ONE } else { Decimal::ZERO }),
);

macro_rules! impl_casts_to_complex {
    ($($from:ty),+) => {
        $(
            impl CastFrom<$from> for Complex64 {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    Complex64::new(<f64 as CastFrom<$from>>::cast_from(value), 0.0)
                }
            }
        )+
    };
}

impl_casts_to_complex!(f16, f32, f64, i32, i64, u32, Decimal, bool);

impl CastFrom<Complex64> for Complex64 {
    #[inline]
    fn cast_from(value: Complex64) -> Self {
        value
    }
}
