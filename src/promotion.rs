//! Mixed-domain arithmetic.
//!
//! Combining two vectors (or a vector and a scalar) of different domains
//! first brings both operands into a common result domain. The table below is
//! the full set of permitted pairings; everything else (including any pairing
//! with booleans) does not compile.
//!
//! | Narrow               | Wide                            |
//! |----------------------|---------------------------------|
//! | `i32`, `u32`         | `i64`, `f64`, `Complex64`, `Decimal` |
//! | `i64`                | `f64`, `Complex64`, `Decimal`   |
//! | `f16`                | `f32`, `f64`, `Complex64`       |
//! | `f32`                | `f64`, `Complex64`              |
//! | `f64`                | `Complex64`                     |
//!
//! The same pairings provide lossless-by-convention [`From`] conversions
//! from vectors of the narrow domain to vectors of the wide domain.

use crate::{
    cast::CastFrom,
    num::Scalar,
    vector::{Vector2, Vector3, Vector4},
};
use half::f16;
use num_complex::Complex64;
use rust_decimal::Decimal;

/// Brings `Self` and `Rhs` into the common domain [`Promote::Output`].
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    type Output: Scalar;

    fn promote_lhs(self) -> Self::Output;

    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

macro_rules! impl_identity_promotion {
    ($($t:ty),+) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                #[inline]
                fn promote_lhs(self) -> $t {
                    self
                }

                #[inline]
                fn promote_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )+
    };
}

macro_rules! impl_widening {
    (@vector $vector:ident, $narrow:ty, $wide:ty) => {
        impl From<$vector<$narrow>> for $vector<$wide> {
            #[inline]
            fn from(vector: $vector<$narrow>) -> Self {
                vector.cast()
            }
        }
    };
    ($($narrow:ty => $($wide:ty),+);+ $(;)?) => {
        $($(
            impl Promote<$wide> for $narrow {
                type Output = $wide;

                #[inline]
                fn promote_lhs(self) -> $wide {
                    <$wide as CastFrom<$narrow>>::cast_from(self)
                }

                #[inline]
                fn promote_rhs(rhs: $wide) -> $wide {
                    rhs
                }
            }

            impl Promote<$narrow> for $wide {
                type Output = $wide;

                #[inline]
                fn promote_lhs(self) -> $wide {
                    self
                }

                #[inline]
                fn promote_rhs(rhs: $narrow) -> $wide {
                    <$wide as CastFrom<$narrow>>::cast_from(rhs)
                }
            }

            impl_widening!(@vector Vector2, $narrow, $wide);
            impl_widening!(@vector Vector3, $narrow, $wide);
            impl_widening!(@vector Vector4, $narrow, $wide);
        )+)+
    };
}

impl_identity_promotion!(f16, f32, f64, i32, i64, u32, Complex64, Decimal);

impl_widening!(
    i32 => i64, f64, Complex64, Decimal;
    u32 => i64, f64, Complex64, Decimal;
    i64 => f64, Complex64, Decimal;
    f16 => f32, f64, Complex64;
    f32 => f64, Complex64;
    f64 => Complex64;
);
