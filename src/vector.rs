//! Vectors.

use crate::{
    cast::CastFrom,
    error::{MathError, Result},
    num::{self, Abs, Metric, Rounding, Scalar, Transcendental, partial_max, partial_min},
    text::{self, TextFormat},
};
use bytemuck::{Pod, Zeroable};
use half::f16;
use num_complex::Complex64;
use num_traits::{CheckedDiv, One, PrimInt, WrappingAdd, WrappingMul, WrappingSub};
use rust_decimal::Decimal;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Div, Index, IndexMut, Mul, Sub},
    str::FromStr,
};

/// A vector with a fixed number of components of one scalar domain.
pub trait Vector: Copy {
    type Scalar: Scalar;

    /// The number of components.
    const DIM: usize;

    /// Creates a vector whose component at each index is `f(index)`.
    fn from_fn(f: impl FnMut(usize) -> Self::Scalar) -> Self;

    /// The component at `index`, or [`None`] if `index` is not below
    /// [`Self::DIM`](Vector::DIM).
    fn component(&self, index: usize) -> Option<&Self::Scalar>;

    fn component_mut(&mut self, index: usize) -> Option<&mut Self::Scalar>;
}

macro_rules! define_vector {
    (
        $(#[$attributes:meta])*
        $name:ident, $dim:literal, [$($field:ident: $index:literal),+]
    ) => {
        $(#[$attributes])*
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name<T> {
            $(pub $field: T,)+
        }

        impl<T: Scalar> Vector for $name<T> {
            type Scalar = T;

            const DIM: usize = $dim;

            #[inline]
            fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
                Self {
                    $($field: f($index),)+
                }
            }

            #[inline]
            fn component(&self, index: usize) -> Option<&T> {
                match index {
                    $($index => Some(&self.$field),)+
                    _ => None,
                }
            }

            #[inline]
            fn component_mut(&mut self, index: usize) -> Option<&mut T> {
                match index {
                    $($index => Some(&mut self.$field),)+
                    _ => None,
                }
            }
        }

        impl<T: Scalar> $name<T> {
            pub const DIM: usize = $dim;

            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field,)+ }
            }

            /// Creates a vector with all components equal to the given value.
            #[inline]
            pub const fn splat(value: T) -> Self {
                Self {
                    $($field: value,)+
                }
            }

            /// Creates a vector with all components equal to the domain zero.
            #[inline]
            pub fn zero() -> Self {
                Self::default()
            }

            /// Whether all components equal the domain zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                $(self.$field.is_zero())&&+
            }

            /// Returns the component at `index`.
            ///
            /// # Errors
            /// Returns [`MathError::IndexOutOfRange`] unless `0 <= index < DIM`.
            pub fn get<I: PrimInt>(&self, index: I) -> Result<T> {
                index
                    .to_usize()
                    .and_then(|idx| self.component(idx))
                    .copied()
                    .ok_or_else(|| MathError::index_out_of_range(index, $dim))
            }

            /// Replaces the component at `index`.
            ///
            /// # Errors
            /// Returns [`MathError::IndexOutOfRange`] unless `0 <= index < DIM`.
            pub fn set<I: PrimInt>(&mut self, index: I, value: T) -> Result<()> {
                let component = index
                    .to_usize()
                    .and_then(|idx| self.component_mut(idx))
                    .ok_or_else(|| MathError::index_out_of_range(index, $dim))?;
                *component = value;
                Ok(())
            }

            #[inline]
            pub const fn to_array(&self) -> [T; $dim] {
                [$(self.$field),+]
            }

            /// Iterates over the components in index order.
            #[inline]
            pub fn iter(&self) -> std::array::IntoIter<T, $dim> {
                self.to_array().into_iter()
            }

            /// Applies `f` to each component.
            #[inline]
            pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name {
                    $($field: f(self.$field),)+
                }
            }

            /// Applies `f` to each pair of corresponding components.
            #[inline]
            pub fn zip_map<U: Scalar, R: Scalar>(
                &self,
                other: &$name<U>,
                mut f: impl FnMut(T, U) -> R,
            ) -> $name<R> {
                $name {
                    $($field: f(self.$field, other.$field),)+
                }
            }

            /// Converts each component explicitly to the domain `U`.
            #[inline]
            pub fn cast<U: CastFrom<T>>(&self) -> $name<U> {
                self.mapped(<U as CastFrom<T>>::cast_from)
            }

            /// Converts to a vector of another dimension, dropping surplus
            /// components and filling missing ones with zero.
            pub fn resized<V: Vector<Scalar = T>>(&self) -> V {
                V::from_fn(|idx| self.component(idx).copied().unwrap_or_default())
            }

            /// Whether each component equals the corresponding component of
            /// `rhs`.
            pub fn equal(&self, rhs: impl Into<Self>) -> $name<bool> {
                self.zip_map(&rhs.into(), |a, b| a == b)
            }

            pub fn not_equal(&self, rhs: impl Into<Self>) -> $name<bool> {
                self.zip_map(&rhs.into(), |a, b| a != b)
            }

            /// Computes a hash from all components. Equal vectors give equal
            /// hashes.
            pub fn combined_hash(&self) -> u64 {
                let mut hash = 0_u64;
                $(hash = hash.wrapping_mul(397) ^ self.$field.hash_bits();)+
                hash
            }

            pub fn to_string_with(&self, format: &TextFormat) -> String {
                text::format_components(self.iter(), format)
            }

            /// Parses a vector from components separated by `", "`.
            ///
            /// # Errors
            /// See [`Self::parse_with`].
            pub fn parse(input: &str) -> Result<Self> {
                Self::parse_with(Some(input), &TextFormat::default())
            }

            /// Parses a vector from text in the given format.
            ///
            /// # Errors
            /// Returns [`MathError::NullInput`] if `input` is [`None`], and
            /// [`MathError::Format`] if the text does not hold exactly `DIM`
            /// valid components.
            pub fn parse_with(input: Option<&str>, format: &TextFormat) -> Result<Self> {
                text::parse_components::<T, $dim>(input, format).map(Self::from)
            }

            /// Like [`Self::parse`], but gives [`None`] on any failure.
            pub fn try_parse(input: Option<&str>) -> Option<Self> {
                Self::try_parse_with(input, &TextFormat::default())
            }

            pub fn try_parse_with(input: Option<&str>, format: &TextFormat) -> Option<Self> {
                match Self::parse_with(input, format) {
                    Ok(vector) => Some(vector),
                    Err(error) => {
                        log::debug!("Could not parse {}: {error}", stringify!($name));
                        None
                    }
                }
            }
        }

        impl<T: Scalar + One> $name<T> {
            /// Creates a vector with all components equal to one.
            #[inline]
            pub fn ones() -> Self {
                Self::splat(T::one())
            }
        }

        /// Component-wise comparisons against a vector or a scalar broadcast
        /// to every component. A comparison with the scalar on the left is
        /// the mirrored method, so `s < v` is `v.greater_than(s)`.
        impl<T: Scalar + PartialOrd> $name<T> {
            pub fn less_than(&self, rhs: impl Into<Self>) -> $name<bool> {
                self.zip_map(&rhs.into(), |a, b| a < b)
            }

            pub fn less_than_equal(&self, rhs: impl Into<Self>) -> $name<bool> {
                self.zip_map(&rhs.into(), |a, b| a <= b)
            }

            pub fn greater_than(&self, rhs: impl Into<Self>) -> $name<bool> {
                self.zip_map(&rhs.into(), |a, b| a > b)
            }

            pub fn greater_than_equal(&self, rhs: impl Into<Self>) -> $name<bool> {
                self.zip_map(&rhs.into(), |a, b| a >= b)
            }

            /// The smallest component.
            #[inline]
            pub fn min_element(&self) -> T {
                reduce_fields!(partial_min; $(self.$field),+)
            }

            /// The largest component.
            #[inline]
            pub fn max_element(&self) -> T {
                reduce_fields!(partial_max; $(self.$field),+)
            }

            /// Computes the componentwise minimum of two vectors.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                self.zip_map(other, partial_min)
            }

            /// Computes the componentwise maximum of two vectors.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                self.zip_map(other, partial_max)
            }

            /// Restricts each component to the range given by the
            /// corresponding components of `min` and `max`.
            #[inline]
            pub fn clamped(&self, min: &Self, max: &Self) -> Self {
                self.component_max(min).component_min(max)
            }
        }

        impl<T: Scalar + Add<Output = T>> $name<T> {
            /// The sum of all components.
            #[inline]
            pub fn sum(&self) -> T {
                reduce_fields!(Add::add; $(self.$field),+)
            }
        }

        impl<T: Scalar + Add<Output = T> + Mul<Output = T>> $name<T> {
            /// Computes the dot product of two vectors.
            #[inline]
            pub fn dot(lhs: &Self, rhs: &Self) -> T {
                reduce_fields!(Add::add; $(lhs.$field * rhs.$field),+)
            }

            /// Squares each component.
            #[inline]
            pub fn squared(&self) -> Self {
                self.mapped(|c| c * c)
            }
        }

        impl<T: Metric> $name<T> {
            /// The squared Euclidean length, computed in the length domain.
            #[inline]
            pub fn length_squared(&self) -> T::Length {
                reduce_fields!(Add::add; $(self.$field.magnitude_squared()),+)
            }

            /// The Euclidean length. The square root is taken in double
            /// precision and narrowed back to the length domain.
            #[inline]
            pub fn length(&self) -> T::Length {
                T::sqrt_length(self.length_squared())
            }

            #[inline]
            pub fn norm(&self) -> T::Length {
                self.length()
            }

            /// The sum of component magnitudes.
            #[inline]
            pub fn norm1(&self) -> T::Length {
                reduce_fields!(Add::add; $(self.$field.magnitude()),+)
            }

            /// The largest component magnitude.
            #[inline]
            pub fn norm_inf(&self) -> T::Length {
                reduce_fields!(partial_max; $(self.$field.magnitude()),+)
            }

            /// The `p`-norm, computed in double precision.
            pub fn norm_p(&self, p: f64) -> f64 {
                reduce_fields!(Add::add; $(self.$field.magnitude_f64().powf(p)),+).powf(p.recip())
            }

            /// The sign of each component as -1, 0 or 1.
            pub fn sign(&self) -> $name<i32>
            where
                T: PartialOrd,
            {
                self.mapped(num::sign)
            }
        }

        impl<T: Metric + Sub<Output = T>> $name<T> {
            #[inline]
            pub fn distance_squared(lhs: &Self, rhs: &Self) -> T::Length {
                lhs.zip_map(rhs, Sub::sub).length_squared()
            }

            #[inline]
            pub fn distance(lhs: &Self, rhs: &Self) -> T::Length {
                lhs.zip_map(rhs, Sub::sub).length()
            }
        }

        impl<T: Metric<Length = T> + Div<Output = T>> $name<T> {
            /// Divides the vector by its length. A zero vector gives NaN
            /// components for the floating point domains and panics for
            /// [`Decimal`].
            #[inline]
            pub fn normalized(&self) -> Self {
                let length = self.length();
                self.mapped(|c| c / length)
            }

            /// Like [`Self::normalized`], but a zero vector gives a zero vector.
            #[inline]
            pub fn normalized_safe(&self) -> Self {
                if self.is_zero() {
                    Self::zero()
                } else {
                    self.normalized()
                }
            }
        }

        impl<T: $crate::num::Real> $name<T> {
            #[inline]
            pub fn nan() -> Self {
                Self::splat(T::NAN)
            }

            #[inline]
            pub fn infinity() -> Self {
                Self::splat(T::INFINITY)
            }

            #[inline]
            pub fn neg_infinity() -> Self {
                Self::splat(T::NEG_INFINITY)
            }

            #[inline]
            pub fn min_value() -> Self {
                Self::splat(T::MIN)
            }

            #[inline]
            pub fn max_value() -> Self {
                Self::splat(T::MAX)
            }

            #[inline]
            pub fn epsilon() -> Self {
                Self::splat(T::EPSILON)
            }

            /// Whether each component is NaN.
            #[inline]
            pub fn is_nan(&self) -> $name<bool> {
                self.mapped(T::is_nan)
            }

            /// Linearly interpolates between `self` (at `t = 0`) and `other`
            /// (at `t = 1`).
            #[inline]
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                self.zip_map(other, |a, b| a + (b - a) * t)
            }
        }

        impl<T: Abs> $name<T> {
            #[inline]
            pub fn abs(&self) -> $name<<T as Abs>::Output> {
                self.mapped(Abs::abs)
            }
        }

        impl<T: Rounding> $name<T> {
            #[inline]
            pub fn floor(&self) -> Self {
                self.mapped(Rounding::floor)
            }

            #[inline]
            pub fn ceiling(&self) -> Self {
                self.mapped(Rounding::ceiling)
            }

            /// Rounds each component, with half-way cases going to the
            /// nearest even value.
            #[inline]
            pub fn round(&self) -> Self {
                self.mapped(Rounding::round)
            }

            #[inline]
            pub fn truncate(&self) -> Self {
                self.mapped(Rounding::truncate)
            }
        }

        impl<T: Transcendental> $name<T> {
            #[inline]
            pub fn acos(&self) -> Self {
                self.mapped(Transcendental::acos)
            }

            #[inline]
            pub fn asin(&self) -> Self {
                self.mapped(Transcendental::asin)
            }

            #[inline]
            pub fn atan(&self) -> Self {
                self.mapped(Transcendental::atan)
            }

            #[inline]
            pub fn cos(&self) -> Self {
                self.mapped(Transcendental::cos)
            }

            #[inline]
            pub fn cosh(&self) -> Self {
                self.mapped(Transcendental::cosh)
            }

            #[inline]
            pub fn sin(&self) -> Self {
                self.mapped(Transcendental::sin)
            }

            #[inline]
            pub fn sinh(&self) -> Self {
                self.mapped(Transcendental::sinh)
            }

            #[inline]
            pub fn tan(&self) -> Self {
                self.mapped(Transcendental::tan)
            }

            #[inline]
            pub fn tanh(&self) -> Self {
                self.mapped(Transcendental::tanh)
            }

            /// The natural logarithm of each component.
            #[inline]
            pub fn log(&self) -> Self {
                self.mapped(Transcendental::log)
            }

            #[inline]
            pub fn log2(&self) -> Self {
                self.mapped(Transcendental::log2)
            }

            #[inline]
            pub fn log10(&self) -> Self {
                self.mapped(Transcendental::log10)
            }

            #[inline]
            pub fn sqrt(&self) -> Self {
                self.mapped(Transcendental::sqrt)
            }
        }

        impl<T: Scalar + WrappingAdd + WrappingSub + WrappingMul> $name<T> {
            /// Adds componentwise, wrapping around on integer overflow in
            /// every build profile.
            #[inline]
            pub fn wrapping_add(&self, rhs: impl Into<Self>) -> Self {
                self.zip_map(&rhs.into(), |a, b| WrappingAdd::wrapping_add(&a, &b))
            }

            #[inline]
            pub fn wrapping_sub(&self, rhs: impl Into<Self>) -> Self {
                self.zip_map(&rhs.into(), |a, b| WrappingSub::wrapping_sub(&a, &b))
            }

            #[inline]
            pub fn wrapping_mul(&self, rhs: impl Into<Self>) -> Self {
                self.zip_map(&rhs.into(), |a, b| WrappingMul::wrapping_mul(&a, &b))
            }
        }

        impl<T: Scalar + CheckedDiv> $name<T> {
            /// Divides componentwise by `rhs` (a vector or a scalar).
            ///
            /// Integer `+`, `-` and `*` follow Rust's native overflow rules
            /// (a panic with debug assertions, wrapping without); use the
            /// `wrapping_*` methods for wrapping in every profile.
            ///
            /// # Errors
            /// Returns [`MathError::DivideByZero`] if any divisor component is
            /// zero, and [`MathError::Overflow`] if a quotient does not fit the
            /// domain.
            pub fn checked_div(&self, rhs: impl Into<Self>) -> Result<Self> {
                let rhs = rhs.into();
                Ok(Self {
                    $($field: checked_component_div(self.$field, rhs.$field)?,)+
                })
            }
        }

        impl $name<bool> {
            /// Whether any component is `true`.
            #[inline]
            pub fn any(&self) -> bool {
                $(self.$field)||+
            }

            /// Whether all components are `true`.
            #[inline]
            pub fn all(&self) -> bool {
                $(self.$field)&&+
            }
        }

        impl<T: Pod> $name<T> {
            /// Views the components as an array without copying.
            #[inline]
            pub fn as_array(&self) -> &[T; $dim] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [T; $dim] {
                bytemuck::cast_mut(self)
            }
        }

        // SAFETY: The type is `repr(C)` with only fields of type `T`, so it has
        // no padding and is zeroable whenever `T` is
        unsafe impl<T: Zeroable> Zeroable for $name<T> {}

        // SAFETY: As above, every bit pattern is valid whenever it is for `T`
        unsafe impl<T: Pod> Pod for $name<T> {}

        impl<T: Scalar> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64(self.combined_hash());
            }
        }

        impl<T: Scalar> From<[T; $dim]> for $name<T> {
            #[inline]
            fn from([$($field),+]: [T; $dim]) -> Self {
                Self { $($field,)+ }
            }
        }

        impl<T: Scalar> From<$name<T>> for [T; $dim] {
            #[inline]
            fn from(vector: $name<T>) -> Self {
                vector.to_array()
            }
        }

        impl<T: Scalar> From<T> for $name<T> {
            #[inline]
            fn from(value: T) -> Self {
                Self::splat(value)
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match self.component(index) {
                    Some(component) => component,
                    None => panic!("index {index} out of bounds for {}", stringify!($name)),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match self.component_mut(index) {
                    Some(component) => component,
                    None => panic!("index {index} out of bounds for {}", stringify!($name)),
                }
            }
        }

        impl<T: Scalar> IntoIterator for $name<T> {
            type Item = T;
            type IntoIter = std::array::IntoIter<T, $dim>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<T: Scalar> IntoIterator for &$name<T> {
            type Item = T;
            type IntoIter = std::array::IntoIter<T, $dim>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                text::write_components(f, self.iter())
            }
        }

        impl<T: Scalar> FromStr for $name<T> {
            type Err = MathError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl_elementwise_binop!($name, Add, add, AddAssign, add_assign);
        impl_elementwise_binop!($name, Sub, sub, SubAssign, sub_assign);
        impl_elementwise_binop!($name, Mul, mul, MulAssign, mul_assign);
        impl_elementwise_binop!($name, Div, div, DivAssign, div_assign);
        impl_elementwise_binop!($name, Rem, rem, RemAssign, rem_assign);

        impl_same_domain_binop!($name, BitAnd, bitand, BitAndAssign, bitand_assign);
        impl_same_domain_binop!($name, BitOr, bitor, BitOrAssign, bitor_assign);
        impl_same_domain_binop!($name, BitXor, bitxor, BitXorAssign, bitxor_assign);

        impl_unary_op!($name, Neg, neg);
        impl_unary_op!($name, Not, not);

        impl_approx_eq!($name<T>, [$($field),+]);
    };
}

define_vector!(
    /// A 2-dimensional vector.
    Vector2, 2, [x: 0, y: 1]
);

define_vector!(
    /// A 3-dimensional vector.
    Vector3, 3, [x: 0, y: 1, z: 2]
);

define_vector!(
    /// A 4-dimensional vector.
    Vector4, 4, [x: 0, y: 1, z: 2, w: 3]
);

fn checked_component_div<T: Scalar + CheckedDiv>(lhs: T, rhs: T) -> Result<T> {
    match CheckedDiv::checked_div(&lhs, &rhs) {
        Some(quotient) => Ok(quotient),
        None if rhs.is_zero() => Err(MathError::DivideByZero),
        None => Err(MathError::Overflow),
    }
}

impl<T: Scalar + One> Vector2<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::default())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::default(), T::one())
    }
}

impl<T: Scalar> Vector2<T> {
    /// Creates a 3D vector with `z` appended.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    #[inline]
    pub const fn yx(&self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl<T: Scalar + One> Vector3<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::default(), T::default())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::default(), T::one(), T::default())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::default(), T::default(), T::one())
    }
}

impl<T: Scalar> Vector3<T> {
    /// Creates a 4D vector with `w` appended.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub const fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub const fn xz(&self) -> Vector2<T> {
        Vector2::new(self.x, self.z)
    }

    #[inline]
    pub const fn yz(&self) -> Vector2<T> {
        Vector2::new(self.y, self.z)
    }

    #[inline]
    pub const fn zyx(&self) -> Self {
        Self::new(self.z, self.y, self.x)
    }

    #[inline]
    pub const fn yzx(&self) -> Self {
        Self::new(self.y, self.z, self.x)
    }

    #[inline]
    pub const fn zxy(&self) -> Self {
        Self::new(self.z, self.x, self.y)
    }
}

impl<T: Scalar + Mul<Output = T> + Sub<Output = T>> Vector3<T> {
    /// Computes the cross product of two vectors.
    #[inline]
    pub fn cross(lhs: &Self, rhs: &Self) -> Self {
        Self::new(
            lhs.y * rhs.z - lhs.z * rhs.y,
            lhs.z * rhs.x - lhs.x * rhs.z,
            lhs.x * rhs.y - lhs.y * rhs.x,
        )
    }
}

impl<T: Scalar + One> Vector4<T> {
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::default(), T::default(), T::default())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::default(), T::one(), T::default(), T::default())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::default(), T::default(), T::one(), T::default())
    }

    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::default(), T::default(), T::default(), T::one())
    }
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub const fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub const fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub const fn wzyx(&self) -> Self {
        Self::new(self.w, self.z, self.y, self.x)
    }
}

macro_rules! define_vector_aliases {
    ($($prefix:ident => $t:ty, $domain:literal);+ $(;)?) => {
        pastey::paste! {
            $(
                #[doc = concat!("A 2-dimensional vector of ", $domain, ".")]
                pub type [<$prefix 2>] = Vector2<$t>;
                #[doc = concat!("A 3-dimensional vector of ", $domain, ".")]
                pub type [<$prefix 3>] = Vector3<$t>;
                #[doc = concat!("A 4-dimensional vector of ", $domain, ".")]
                pub type [<$prefix 4>] = Vector4<$t>;
            )+
        }
    };
}

define_vector_aliases!(
    Vec => f32, "single precision floats";
    DVec => f64, "double precision floats";
    HVec => f16, "half precision floats";
    IVec => i32, "32-bit signed integers";
    LVec => i64, "64-bit signed integers";
    UVec => u32, "32-bit unsigned integers";
    BVec => bool, "booleans";
    CVec => Complex64, "double precision complex numbers";
    DecVec => Decimal, "decimal numbers";
);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    const EPSILON: f64 = 1e-12;

    // === Construction and Access ===

    #[test]
    fn creating_vector3_with_new_sets_components() {
        let v = IVec3::new(1, -2, 3);
        assert_eq!(v.x, 1);
        assert_eq!(v.y, -2);
        assert_eq!(v.z, 3);
        assert_eq!(v.to_array(), [1, -2, 3]);
    }

    #[test]
    fn zero_vector_has_domain_zero_components() {
        assert_eq!(DVec4::zero(), DVec4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(BVec2::zero(), BVec2::new(false, false));
        assert_eq!(CVec3::zero().x, Complex64::new(0.0, 0.0));
        assert!(DecVec2::zero().is_zero());
    }

    #[test]
    fn unit_vectors_have_single_one() {
        assert_eq!(UVec3::unit_y(), UVec3::new(0, 1, 0));
        assert_eq!(DVec4::unit_w(), DVec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Vec2::ones(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn getting_components_by_index_works() {
        let v = DVec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.get(0), Ok(1.0));
        assert_eq!(v.get(3_u8), Ok(4.0));
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn getting_components_out_of_range_fails() {
        let v = DVec4::new(1.0, 2.0, 3.0, 4.0);
        for index in [i32::MIN, -1, 4, 5, i32::MAX] {
            assert_eq!(
                v.get(index),
                Err(MathError::IndexOutOfRange {
                    index: i128::from(index),
                    dimension: 4
                })
            );
        }
        assert!(v.get(i64::MIN).is_err());
        assert!(v.get(u64::MAX).is_err());
    }

    #[test]
    fn setting_components_by_index_works() {
        let mut v = IVec2::new(1, 2);
        v.set(1, 7).unwrap();
        assert_eq!(v, IVec2::new(1, 7));
        assert!(v.set(2, 0).is_err());
        assert!(v.set(-1_i64, 0).is_err());
        assert_eq!(v, IVec2::new(1, 7));
    }

    #[test]
    #[should_panic]
    fn indexing_vector3_out_of_bounds_panics() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn iterating_vector_visits_components_in_order() {
        let v = LVec3::new(5, 6, 7);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![5, 6, 7]);
        assert_eq!(v.into_iter().sum::<i64>(), 18);
        // Iteration restarts
        assert_eq!((&v).into_iter().count(), 3);
        assert_eq!((&v).into_iter().count(), 3);
    }

    #[test]
    fn vector_as_array_views_components() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        v.as_array_mut()[1] = 5.0;
        assert_eq!(v.y, 5.0);
    }

    // === Resizing and Swizzles ===

    #[test]
    fn resizing_to_higher_dimension_fills_zero() {
        let v = IVec2::new(3, 4);
        let w: IVec4 = v.resized();
        assert_eq!(w, IVec4::new(3, 4, 0, 0));
    }

    #[test]
    fn resizing_to_lower_dimension_drops_components() {
        let v = DVec4::new(1.0, 2.0, 3.0, 4.0);
        let w: DVec2 = v.resized();
        assert_eq!(w, DVec2::new(1.0, 2.0));
    }

    #[test]
    fn named_swizzles_reorder_components() {
        let v = IVec3::new(1, 2, 3);
        assert_eq!(v.zyx(), IVec3::new(3, 2, 1));
        assert_eq!(v.yzx(), IVec3::new(2, 3, 1));
        assert_eq!(v.xz(), IVec2::new(1, 3));
        assert_eq!(v.xy().yx(), IVec2::new(2, 1));
        assert_eq!(v.extended(4).wzyx(), IVec4::new(4, 3, 2, 1));
    }

    // === Arithmetic ===

    #[test]
    fn adding_vectors_of_same_domain_works() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, DVec3::new(1.5, 1.0, 5.0));
        assert_eq!(&a + &b, DVec3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, DVec3::new(0.5, 3.0, 1.0));
        assert_eq!(a * b, DVec3::new(0.5, -2.0, 6.0));
    }

    #[test]
    fn adding_integer_and_double_vectors_promotes_to_double() {
        let a = IVec3::new(1, 2, 3);
        let b = DVec3::new(0.5, 0.5, 0.5);
        let sum: DVec3 = a + b;
        assert_eq!(sum, DVec3::new(1.5, 2.5, 3.5));
        let sum: DVec3 = b + a;
        assert_eq!(sum, DVec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn multiplying_half_vector_by_single_scalar_promotes_to_single() {
        let a = HVec2::new(f16::from_f32(2.0), f16::from_f32(-0.5));
        let product: Vec2 = a * 4.0_f32;
        assert_eq!(product, Vec2::new(8.0, -2.0));
    }

    #[test]
    fn scalar_on_left_broadcasts() {
        let v = IVec2::new(2, 3);
        assert_eq!(10_i32 - v, IVec2::new(8, 7));
        let scaled: DVec2 = 0.5_f64 * v;
        assert_eq!(scaled, DVec2::new(1.0, 1.5));
    }

    #[test]
    fn complex_vectors_mix_with_real_scalars() {
        let v = CVec2::new(Complex64::new(1.0, 1.0), Complex64::new(0.0, -2.0));
        let scaled = v * 2.0_f64;
        assert_eq!(scaled.x, Complex64::new(2.0, 2.0));
        assert_eq!(scaled.y, Complex64::new(0.0, -4.0));
    }

    #[test]
    fn decimal_vectors_add_exactly() {
        let a = DecVec2::new(Decimal::new(1, 1), Decimal::new(2, 1));
        let b = DecVec2::new(Decimal::new(2, 1), Decimal::new(1, 1));
        assert_eq!(a + b, DecVec2::splat(Decimal::new(3, 1)));
        let promoted: DecVec2 = a + IVec2::new(1, 2);
        assert_eq!(promoted, DecVec2::new(Decimal::new(11, 1), Decimal::new(22, 1)));
    }

    #[test]
    fn compound_assignment_keeps_domain() {
        let mut v = DVec2::new(1.0, 2.0);
        v += IVec2::new(1, 1);
        v *= 2.0_f64;
        v -= 1_i32;
        assert_eq!(v, DVec2::new(3.0, 5.0));
    }

    #[test]
    fn negating_vector_negates_components() {
        assert_eq!(-IVec3::new(1, -2, 0), IVec3::new(-1, 2, 0));
        assert_eq!(-&DVec2::new(1.5, 0.0), DVec2::new(-1.5, -0.0));
    }

    #[test]
    fn integer_division_by_zero_is_reported() {
        let v = IVec2::new(4, 6);
        assert_eq!(v.checked_div(2), Ok(IVec2::new(2, 3)));
        assert_eq!(v.checked_div(IVec2::new(1, 0)), Err(MathError::DivideByZero));
        assert_eq!(
            IVec2::new(i32::MIN, 0).checked_div(-1),
            Err(MathError::Overflow)
        );
        assert_eq!(
            DecVec2::splat(Decimal::ONE).checked_div(Decimal::ZERO),
            Err(MathError::DivideByZero)
        );
    }

    #[test]
    fn wrapping_integer_arithmetic_wraps_on_overflow() {
        let v = IVec2::new(i32::MAX, 1);
        assert_eq!(v.wrapping_add(1), IVec2::new(i32::MIN, 2));
        assert_eq!(
            IVec2::new(i32::MIN, 0).wrapping_sub(IVec2::new(1, 1)),
            IVec2::new(i32::MAX, -1)
        );
        assert_eq!(
            UVec2::new(u32::MAX, 3).wrapping_mul(2_u32),
            UVec2::new(u32::MAX - 1, 6)
        );
    }

    #[test]
    fn float_division_by_zero_gives_infinity() {
        let v = DVec2::new(1.0, -1.0) / 0.0_f64;
        assert_eq!(v, DVec2::new(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero_operator_panics() {
        let divisor = std::hint::black_box(IVec2::new(1, 0));
        let _ = IVec2::new(1, 1) / divisor;
    }

    // === Norms and Products ===

    #[test]
    fn computing_vector3_length_works() {
        let v = DVec3::new(2.0, 3.0, 6.0);
        assert_abs_diff_eq!(v.length_squared(), 49.0);
        assert_abs_diff_eq!(v.length(), 7.0);
        assert_abs_diff_eq!(v.norm(), 7.0);
    }

    #[test]
    fn integer_vector_length_is_double() {
        let v = IVec2::new(3, -4);
        let length: f64 = v.length();
        assert_abs_diff_eq!(length, 5.0);
        assert_abs_diff_eq!(v.norm1(), 7.0);
        assert_abs_diff_eq!(v.norm_inf(), 4.0);
    }

    #[test]
    fn single_precision_length_is_rounded_from_double() {
        let v = Vec2::new(1.0, 1.0);
        assert_eq!(v.length(), 2.0_f64.sqrt() as f32);
    }

    #[test]
    fn complex_vector_length_uses_moduli() {
        let v = CVec2::new(Complex64::new(3.0, 4.0), Complex64::new(0.0, 0.0));
        assert_abs_diff_eq!(v.length(), 5.0);
    }

    #[test]
    fn computing_p_norm_matches_special_cases() {
        let v = DVec3::new(1.0, -2.0, 2.0);
        assert_abs_diff_eq!(v.norm_p(1.0), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_p(2.0), 3.0, epsilon = EPSILON);
    }

    #[test]
    fn computing_dot_product_works() {
        let a = IVec3::new(1, 2, 3);
        let b = IVec3::new(4, -5, 6);
        assert_eq!(IVec3::dot(&a, &b), 12);
    }

    #[test]
    fn vector3_cross_product_is_anticommutative() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(-2.0, 0.5, 4.0);
        assert_eq!(DVec3::cross(&a, &b), -DVec3::cross(&b, &a));
        assert_eq!(
            IVec3::cross(&IVec3::unit_x(), &IVec3::unit_y()),
            IVec3::unit_z()
        );
    }

    #[test]
    fn computing_distance_works() {
        let a = DVec2::new(1.0, 1.0);
        let b = DVec2::new(4.0, 5.0);
        assert_abs_diff_eq!(DVec2::distance(&a, &b), 5.0);
        assert_abs_diff_eq!(DVec2::distance_squared(&a, &b), 25.0);
    }

    #[test]
    fn normalizing_vector3_gives_unit_length() {
        let v = DVec3::new(3.0, 0.0, 4.0).normalized();
        assert_abs_diff_eq!(v, DVec3::new(0.6, 0.0, 0.8), epsilon = EPSILON);
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector2_gives_nan() {
        assert!(Vec2::zero().normalized().is_nan().all());
    }

    #[test]
    fn safely_normalizing_zero_vector_gives_zero() {
        assert_eq!(DVec3::zero().normalized_safe(), DVec3::zero());
        assert_abs_diff_eq!(
            DVec2::new(0.0, -2.0).normalized_safe(),
            DVec2::new(0.0, -1.0)
        );
    }

    #[test]
    #[should_panic]
    fn normalizing_zero_decimal_vector_panics() {
        let _ = DecVec2::zero().normalized();
    }

    // === Elementwise Functions ===

    #[test]
    fn sign_of_vector_is_integer_vector() {
        assert_eq!(DVec3::new(-2.5, 0.0, 7.0).sign(), IVec3::new(-1, 0, 1));
        assert_eq!(DVec2::new(f64::NAN, -0.0).sign(), IVec2::new(0, 0));
    }

    #[test]
    fn abs_of_complex_vector_is_double_vector() {
        let v = CVec2::new(Complex64::new(0.0, -3.0), Complex64::new(1.0, 0.0));
        assert_eq!(v.abs(), DVec2::new(3.0, 1.0));
    }

    #[test]
    fn abs_and_norms_of_half_vector_work() {
        let v = HVec2::new(f16::from_f32(-1.5), f16::from_f32(2.0));
        assert_eq!(v.abs(), HVec2::new(f16::from_f32(1.5), f16::from_f32(2.0)));
        assert_eq!(v.norm1(), f16::from_f32(3.5));
        assert_eq!(v.norm_inf(), f16::from_f32(2.0));
        assert_abs_diff_eq!(v.norm_p(1.0), 3.5, epsilon = EPSILON);
        assert_eq!(v.length_squared(), f16::from_f32(6.25));
        assert_eq!(v.length(), f16::from_f32(2.5));
    }

    macro_rules! test_reductions_for_domains {
        ($($test:ident: $vec:ident, $scalar:expr, $length_to_f64:expr;)+) => {
            $(
                #[test]
                fn $test() {
                    let v = $vec::new(($scalar)(3), ($scalar)(4));
                    assert_abs_diff_eq!(($length_to_f64)(v.length()), 5.0, epsilon = 1e-6);
                    assert_abs_diff_eq!(($length_to_f64)(v.length_squared()), 25.0, epsilon = 1e-6);
                    assert_abs_diff_eq!(($length_to_f64)(v.norm1()), 7.0, epsilon = 1e-6);
                    assert_abs_diff_eq!(($length_to_f64)(v.norm_inf()), 4.0, epsilon = 1e-6);
                    assert_abs_diff_eq!(v.norm_p(2.0), 5.0, epsilon = 1e-6);
                }
            )+
        };
    }

    test_reductions_for_domains!(
        reductions_of_single_vector_work: Vec2, |v: i32| v as f32, |length: f32| f64::from(length);
        reductions_of_double_vector_work: DVec2, |v: i32| f64::from(v), |length: f64| length;
        reductions_of_half_vector_work: HVec2, |v: i32| f16::from_f32(v as f32), |length: f16| length.to_f64();
        reductions_of_int_vector_work: IVec2, |v: i32| v, |length: f64| length;
        reductions_of_long_vector_work: LVec2, |v: i32| i64::from(v), |length: f64| length;
        reductions_of_unsigned_vector_work: UVec2, |v: i32| v.unsigned_abs(), |length: f64| length;
        reductions_of_complex_vector_work: CVec2, |v: i32| Complex64::new(0.0, f64::from(v)), |length: f64| length;
        reductions_of_decimal_vector_work: DecVec2, |v: i32| Decimal::from(v), |length: Decimal| {
            rust_decimal::prelude::ToPrimitive::to_f64(&length).unwrap()
        };
    );

    #[test]
    fn rounding_vector_rounds_each_component() {
        let v = DVec4::new(0.5, 1.5, -2.5, 2.7);
        assert_eq!(v.round(), DVec4::new(0.0, 2.0, -2.0, 3.0));
        assert_eq!(v.floor(), DVec4::new(0.0, 1.0, -3.0, 2.0));
        assert_eq!(v.ceiling(), DVec4::new(1.0, 2.0, -2.0, 3.0));
        assert_eq!(v.truncate(), DVec4::new(0.0, 1.0, -2.0, 2.0));
    }

    #[test]
    fn transcendental_functions_apply_per_component() {
        let v = DVec2::new(0.0, 1.0);
        assert_abs_diff_eq!(v.sin(), DVec2::new(0.0, 1.0_f64.sin()));
        assert_abs_diff_eq!(DVec2::new(1.0, 100.0).log10(), DVec2::new(0.0, 2.0));
        assert_abs_diff_eq!(DVec2::new(4.0, 9.0).sqrt(), DVec2::new(2.0, 3.0));
    }

    #[test]
    fn lerping_between_vectors_works() {
        let a = DVec2::new(0.0, 10.0);
        let b = DVec2::new(10.0, 20.0);
        assert_abs_diff_eq!(a.lerp(&b, 0.25), DVec2::new(2.5, 12.5));
    }

    #[test]
    fn componentwise_min_max_and_reductions_work() {
        let a = IVec3::new(1, 5, -3);
        let b = IVec3::new(2, 0, -4);
        assert_eq!(a.component_min(&b), IVec3::new(1, 0, -4));
        assert_eq!(a.component_max(&b), IVec3::new(2, 5, -3));
        assert_eq!(a.min_element(), -3);
        assert_eq!(a.max_element(), 5);
        assert_eq!(a.sum(), 3);
        assert_eq!(a.squared(), IVec3::new(1, 25, 9));
    }

    // === Comparison and Logic ===

    #[test]
    fn relational_comparisons_give_bool_vectors() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(3.0, 2.0, 1.0);
        assert_eq!(a.less_than(b), BVec3::new(true, false, false));
        assert_eq!(a.less_than_equal(b), BVec3::new(true, true, false));
        assert_eq!(a.greater_than(2.0), BVec3::new(false, false, true));
        assert_eq!(a.equal(b), BVec3::new(false, true, false));
        assert_eq!(a.not_equal(2.0), BVec3::new(true, false, true));
    }

    #[test]
    fn comparing_with_scalar_on_left_mirrors_method() {
        let v = IVec3::new(1, 2, 3);
        // 2 < v, 2 <= v, 2 > v
        assert_eq!(v.greater_than(2), BVec3::new(false, false, true));
        assert_eq!(v.greater_than_equal(2), BVec3::new(false, true, true));
        assert_eq!(v.less_than(2), BVec3::new(true, false, false));
        assert_eq!(IVec3::splat(2).less_than(v), v.greater_than(2));
    }

    #[test]
    fn boolean_vector_logic_works() {
        let a = BVec2::new(true, false);
        let b = BVec2::new(true, true);
        assert_eq!(a & b, BVec2::new(true, false));
        assert_eq!(a | b, BVec2::new(true, true));
        assert_eq!(a ^ b, BVec2::new(false, true));
        assert_eq!(!a, BVec2::new(false, true));
        assert!(a.any());
        assert!(!a.all());
        assert!(b.all());
    }

    #[test]
    fn nan_components_are_not_equal() {
        let v = DVec2::new(f64::NAN, 1.0);
        assert_ne!(v, v);
    }

    #[test]
    fn equal_vectors_have_equal_hashes() {
        let a = DVec3::new(0.0, 1.5, -2.0);
        let b = DVec3::new(-0.0, 1.5, -2.0);
        assert_eq!(a, b);
        assert_eq!(a.combined_hash(), b.combined_hash());

        let set: HashSet<IVec2> = [IVec2::new(1, 2), IVec2::new(1, 2), IVec2::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    // === Casts ===

    #[test]
    fn casting_double_vector_to_integers_truncates() {
        let v = DVec3::new(1.9, -1.9, 0.5);
        assert_eq!(v.cast::<i32>(), IVec3::new(1, -1, 0));
        assert_eq!(v.cast::<bool>(), BVec3::new(true, true, true));
    }

    #[test]
    fn casting_bool_vector_gives_ones_and_zeros() {
        let v = BVec2::new(true, false);
        assert_eq!(v.cast::<f32>(), Vec2::new(1.0, 0.0));
        assert_eq!(v.cast::<u32>(), UVec2::new(1, 0));
    }

    // === Text ===

    #[test]
    fn displaying_vector_separates_with_comma_space() {
        assert_eq!(IVec3::new(1, -2, 3).to_string(), "1, -2, 3");
        assert_eq!(format!("{:.1}", DVec2::new(0.26, 2.0)), "0.3, 2.0");
        assert_eq!(BVec2::new(true, false).to_string(), "true, false");
    }

    #[test]
    fn parsing_displayed_vector_gives_back_vector() {
        let v = DVec4::new(6.5, 2.0, -6.5, 2.0);
        assert_eq!(DVec4::parse(&v.to_string()), Ok(v));
        assert_eq!(v.to_string().parse::<DVec4>(), Ok(v));
    }

    #[test]
    fn parsing_wrong_number_of_components_fails() {
        assert!(matches!(DVec3::parse("1, 2"), Err(MathError::Format { .. })));
        assert!(matches!(
            DVec3::parse("1, 2, 3, 4"),
            Err(MathError::Format { .. })
        ));
        assert!(matches!(DVec3::parse(""), Err(MathError::Format { .. })));
        assert_eq!(
            DVec3::parse_with(None, &TextFormat::default()),
            Err(MathError::NullInput)
        );
    }

    #[test]
    fn try_parsing_invalid_text_gives_none() {
        assert_eq!(IVec2::try_parse(Some("1, x")), None);
        assert_eq!(IVec2::try_parse(None), None);
        assert_eq!(IVec2::try_parse(Some("1, 2")), Some(IVec2::new(1, 2)));
    }

    #[test]
    fn formatting_with_custom_separator_and_precision_works() {
        let format = TextFormat::with_separator("; ").with_precision(3);
        let v = Vec2::new(1.0, 0.5);
        let text = v.to_string_with(&format);
        assert_eq!(text, "1.000; 0.500");
        assert_eq!(Vec2::parse_with(Some(text.as_str()), &format), Ok(v));
    }
}
