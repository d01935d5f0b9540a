//! Quaternions.

use crate::{
    error::{MathError, Result},
    matrix::{Matrix3x3, Matrix4x4},
    num::{Real, Scalar, Transcendental},
    text::{self, TextFormat},
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use half::f16;
use num_traits::PrimInt;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, MulAssign, Neg, Sub},
    str::FromStr,
};

/// A quaternion `w + xi + yj + zk`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Quat = Quaternion<f32>;
pub type DQuat = Quaternion<f64>;
pub type HQuat = Quaternion<f16>;

impl<T: Scalar> Quaternion<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from its real part and the vector of imaginary
    /// parts.
    #[inline]
    pub const fn from_parts(real: T, imag: Vector3<T>) -> Self {
        Self::new(imag.x, imag.y, imag.z, real)
    }

    #[inline]
    pub const fn real(&self) -> T {
        self.w
    }

    #[inline]
    pub const fn imag(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// The components as a vector in `(x, y, z, w)` order.
    #[inline]
    pub const fn to_vector4(&self) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    #[inline]
    pub const fn to_array(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Iterates over the components in `(x, y, z, w)` order.
    #[inline]
    pub fn iter(&self) -> std::array::IntoIter<T, 4> {
        self.to_array().into_iter()
    }

    /// Returns the component at `index` in `(x, y, z, w)` order.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] unless `0 <= index < 4`.
    pub fn get<I: PrimInt>(&self, index: I) -> Result<T> {
        self.to_vector4().get(index)
    }

    pub fn set<I: PrimInt>(&mut self, index: I, value: T) -> Result<()> {
        let mut components = self.to_vector4();
        components.set(index, value)?;
        *self = components.into();
        Ok(())
    }

    pub fn combined_hash(&self) -> u64 {
        self.to_vector4().combined_hash()
    }

    pub fn to_string_with(&self, format: &TextFormat) -> String {
        text::format_components(self.iter(), format)
    }

    /// Parses a quaternion from `x, y, z, w`.
    ///
    /// # Errors
    /// See [`Self::parse_with`].
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with(Some(input), &TextFormat::default())
    }

    /// Parses a quaternion from its four components in `(x, y, z, w)` order.
    ///
    /// # Errors
    /// Returns [`MathError::NullInput`] if `input` is [`None`], and
    /// [`MathError::Format`] if the text does not hold exactly four valid
    /// components.
    pub fn parse_with(input: Option<&str>, format: &TextFormat) -> Result<Self> {
        Vector4::parse_with(input, format).map(Self::from)
    }

    pub fn try_parse(input: Option<&str>) -> Option<Self> {
        Self::try_parse_with(input, &TextFormat::default())
    }

    pub fn try_parse_with(input: Option<&str>, format: &TextFormat) -> Option<Self> {
        match Self::parse_with(input, format) {
            Ok(quaternion) => Some(quaternion),
            Err(error) => {
                log::debug!("Could not parse Quaternion: {error}");
                None
            }
        }
    }
}

impl<T: Real> Quaternion<T> {
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// Creates a quaternion rotating by `angle` radians about the given
    /// normalized axis.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let half_angle = angle * T::ONE_HALF;
        let sin = Transcendental::sin(half_angle);
        Self::new(
            axis.x * sin,
            axis.y * sin,
            axis.z * sin,
            Transcendental::cos(half_angle),
        )
    }

    #[inline]
    pub fn dot(lhs: &Self, rhs: &Self) -> T {
        lhs.x * rhs.x + lhs.y * rhs.y + lhs.z * rhs.z + lhs.w * rhs.w
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        Self::dot(self, self)
    }

    /// The norm, with the square root taken in double precision.
    #[inline]
    pub fn length(&self) -> T {
        T::sqrt_length(self.length_squared())
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// The multiplicative inverse. A zero quaternion gives NaN components.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.length_squared()
    }

    /// The rotation angle in radians of a normalized quaternion.
    #[inline]
    pub fn angle(&self) -> T {
        Transcendental::acos(self.w) * T::TWO
    }

    /// The rotation axis of a normalized quaternion. The identity rotation
    /// gives the z-axis.
    pub fn axis(&self) -> Vector3<T> {
        let sin_squared = T::ONE - self.w * self.w;
        if sin_squared <= T::ZERO {
            return Vector3::new(T::ZERO, T::ZERO, T::ONE);
        }
        let inverse_sin = T::ONE / Transcendental::sqrt(sin_squared);
        self.imag().mapped(|component| component * inverse_sin)
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `other` (at
    /// `t = 1`) along the shortest path.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut cos_theta = Self::dot(self, other);
        let mut end = *other;
        if cos_theta < T::ZERO {
            end = -end;
            cos_theta = -cos_theta;
        }

        // Nearly parallel quaternions interpolate linearly to avoid dividing
        // by a vanishing sine
        if cos_theta > T::ONE - T::EPSILON {
            return Self::new(
                self.x + (end.x - self.x) * t,
                self.y + (end.y - self.y) * t,
                self.z + (end.z - self.z) * t,
                self.w + (end.w - self.w) * t,
            );
        }

        let theta = Transcendental::acos(cos_theta);
        let sin_theta = Transcendental::sin(theta);
        let start_weight = Transcendental::sin((T::ONE - t) * theta) / sin_theta;
        let end_weight = Transcendental::sin(t * theta) / sin_theta;
        *self * start_weight + end * end_weight
    }

    /// The rotation as a 3x3 matrix.
    pub fn to_matrix3(&self) -> Matrix3x3<T> {
        let Self { x, y, z, w } = *self;
        let two = T::TWO;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix3x3::from_columns([
            Vector3::new(
                T::ONE - two * (yy + zz),
                two * (xy + wz),
                two * (xz - wy),
            ),
            Vector3::new(
                two * (xy - wz),
                T::ONE - two * (xx + zz),
                two * (yz + wx),
            ),
            Vector3::new(
                two * (xz + wy),
                two * (yz - wx),
                T::ONE - two * (xx + yy),
            ),
        ])
    }

    /// The rotation as a 4x4 homogeneous matrix.
    pub fn to_matrix4(&self) -> Matrix4x4<T> {
        let rotation = self.to_matrix3().values();
        Matrix4x4::from_fn(|col, row| match (col, row) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => rotation[col][row],
        })
    }

    /// Extracts the rotation of a 3x3 rotation matrix.
    pub fn from_matrix3(matrix: &Matrix3x3<T>) -> Self {
        let m = matrix.values();

        let four_x_squared_minus_1 = m[0][0] - m[1][1] - m[2][2];
        let four_y_squared_minus_1 = m[1][1] - m[0][0] - m[2][2];
        let four_z_squared_minus_1 = m[2][2] - m[0][0] - m[1][1];
        let four_w_squared_minus_1 = m[0][0] + m[1][1] + m[2][2];

        // Use the largest component as divisor for numerical stability
        let mut biggest_index = 0;
        let mut four_biggest_squared_minus_1 = four_w_squared_minus_1;
        for (index, candidate) in [
            four_x_squared_minus_1,
            four_y_squared_minus_1,
            four_z_squared_minus_1,
        ]
        .into_iter()
        .enumerate()
        {
            if candidate > four_biggest_squared_minus_1 {
                four_biggest_squared_minus_1 = candidate;
                biggest_index = index + 1;
            }
        }

        let biggest = Transcendental::sqrt(four_biggest_squared_minus_1 + T::ONE) * T::ONE_HALF;
        let mult = T::from_f64(0.25) / biggest;

        match biggest_index {
            0 => Self::new(
                (m[1][2] - m[2][1]) * mult,
                (m[2][0] - m[0][2]) * mult,
                (m[0][1] - m[1][0]) * mult,
                biggest,
            ),
            1 => Self::new(
                biggest,
                (m[0][1] + m[1][0]) * mult,
                (m[2][0] + m[0][2]) * mult,
                (m[1][2] - m[2][1]) * mult,
            ),
            2 => Self::new(
                (m[0][1] + m[1][0]) * mult,
                biggest,
                (m[1][2] + m[2][1]) * mult,
                (m[2][0] - m[0][2]) * mult,
            ),
            _ => Self::new(
                (m[2][0] + m[0][2]) * mult,
                (m[1][2] + m[2][1]) * mult,
                biggest,
                (m[0][1] - m[1][0]) * mult,
            ),
        }
    }

    /// Extracts the rotation of the upper-left 3x3 part of a 4x4 matrix.
    pub fn from_matrix4(matrix: &Matrix4x4<T>) -> Self {
        let m = matrix.values();
        Self::from_matrix3(&Matrix3x3::from_fn(|col, row| m[col][row]))
    }
}

impl<T: Real> Matrix3x3<T> {
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion<T> {
        Quaternion::from_matrix3(self)
    }

    #[inline]
    pub fn from_quaternion(quaternion: &Quaternion<T>) -> Self {
        quaternion.to_matrix3()
    }
}

impl<T: Real> Matrix4x4<T> {
    #[inline]
    pub fn to_quaternion(&self) -> Quaternion<T> {
        Quaternion::from_matrix4(self)
    }

    #[inline]
    pub fn from_quaternion(quaternion: &Quaternion<T>) -> Self {
        quaternion.to_matrix4()
    }
}

impl<T: Scalar> From<Vector4<T>> for Quaternion<T> {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl<T: Scalar> From<Quaternion<T>> for Vector4<T> {
    #[inline]
    fn from(quaternion: Quaternion<T>) -> Self {
        quaternion.to_vector4()
    }
}

impl<T: Scalar> IntoIterator for Quaternion<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> Hash for Quaternion<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.combined_hash());
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_components(f, self.iter())
    }
}

impl<T: Scalar> FromStr for Quaternion<T> {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// SAFETY: `repr(C)` with four fields of type `T` and no padding
unsafe impl<T: Zeroable> Zeroable for Quaternion<T> {}

// SAFETY: As above
unsafe impl<T: Pod> Pod for Quaternion<T> {}

impl<T: Real> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<T: Real> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<T: Real> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Real> Mul for Quaternion<T> {
    type Output = Self;

    /// The Hamilton product.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<T: Real> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T: Real> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<T: Real> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    /// Rotates the vector.
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        let imag = self.imag();
        let uv = Vector3::cross(&imag, &rhs);
        let uuv = Vector3::cross(&imag, &uv);
        let w = self.w;
        rhs + uv.zip_map(&uuv, |a, b| (a * w + b) * T::TWO)
    }
}

impl_approx_eq!(Quaternion<T>, [x, y, z, w]);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{text::Locale, vector::DVec3};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn identity_quaternion_does_not_rotate() {
        let v = DVec3::new(1.0, -2.0, 3.0);
        assert_abs_diff_eq!(DQuat::identity() * v, v);
        assert_eq!(DQuat::identity() * DQuat::identity(), DQuat::identity());
    }

    #[test]
    fn rotating_by_quarter_turn_about_z_maps_x_to_y() {
        let q = DQuat::from_axis_angle(&DVec3::unit_z(), FRAC_PI_2);
        assert_abs_diff_eq!(q * DVec3::unit_x(), DVec3::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(q.angle(), FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(q.axis(), DVec3::unit_z(), epsilon = EPSILON);
    }

    #[test]
    fn hamilton_product_composes_rotations() {
        let a = DQuat::from_axis_angle(&DVec3::unit_x(), 0.4);
        let b = DQuat::from_axis_angle(&DVec3::unit_y(), -1.1);
        let v = DVec3::new(0.3, 2.0, -1.0);
        assert_abs_diff_eq!((a * b) * v, a * (b * v), epsilon = EPSILON);
    }

    #[test]
    fn quaternion_units_multiply_like_ijk() {
        let i = DQuat::new(1.0, 0.0, 0.0, 0.0);
        let j = DQuat::new(0.0, 1.0, 0.0, 0.0);
        let k = DQuat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, DQuat::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn multiplying_by_inverse_gives_identity() {
        let q = DQuat::new(1.0, -2.0, 0.5, 3.0);
        assert_abs_diff_eq!(q * q.inverse(), DQuat::identity(), epsilon = EPSILON);
        assert_eq!(q.conjugate(), DQuat::new(-1.0, 2.0, -0.5, 3.0));
    }

    #[test]
    fn normalizing_quaternion_gives_unit_length() {
        let q = DQuat::new(1.0, 2.0, 2.0, 4.0);
        assert_abs_diff_eq!(q.length(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(q.normalized().length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn converting_to_matrix_and_back_preserves_rotation() {
        for (axis, angle) in [
            (DVec3::unit_x(), 0.3),
            (DVec3::new(1.0, 1.0, 0.0).normalized(), 2.5),
            (DVec3::new(-1.0, 2.0, 0.5).normalized(), PI * 0.99),
            (DVec3::unit_z(), PI),
        ] {
            let q = DQuat::from_axis_angle(&axis, angle);
            let v = DVec3::new(0.5, -1.0, 2.0);
            let m = q.to_matrix3();
            assert_abs_diff_eq!(m * v, q * v, epsilon = EPSILON);

            let back = m.to_quaternion();
            // q and -q represent the same rotation
            let back = if DQuat::dot(&back, &q) < 0.0 { -back } else { back };
            assert_abs_diff_eq!(back, q, epsilon = 1e-9);

            let m4 = q.to_matrix4();
            assert_abs_diff_eq!(m4.get(3, 3).unwrap(), 1.0);
            assert_abs_diff_eq!(m4.to_quaternion(), back, epsilon = 1e-9);
        }
    }

    #[test]
    fn rotation_matrix_has_unit_determinant() {
        let q = DQuat::from_axis_angle(&DVec3::new(0.0, 0.6, 0.8), 1.3);
        assert_abs_diff_eq!(q.to_matrix3().determinant(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(
            Matrix3x3::from_quaternion(&q),
            q.to_matrix3(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn slerping_halfway_halves_angle() {
        let a = DQuat::identity();
        let b = DQuat::from_axis_angle(&DVec3::unit_y(), 1.2);
        let halfway = a.slerp(&b, 0.5);
        assert_abs_diff_eq!(
            halfway,
            DQuat::from_axis_angle(&DVec3::unit_y(), 0.6),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(a.slerp(&b, 1.0), b, epsilon = EPSILON);
    }

    #[test]
    fn getting_components_by_index_works() {
        let mut q = DQuat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.get(3), Ok(4.0));
        assert!(q.get(4).is_err());
        assert!(q.get(-1).is_err());
        q.set(0, 9.0).unwrap();
        assert_eq!(q.x, 9.0);
        assert!(q.set(7, 0.0).is_err());
    }

    #[test]
    fn displaying_and_parsing_quaternion_round_trips() {
        let q = Quat::new(0.5, -1.0, 0.0, 2.0);
        assert_eq!(q.to_string(), "0.5, -1, 0, 2");
        assert_eq!(q.to_string().parse::<Quat>(), Ok(q));
        assert_eq!(Quat::try_parse(None), None);
        assert!(Quat::parse("1, 2, 3").is_err());
    }

    #[test]
    fn parsing_quaternion_with_custom_format_works() {
        let format = TextFormat::with_separator(" ").with_locale(Locale::new(','));
        assert_eq!(
            DQuat::try_parse_with(Some("0,5 -1 0 2"), &format),
            Some(DQuat::new(0.5, -1.0, 0.0, 2.0))
        );
        assert_eq!(DQuat::try_parse_with(Some("0,5 -1 0"), &format), None);
        assert_eq!(DQuat::try_parse_with(None, &format), None);
    }
}
