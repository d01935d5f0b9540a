//! Matrices.
//!
//! `MatrixCxR` has `C` columns and `R` rows and is stored as `C` column
//! vectors of dimension `R`. Element `(col, row)` is written `m{col}{row}`
//! in serialized form.

use crate::{
    cast::CastFrom,
    error::{MathError, Result, checked_index},
    num::Scalar,
    text::{self, TextFormat},
    vector::{Vector, Vector2, Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use half::f16;
use num_complex::Complex64;
use num_traits::{One, PrimInt};
use rust_decimal::Decimal;
use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

macro_rules! define_matrix {
    (
        $(#[$attributes:meta])*
        $name:ident {
            columns: $cols:literal of $column:ident,
            rows: $rows:literal of $row:ident,
            len: $len:literal,
            transpose: $transpose:ident $(,)?
        }
    ) => {
        $(#[$attributes])*
        #[repr(C)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(
                into = "BTreeMap<String, T>",
                try_from = "BTreeMap<String, T>",
                bound(
                    serialize = "T: Scalar + serde::Serialize",
                    deserialize = "T: Scalar + serde::Deserialize<'de>"
                )
            )
        )]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name<T> {
            columns: [$column<T>; $cols],
        }

        impl<T: Scalar> $name<T> {
            pub const COLUMNS: usize = $cols;
            pub const ROWS: usize = $rows;

            /// Creates a matrix with the given columns.
            #[inline]
            pub const fn from_columns(columns: [$column<T>; $cols]) -> Self {
                Self { columns }
            }

            /// Creates a matrix with the given rows.
            #[inline]
            pub fn from_rows(rows: [$row<T>; $rows]) -> Self {
                Self::from_fn(|col, row| rows[row][col])
            }

            /// Creates a matrix whose element at each column and row is
            /// `f(col, row)`.
            #[inline]
            pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
                Self {
                    columns: std::array::from_fn(|col| $column::from_fn(|row| f(col, row))),
                }
            }

            /// Creates a matrix from its elements in column-major order.
            #[inline]
            pub fn from_column_major(elements: [T; $len]) -> Self {
                Self::from_fn(|col, row| elements[col * $rows + row])
            }

            /// Creates a matrix with all elements equal to the domain zero.
            #[inline]
            pub fn zeros() -> Self {
                Self::default()
            }

            #[inline]
            pub fn columns(&self) -> &[$column<T>; $cols] {
                &self.columns
            }

            /// Returns the column at `index`.
            ///
            /// # Errors
            /// Returns [`MathError::IndexOutOfRange`] unless
            /// `0 <= index < COLUMNS`.
            pub fn column<I: PrimInt>(&self, index: I) -> Result<$column<T>> {
                let col = checked_index(index, $cols)?;
                Ok(self.columns[col])
            }

            pub fn set_column<I: PrimInt>(&mut self, index: I, column: $column<T>) -> Result<()> {
                let col = checked_index(index, $cols)?;
                self.columns[col] = column;
                Ok(())
            }

            /// Gathers the row at `index`.
            ///
            /// # Errors
            /// Returns [`MathError::IndexOutOfRange`] unless
            /// `0 <= index < ROWS`.
            pub fn row<I: PrimInt>(&self, index: I) -> Result<$row<T>> {
                let row = checked_index(index, $rows)?;
                Ok($row::from_fn(|col| self.columns[col][row]))
            }

            pub fn set_row<I: PrimInt>(&mut self, index: I, row: $row<T>) -> Result<()> {
                let row_idx = checked_index(index, $rows)?;
                for (column, value) in self.columns.iter_mut().zip(row) {
                    column[row_idx] = value;
                }
                Ok(())
            }

            /// Returns the element at the given column and row.
            ///
            /// # Errors
            /// Returns [`MathError::IndexOutOfRange`] if either index is out of
            /// range.
            pub fn get<I: PrimInt>(&self, col: I, row: I) -> Result<T> {
                let col = checked_index(col, $cols)?;
                let row = checked_index(row, $rows)?;
                Ok(self.columns[col][row])
            }

            pub fn set<I: PrimInt>(&mut self, col: I, row: I, value: T) -> Result<()> {
                let col = checked_index(col, $cols)?;
                let row = checked_index(row, $rows)?;
                self.columns[col][row] = value;
                Ok(())
            }

            /// Swaps rows and columns.
            #[inline]
            pub fn transposed(&self) -> $transpose<T> {
                $transpose::from_fn(|col, row| self.columns[row][col])
            }

            /// The elements as a 2D array indexed by column and then row.
            #[inline]
            pub fn values(&self) -> [[T; $rows]; $cols] {
                self.columns.map(|column| column.to_array())
            }

            /// The elements in column-major order.
            pub fn to_array(&self) -> [T; $len] {
                let mut elements = [T::default(); $len];
                for (col, column) in self.columns.iter().enumerate() {
                    for (row, value) in column.iter().enumerate() {
                        elements[col * $rows + row] = value;
                    }
                }
                elements
            }

            /// Iterates over the elements in column-major order.
            #[inline]
            pub fn iter(&self) -> std::array::IntoIter<T, $len> {
                self.to_array().into_iter()
            }

            #[inline]
            pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name {
                    columns: self.columns.map(|column| column.mapped(&mut f)),
                }
            }

            /// Converts each element explicitly to the domain `U`.
            #[inline]
            pub fn cast<U: CastFrom<T>>(&self) -> $name<U> {
                self.mapped(<U as CastFrom<T>>::cast_from)
            }

            /// Computes a hash from all elements. Equal matrices give equal
            /// hashes.
            pub fn combined_hash(&self) -> u64 {
                self.iter()
                    .fold(0_u64, |hash, value| hash.wrapping_mul(397) ^ value.hash_bits())
            }

            pub fn to_string_with(&self, format: &TextFormat) -> String {
                text::format_components(self.iter(), format)
            }

            /// Parses a matrix from its elements in column-major order,
            /// separated by `", "`.
            ///
            /// # Errors
            /// See [`Self::parse_with`].
            pub fn parse(input: &str) -> Result<Self> {
                Self::parse_with(Some(input), &TextFormat::default())
            }

            /// Parses a matrix from its elements in column-major order.
            ///
            /// # Errors
            /// Returns [`MathError::NullInput`] if `input` is [`None`], and
            /// [`MathError::Format`] if the text does not hold exactly one
            /// valid value per element.
            pub fn parse_with(input: Option<&str>, format: &TextFormat) -> Result<Self> {
                text::parse_components::<T, $len>(input, format).map(Self::from_column_major)
            }

            pub fn try_parse(input: Option<&str>) -> Option<Self> {
                Self::try_parse_with(input, &TextFormat::default())
            }

            pub fn try_parse_with(input: Option<&str>, format: &TextFormat) -> Option<Self> {
                match Self::parse_with(input, format) {
                    Ok(matrix) => Some(matrix),
                    Err(error) => {
                        log::debug!("Could not parse {}: {error}", stringify!($name));
                        None
                    }
                }
            }
        }

        impl<T: Scalar + One> $name<T> {
            /// Creates a matrix with ones on the main diagonal and zeros
            /// elsewhere.
            #[inline]
            pub fn identity() -> Self {
                Self::from_fn(|col, row| if col == row { T::one() } else { T::default() })
            }
        }

        impl<T: Scalar> From<[$column<T>; $cols]> for $name<T> {
            #[inline]
            fn from(columns: [$column<T>; $cols]) -> Self {
                Self::from_columns(columns)
            }
        }

        impl<T: Scalar> From<$name<T>> for BTreeMap<String, T> {
            fn from(matrix: $name<T>) -> Self {
                let mut elements = BTreeMap::new();
                for (col, column) in matrix.columns.iter().enumerate() {
                    for (row, value) in column.iter().enumerate() {
                        elements.insert(format!("m{col}{row}"), value);
                    }
                }
                elements
            }
        }

        impl<T: Scalar> TryFrom<BTreeMap<String, T>> for $name<T> {
            type Error = MathError;

            fn try_from(mut elements: BTreeMap<String, T>) -> Result<Self> {
                let mut matrix = Self::zeros();
                for col in 0..$cols {
                    for row in 0..$rows {
                        let key = format!("m{col}{row}");
                        matrix.columns[col][row] = elements
                            .remove(&key)
                            .ok_or_else(|| MathError::format(format!("missing element `{key}`")))?;
                    }
                }
                if let Some(key) = elements.keys().next() {
                    return Err(MathError::format(format!("unexpected element `{key}`")));
                }
                Ok(matrix)
            }
        }

        impl<T: Scalar> Index<usize> for $name<T> {
            type Output = $column<T>;

            #[inline]
            fn index(&self, index: usize) -> &$column<T> {
                &self.columns[index]
            }
        }

        impl<T: Scalar> IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut $column<T> {
                &mut self.columns[index]
            }
        }

        impl<T: Scalar> IntoIterator for $name<T> {
            type Item = T;
            type IntoIter = std::array::IntoIter<T, $len>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<T: Scalar> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64(self.combined_hash());
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

        // SAFETY: The type is `repr(C)` with only an array of vectors of `T`,
        // which have no padding
        unsafe impl<T: Zeroable> Zeroable for $name<T> {}

        // SAFETY: As above
        unsafe impl<T: Pod> Pod for $name<T> {}

        impl<T: Scalar + Add<Output = T>> Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::from_fn(|col, row| self.columns[col][row] + rhs.columns[col][row])
            }
        }

        impl<T: Scalar + Sub<Output = T>> Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::from_fn(|col, row| self.columns[col][row] - rhs.columns[col][row])
            }
        }

        impl<T: Scalar + Add<Output = T>> AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar + Sub<Output = T>> SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self.mapped(Neg::neg)
            }
        }

        impl<T: Scalar + Mul<Output = T>> Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                self.mapped(|value| value * rhs)
            }
        }

        impl<T: Scalar + Div<Output = T>> Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self {
                self.mapped(|value| value / rhs)
            }
        }

        impl<T: Scalar + Add<Output = T> + Mul<Output = T>> Mul<$row<T>> for $name<T> {
            type Output = $column<T>;

            /// Transforms a column vector.
            fn mul(self, rhs: $row<T>) -> $column<T> {
                $column::from_fn(|row| {
                    let mut sum = self.columns[0][row] * rhs[0];
                    for col in 1..$cols {
                        sum = sum + self.columns[col][row] * rhs[col];
                    }
                    sum
                })
            }
        }

        impl<T: Scalar + Add<Output = T> + Mul<Output = T>> Mul<$name<T>> for $column<T> {
            type Output = $row<T>;

            /// Transforms a row vector.
            fn mul(self, rhs: $name<T>) -> $row<T> {
                $row::from_fn(|col| $column::dot(&self, &rhs.columns[col]))
            }
        }

        impl<T> ::approx::AbsDiffEq for $name<T>
        where
            T: Scalar + ::approx::AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.iter()
                    .zip(other.iter())
                    .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
            }
        }

        impl<T> ::approx::RelativeEq for $name<T>
        where
            T: Scalar + ::approx::RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.iter()
                    .zip(other.iter())
                    .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
            }
        }
    };
}

define_matrix!(
    /// A matrix with 2 columns and 2 rows.
    Matrix2x2 { columns: 2 of Vector2, rows: 2 of Vector2, len: 4, transpose: Matrix2x2 }
);

define_matrix!(
    /// A matrix with 2 columns and 3 rows.
    Matrix2x3 { columns: 2 of Vector3, rows: 3 of Vector2, len: 6, transpose: Matrix3x2 }
);

define_matrix!(
    /// A matrix with 2 columns and 4 rows.
    Matrix2x4 { columns: 2 of Vector4, rows: 4 of Vector2, len: 8, transpose: Matrix4x2 }
);

define_matrix!(
    /// A matrix with 3 columns and 2 rows.
    Matrix3x2 { columns: 3 of Vector2, rows: 2 of Vector3, len: 6, transpose: Matrix2x3 }
);

define_matrix!(
    /// A matrix with 3 columns and 3 rows.
    Matrix3x3 { columns: 3 of Vector3, rows: 3 of Vector3, len: 9, transpose: Matrix3x3 }
);

define_matrix!(
    /// A matrix with 3 columns and 4 rows.
    Matrix3x4 { columns: 3 of Vector4, rows: 4 of Vector3, len: 12, transpose: Matrix4x3 }
);

define_matrix!(
    /// A matrix with 4 columns and 2 rows.
    Matrix4x2 { columns: 4 of Vector2, rows: 2 of Vector4, len: 8, transpose: Matrix2x4 }
);

define_matrix!(
    /// A matrix with 4 columns and 3 rows.
    Matrix4x3 { columns: 4 of Vector3, rows: 3 of Vector4, len: 12, transpose: Matrix3x4 }
);

define_matrix!(
    /// A matrix with 4 columns and 4 rows.
    Matrix4x4 { columns: 4 of Vector4, rows: 4 of Vector4, len: 16, transpose: Matrix4x4 }
);

pub type Matrix2<T> = Matrix2x2<T>;
pub type Matrix3<T> = Matrix3x3<T>;
pub type Matrix4<T> = Matrix4x4<T>;

macro_rules! impl_square_product {
    ($name:ident) => {
        impl<T: Scalar + Add<Output = T> + Mul<Output = T>> Mul for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::from_columns(rhs.columns.map(|column| self * column))
            }
        }

        impl<T: Scalar + Add<Output = T> + Mul<Output = T>> MulAssign for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }
    };
}

impl_square_product!(Matrix2x2);
impl_square_product!(Matrix3x3);
impl_square_product!(Matrix4x4);

impl<T> Matrix2x2<T>
where
    T: Scalar + Neg<Output = T> + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    pub fn determinant(&self) -> T {
        let [a, b] = self.columns;
        a.x * b.y - b.x * a.y
    }
}

impl<T> Matrix3x3<T>
where
    T: Scalar + Neg<Output = T> + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    pub fn determinant(&self) -> T {
        let [a, b, c] = self.columns;
        Vector3::dot(&a, &Vector3::cross(&b, &c))
    }
}

impl<T> Matrix4x4<T>
where
    T: Scalar + Neg<Output = T> + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    /// Computes the determinant by cofactor expansion along the first
    /// column.
    pub fn determinant(&self) -> T {
        let m = self.values();

        let s00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
        let s01 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
        let s02 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
        let s03 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
        let s04 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
        let s05 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

        let cofactor0 = m[1][1] * s00 - m[1][2] * s01 + m[1][3] * s02;
        let cofactor1 = -(m[1][0] * s00 - m[1][2] * s03 + m[1][3] * s04);
        let cofactor2 = m[1][0] * s01 - m[1][1] * s03 + m[1][3] * s05;
        let cofactor3 = -(m[1][0] * s02 - m[1][1] * s04 + m[1][2] * s05);

        m[0][0] * cofactor0 + m[0][1] * cofactor1 + m[0][2] * cofactor2 + m[0][3] * cofactor3
    }
}

macro_rules! define_matrix_aliases {
    ($($prefix:ident => $t:ty);+ $(;)?) => {
        pastey::paste! {
            $(
                pub type [<$prefix 2>] = Matrix2x2<$t>;
                pub type [<$prefix 3>] = Matrix3x3<$t>;
                pub type [<$prefix 4>] = Matrix4x4<$t>;
                pub type [<$prefix 2 x3>] = Matrix2x3<$t>;
                pub type [<$prefix 2 x4>] = Matrix2x4<$t>;
                pub type [<$prefix 3 x2>] = Matrix3x2<$t>;
                pub type [<$prefix 3 x4>] = Matrix3x4<$t>;
                pub type [<$prefix 4 x2>] = Matrix4x2<$t>;
                pub type [<$prefix 4 x3>] = Matrix4x3<$t>;
            )+
        }
    };
}

define_matrix_aliases!(
    Mat => f32;
    DMat => f64;
    HMat => f16;
    IMat => i32;
    LMat => i64;
    UMat => u32;
    BMat => bool;
    CMat => Complex64;
    DecMat => Decimal;
);
