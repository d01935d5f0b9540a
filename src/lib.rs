//! Statically typed vectors, matrices and quaternions over many scalar
//! domains.
//!
//! Every value type is generic over its scalar domain, and each domain has
//! a family of aliases:
//!
//! | Domain            | Vectors    | Matrices    | Quaternion |
//! |-------------------|------------|-------------|------------|
//! | `f32`             | `Vec3`     | `Mat3`      | `Quat`     |
//! | `f64`             | `DVec3`    | `DMat3`     | `DQuat`    |
//! | [`f16`]           | `HVec3`    | `HMat3`     | `HQuat`    |
//! | `i32`             | `IVec3`    | `IMat3`     |            |
//! | `i64`             | `LVec3`    | `LMat3`     |            |
//! | `u32`             | `UVec3`    | `UMat3`     |            |
//! | `bool`            | `BVec3`    | `BMat3`     |            |
//! | [`Complex64`]     | `CVec3`    | `CMat3`     |            |
//! | [`Decimal`]       | `DecVec3`  | `DecMat3`   |            |
//!
//! Arithmetic between different domains promotes both operands as described
//! in [`promotion`]. Explicit conversions between any two domains are
//! available through [`cast::CastFrom`].

#[macro_use]
mod macros;

pub mod cast;
pub mod error;
pub mod matrix;
pub mod num;
pub mod promotion;
pub mod quaternion;
pub mod swizzle;
pub mod text;
pub mod vector;

pub use error::{MathError, Result};
pub use half::f16;
pub use matrix::*;
pub use num::{Abs, Metric, Real, Rounding, Scalar, Transcendental};
pub use num_complex::Complex64;
pub use quaternion::{DQuat, HQuat, Quat, Quaternion};
pub use rust_decimal::Decimal;
pub use swizzle::Swizzle;
pub use text::{Locale, NumberStyle, TextFormat};
pub use vector::*;
