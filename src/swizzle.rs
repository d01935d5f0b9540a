//! Reading and writing components by letter patterns such as `"zyx"`.
//!
//! A pattern uses either the position letters `xyzw` or the color letters
//! `rgba`, never both. Letter `n` of either alphabet addresses component `n`.

use crate::{
    error::{MathError, Result},
    vector::Vector,
};

/// Maximum number of letters in a pattern.
const MAX_PATTERN_LEN: usize = 4;

pub trait Swizzle: Vector {
    /// Gathers the components named by `pattern` into a new vector, whose
    /// dimension must equal the pattern length.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidSwizzle`] if the pattern length does not
    /// match the output dimension, mixes alphabets or names a component this
    /// vector lacks.
    fn swizzle<V: Vector<Scalar = Self::Scalar>>(&self, pattern: &str) -> Result<V> {
        let indices = parse_pattern(pattern, V::DIM, Self::DIM)?;
        Ok(V::from_fn(|idx| {
            self.component(indices[idx])
                .copied()
                .unwrap_or_default()
        }))
    }

    /// Writes the components of `value` to the components named by
    /// `pattern`, which must not name any component twice.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidSwizzle`] for the same reasons as
    /// [`Swizzle::swizzle`], or if a component is named twice. Nothing is
    /// written on failure.
    fn set_swizzle<V: Vector<Scalar = Self::Scalar>>(
        &mut self,
        pattern: &str,
        value: V,
    ) -> Result<()> {
        let indices = parse_pattern(pattern, V::DIM, Self::DIM)?;
        for (position, index) in indices.iter().enumerate() {
            if indices[..position].contains(index) {
                return Err(invalid(pattern));
            }
        }
        for (source, &target) in indices.iter().enumerate() {
            if let (Some(&component), Some(slot)) =
                (value.component(source), self.component_mut(target))
            {
                *slot = component;
            }
        }
        Ok(())
    }
}

impl<V: Vector> Swizzle for V {}

fn parse_pattern(pattern: &str, len: usize, dim: usize) -> Result<Vec<usize>> {
    if pattern.chars().count() != len || len > MAX_PATTERN_LEN {
        return Err(invalid(pattern));
    }

    let mut uses_color = None;
    let mut indices = Vec::with_capacity(len);

    for letter in pattern.chars() {
        let (index, color) = match letter {
            'x' => (0, false),
            'y' => (1, false),
            'z' => (2, false),
            'w' => (3, false),
            'r' => (0, true),
            'g' => (1, true),
            'b' => (2, true),
            'a' => (3, true),
            _ => return Err(invalid(pattern)),
        };
        if *uses_color.get_or_insert(color) != color || index >= dim {
            return Err(invalid(pattern));
        }
        indices.push(index);
    }

    Ok(indices)
}

fn invalid(pattern: &str) -> MathError {
    MathError::InvalidSwizzle {
        pattern: pattern.to_string(),
    }
}
