use lfs_core::errors::{ErrorInfo, LfsError};
use lfs_core::{RandomSource, Sequence, MAX_DOMAIN_VALUE};
use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// Value-domain parameters shared by every generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeParams {
    /// Largest value produced by the regular shapes (inclusive); queries are
    /// drawn from `[0, max_value]` as well.
    #[serde(default = "default_max_value")]
    pub max_value: u64,
    /// The outlier placed at the end of [`Shape::LinearOutlier`] is
    /// `max_value * outlier_factor`.
    #[serde(default = "default_outlier_factor")]
    pub outlier_factor: u64,
}

fn default_max_value() -> u64 {
    2000
}

fn default_outlier_factor() -> u64 {
    100
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
            outlier_factor: default_outlier_factor(),
        }
    }
}

impl ShapeParams {
    /// Value of the trailing outlier, rejecting products outside the domain.
    pub fn outlier_value(&self) -> Result<u64, LfsError> {
        self.max_value
            .checked_mul(self.outlier_factor)
            .filter(|value| *value <= MAX_DOMAIN_VALUE)
            .ok_or_else(|| {
                LfsError::InvalidArgument(
                    ErrorInfo::new("outlier-out-of-domain", "outlier value is not representable")
                        .with_context("max_value", self.max_value)
                        .with_context("outlier_factor", self.outlier_factor),
                )
            })
    }

    /// Checks that every value a generator may emit is representable.
    pub fn validate(&self) -> Result<(), LfsError> {
        if self.max_value > MAX_DOMAIN_VALUE {
            return Err(LfsError::InvalidArgument(
                ErrorInfo::new("max-value-out-of-domain", "max_value is not representable")
                    .with_context("max_value", self.max_value)
                    .with_context("limit", MAX_DOMAIN_VALUE),
            ));
        }
        self.outlier_value().map(|_| ())
    }
}

/// Generates a fresh sequence of `len` elements following `shape`.
pub fn generate<R>(
    shape: Shape,
    len: usize,
    params: &ShapeParams,
    rng: &mut R,
) -> Result<Sequence, LfsError>
where
    R: RandomSource + ?Sized,
{
    generate_into(shape, len, params, rng, Vec::with_capacity(len))
}

/// Like [`generate`], but fills `buffer` so its allocation can be reused
/// across trials. Any previous content is discarded.
pub fn generate_into<R>(
    shape: Shape,
    len: usize,
    params: &ShapeParams,
    rng: &mut R,
    mut buffer: Vec<u64>,
) -> Result<Sequence, LfsError>
where
    R: RandomSource + ?Sized,
{
    if len == 0 {
        return Err(LfsError::InvalidArgument(
            ErrorInfo::new("empty-sequence", "cannot generate a zero-length sequence")
                .with_context("shape", shape.slug()),
        ));
    }
    params.validate()?;

    buffer.clear();
    let max_value = params.max_value as f64;
    match shape {
        Shape::Random => {
            buffer.extend((0..len).map(|_| rng.next_uniform(0, params.max_value)));
        }
        Shape::Linear => fill_power(&mut buffer, len, max_value, 1),
        Shape::LinearOutlier => {
            fill_power(&mut buffer, len, max_value, 1);
            let outlier = params.outlier_value()?;
            if let Some(last) = buffer.last_mut() {
                *last = outlier;
            }
        }
        Shape::Quadratic => fill_power(&mut buffer, len, max_value, 2),
        Shape::Cubic => fill_power(&mut buffer, len, max_value, 3),
        Shape::Log => {
            // Normalised so the final element lands exactly on max_value.
            let denominator = ((len + 1) as f64).ln();
            buffer.extend((0..len).map(|index| {
                let y = ((index + 2) as f64).ln() / denominator;
                to_value(y * max_value, params.max_value)
            }));
        }
    }
    buffer.sort_unstable();
    Sequence::new(buffer)
}

fn fill_power(buffer: &mut Vec<u64>, len: usize, max_value: f64, exponent: i32) {
    let span = (len - 1).max(1) as f64;
    buffer.extend((0..len).map(|index| {
        let x = index as f64 / span;
        to_value(x.powi(exponent) * max_value, max_value as u64)
    }));
}

fn to_value(y: f64, max_value: u64) -> u64 {
    (y as u64).min(max_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_curves_start_at_zero_and_end_at_max() {
        let mut buffer = Vec::new();
        fill_power(&mut buffer, 5, 2000.0, 2);
        assert_eq!(buffer, vec![0, 125, 500, 1125, 2000]);
    }

    #[test]
    fn single_element_curve_is_zero() {
        let mut buffer = Vec::new();
        fill_power(&mut buffer, 1, 2000.0, 3);
        assert_eq!(buffer, vec![0]);
    }
}
