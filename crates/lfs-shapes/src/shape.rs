use std::fmt;
use std::str::FromStr;

use lfs_core::errors::{ErrorInfo, LfsError};
use serde::{Deserialize, Serialize};

/// Distribution pattern of a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    /// Uniform random values, sorted.
    Random,
    /// Evenly spaced values from zero to the maximum.
    Linear,
    /// Linear, except that the last element is a huge outlier.
    LinearOutlier,
    /// Values follow `x^2`.
    Quadratic,
    /// Values follow `x^3`.
    Cubic,
    /// Values follow a logarithm, rising fast then flattening.
    Log,
}

impl Shape {
    /// Every shape, in reporting order.
    pub const ALL: [Shape; 6] = [
        Shape::Random,
        Shape::Linear,
        Shape::LinearOutlier,
        Shape::Quadratic,
        Shape::Cubic,
        Shape::Log,
    ];

    /// Display name, also used for output file names.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Random => "Random",
            Shape::Linear => "Linear",
            Shape::LinearOutlier => "Linear Outlier",
            Shape::Quadratic => "Quadratic",
            Shape::Cubic => "Cubic",
            Shape::Log => "Log",
        }
    }

    /// Kebab-case identifier accepted by [`FromStr`] and serde.
    pub fn slug(self) -> &'static str {
        match self {
            Shape::Random => "random",
            Shape::Linear => "linear",
            Shape::LinearOutlier => "linear-outlier",
            Shape::Quadratic => "quadratic",
            Shape::Cubic => "cubic",
            Shape::Log => "log",
        }
    }

    /// Stable position of the shape in [`Shape::ALL`], used to derive RNG substreams.
    pub fn ordinal(self) -> u64 {
        Shape::ALL
            .iter()
            .position(|shape| *shape == self)
            .unwrap_or_default() as u64
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = LfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Shape::ALL
            .into_iter()
            .find(|shape| shape.slug() == wanted)
            .ok_or_else(|| {
                LfsError::InvalidArgument(
                    ErrorInfo::new("unknown-shape", "no shape with that name")
                        .with_context("name", s)
                        .with_hint(
                            "expected one of random, linear, linear-outlier, quadratic, cubic, log",
                        ),
                )
            })
    }
}
