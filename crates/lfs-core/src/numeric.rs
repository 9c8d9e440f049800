//! Small numeric helpers used by the interpolating strategies and the
//! statistics code.

/// Restricts `value` to `[min, max]`.
///
/// `min` wins when the bounds are inverted.
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    let capped = if value > max { max } else { value };
    if capped < min {
        min
    } else {
        capped
    }
}

/// Linear interpolation between `a` and `b` at parameter `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Line `value = slope * index + intercept` through two points of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Rise per index step.
    pub slope: f64,
    /// Value at index zero.
    pub intercept: f64,
}

impl LineFit {
    /// Fits the line through `(min_index, min_value)` and `(max_index, max_value)`.
    ///
    /// Callers guarantee `min_index < max_index`.
    pub fn through(min_index: usize, min_value: u64, max_index: usize, max_value: u64) -> Self {
        let slope = (max_value as f64 - min_value as f64) / (max_index - min_index) as f64;
        let intercept = min_value as f64 - slope * min_index as f64;
        Self { slope, intercept }
    }

    /// Index at which the line reaches `value`, unrounded.
    pub fn invert(&self, value: f64) -> f64 {
        (value - self.intercept) / self.slope
    }
}
