#![deny(missing_docs)]
#![doc = "Generators producing non-decreasing sequences of a requested length in one of several distribution shapes."]

mod generators;
mod shape;

pub use generators::{generate, generate_into, ShapeParams};
pub use shape::Shape;
