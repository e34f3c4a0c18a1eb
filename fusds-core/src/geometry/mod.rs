mod array;
mod element;

/// 3-dimensional column vector.
pub type Vector3 = nalgebra::Vector3<f64>;
/// 3-dimensional point.
pub type Point3 = nalgebra::Point3<f64>;

pub use array::*;
pub use element::*;
