pub mod distance_2d;
pub mod intersect_2d;
pub mod tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous matrix for 2D affine transforms.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Absolute tolerance for raw floating-point comparisons in the kernel.
pub const EPSILON: f64 = 1e-8;

/// Default number of decimal digits used when deduplicating intersection points.
pub const DEFAULT_PRECISION: u32 = 1;
