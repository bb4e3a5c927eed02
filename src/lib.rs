pub mod construction;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pattern;

pub use error::{GirihError, Result};
