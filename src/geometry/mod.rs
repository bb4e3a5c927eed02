pub mod curve;
pub mod element;
pub mod tile;
pub mod transform;

pub use curve::{Circle, Line};
pub use element::ConstructionElement;
pub use tile::Tile;
pub use transform::Transform;
