mod hexagon;
mod square;

pub use hexagon::{HexagonFrame, HexagonTemplate};
pub use square::SquareTemplate;
