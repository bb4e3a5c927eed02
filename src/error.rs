use thiserror::Error;

/// Top-level error type for the girih construction engine.
#[derive(Debug, Error)]
pub enum GirihError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Tile(#[from] TileError),
}

/// Errors raised by the geometry kernel and primitive constructors.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{op} needs exactly {expected} values, got {got}")]
    Arity {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{what} must be a finite number")]
    NonFinite { what: &'static str },

    #[error("circle radius must not be negative, got {0}")]
    NegativeRadius(f64),
}

/// Errors related to the construction graph.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("expected a {expected}, found a {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("intersection point index {index} is out of range, element has {len} points")]
    OutOfRange { index: usize, len: usize },

    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("unknown {kind} id {id}")]
    UnknownId { kind: &'static str, id: u32 },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// Errors related to the bounded tile region.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("top{axis}:{top} is bigger than bottom{axis}:{bottom}")]
    InvalidBounds { axis: char, top: f64, bottom: f64 },
}

/// Convenience type alias for results using [`GirihError`].
pub type Result<T> = std::result::Result<T, GirihError>;
