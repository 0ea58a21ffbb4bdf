use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot add two points (resulting w = {w})")]
    InvalidAddition { w: f64 },
    #[error("cannot subtract a point from a vector (resulting w = {w})")]
    InvalidSubtraction { w: f64 },
    #[error("cannot multiply a {}x{} matrix by a {}x{} matrix", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,
    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("index ({row}, {col}) out of bounds for a {}x{} matrix", .shape.0, .shape.1)]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
    #[error("expected a square matrix, got {}x{}", .shape.0, .shape.1)]
    NotSquare { shape: (usize, usize) },
    #[error("matrix is singular")]
    Singular,
    #[error("{value} cannot be represented by the matrix element type")]
    LossyConversion { value: f64 },
    #[error("element ({row}, {col}) cannot be represented as f64")]
    ElementOutOfRange { row: usize, col: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
