pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Vector requires at least one coordinate")]
    EmptyCoordinates,
    #[error("Dimension Mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Cannot normalize a vector with zero magnitude")]
    ZeroMagnitude,
    #[error("Angle is undefined when either vector has zero magnitude")]
    UndefinedAngle,
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use utils::{cosine_similarity, euclidean_distance, generate_random_vectors};
pub use vector::Vector;
