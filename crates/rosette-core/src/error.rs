//! Error types for buffer construction and rose aggregation.

/// Structural errors rejected by the core before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosetteError {
    #[error("pixel buffer of {len} triplets does not match {width}x{height}")]
    InvalidDimensions { width: u32, height: u32, len: usize },
    #[error("petal count must be at least 1, got {0}")]
    InvalidPetalCount(usize),
}

pub type Result<T> = std::result::Result<T, RosetteError>;
