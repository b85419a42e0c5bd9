//! Error types for the statistics routines.
//!
//! Everything detectable is checked at the boundary of each routine, before
//! any heavy computation: a call either returns a complete result or one of
//! these variants, never a structurally valid result filled with NaN.

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Operand shapes are incompatible, e.g. row counts of X and y differ.
    #[error("incompatible dimensions: {0}")]
    DimensionMismatch(String),
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    /// Fewer observations than parameters leaves the residual scale
    /// estimate without a positive divisor.
    #[error("{observations} observations cannot identify {parameters} parameters and a scale")]
    Underdetermined {
        observations: usize,
        parameters: usize,
    },
    #[error("at least {0} rows of observations required")]
    NotEnoughRows(usize),
    #[error("column {0} has zero variance and cannot be normalized")]
    ZeroVariance(usize),
    #[error("empty input vector")]
    EmptyVector,
    #[error("norm order must be a positive integer, got {0}")]
    InvalidNormOrder(u32),
    #[error("negative weight at row {0}")]
    NegativeWeight(usize),
    #[error("negative variance estimate for coefficient {0}")]
    NegativeVariance(usize),
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}
