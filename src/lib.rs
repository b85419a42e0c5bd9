//! `lstats` provides a small set of dense linear-algebra statistics routines
//! on [`ndarray`](https://crates.io/crates/ndarray) matrices:
//!
//! - Ordinary and weighted least-squares fitting with residual scale and
//!   standard errors ([`LeastSquares`])
//! - Orthogonal projection decomposition ([`project`])
//! - Cross covariance and correlation matrices ([`covariance`], [`correlation`])
//! - Eigenvalues of symmetric matrices ([`symmetric_eigenvalues`])
//! - The Lp norm ([`lp_norm`]) and the stabilized log-sum-exp
//!   ([`log_sum_exp`], [`cumulative_log_sum_exp`])
//!
//! Every routine is a pure, synchronous function over caller-supplied data.
//! Degenerate inputs (too few observations, zero-variance columns, empty
//! vectors, incompatible shapes) are rejected up front with a typed [`Error`]
//! instead of silently producing NaN or infinite results.
//!
//! Factorizations are delegated to LAPACK through
//! [`ndarray-linalg`](https://crates.io/crates/ndarray-linalg): symmetric
//! systems go through a Bunch-Kaufman solve with an SVD pseudo-inverse
//! fallback, and symmetric eigenvalues through `syev`.
//!
//! ## Examples
//!
//! ```rust
//! use lstats::LeastSquares;
//! use ndarray::array;
//!
//! let x = array![[1., 0.], [1., 1.], [1., 2.]];
//! let y = array![0., 0., 2.];
//! let fit = LeastSquares::new().fit(&x, &y).unwrap();
//! println!("coefficients: {}", fit.coefficients());
//! ```

mod covariance;
mod eigen;
mod error;
mod float;
mod least_squares;
mod log_sum_exp;
mod norm;
mod projection;
mod utils;

pub use covariance::{correlation, covariance};
pub use eigen::symmetric_eigenvalues;
pub use error::{Error, Result};
pub use float::Float;
pub use least_squares::{LeastSquares, LeastSquaresFit};
pub use log_sum_exp::{cumulative_log_sum_exp, log_sum_exp};
pub use norm::lp_norm;
pub use projection::{project, Projection};
