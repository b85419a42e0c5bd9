//! Ordinary and weighted least-squares fitting.

use crate::error::{Error, Result};
use crate::utils::{pinv, solve_symmetric};
use crate::Float;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use serde::{Deserialize, Serialize};

/// Configuration of a least-squares fit.
///
/// The default configuration fits ordinary least squares and computes the
/// full field set. Supplying weights turns the fit into weighted least
/// squares with `W = diag(w)`, which minimizes the weighted residual sum of
/// squares; `with_extended(false)` restricts the result to coefficients,
/// residuals, scale and information matrix, skipping the fitted values and
/// standard errors.
///
/// For a response `y` (length n) and design matrix `x` (n rows, p columns)
/// the fit solves the normal equations `(XᵀWX) b = XᵀWy` with a symmetric
/// solve, falling back to the pseudo-inverse when the system is singular.
/// The residual scale is estimated as `eᵀWe / (n - p)`, which requires
/// `n > p`; anything else is rejected as [`Error::Underdetermined`].
///
/// For fixed inputs the result is deterministic, there is no randomness in
/// any step of the computation.
///
/// ## Examples
///
/// ```rust
/// use lstats::LeastSquares;
/// use ndarray::array;
///
/// let x = array![[1., 0.], [1., 1.], [1., 2.]];
/// let y = array![0., 0., 2.];
///
/// let fit = LeastSquares::new().fit(&x, &y).unwrap();
/// let weighted = LeastSquares::new()
///     .with_weights(array![1., 2., 1.])
///     .fit(&x, &y)
///     .unwrap();
/// assert_eq!(fit.coefficients().len(), weighted.coefficients().len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeastSquares<F> {
    weights: Option<Array1<F>>,
    reduced: bool,
}

impl<F: Float> LeastSquares<F> {
    /// Create a default least-squares configuration: ordinary least squares
    /// with the extended result fields.
    pub fn new() -> Self {
        LeastSquares {
            weights: None,
            reduced: false,
        }
    }

    /// Weight each observation by the given non-negative factor.
    pub fn with_weights(mut self, weights: Array1<F>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Configure whether fitted values and standard errors are computed.
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.reduced = !extended;
        self
    }

    /// Fit the model to a design matrix `x` with shape `(n, p)` and a
    /// response `y` of length `n`.
    pub fn fit(
        &self,
        x: &ArrayBase<impl Data<Elem = F>, Ix2>,
        y: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<LeastSquaresFit<F>> {
        let (n, p) = x.dim();
        if y.len() != n {
            return Err(Error::DimensionMismatch(format!(
                "design matrix has {} rows but the response has {} entries",
                n,
                y.len()
            )));
        }
        if let Some(w) = &self.weights {
            if w.len() != n {
                return Err(Error::DimensionMismatch(format!(
                    "design matrix has {} rows but the weight vector has {} entries",
                    n,
                    w.len()
                )));
            }
            if let Some(i) = w.iter().position(|v| *v < F::zero()) {
                return Err(Error::NegativeWeight(i));
            }
        }
        if n <= p {
            return Err(Error::Underdetermined {
                observations: n,
                parameters: p,
            });
        }

        // normal equations: information = XᵀWX, moment = XᵀWy
        let (information, moment) = match &self.weights {
            Some(w) => {
                let xw = x * &w.view().insert_axis(Axis(1));
                (xw.t().dot(x), xw.t().dot(y))
            }
            None => (x.t().dot(x), x.t().dot(y)),
        };

        let coefficients = solve_symmetric(&information, &moment)?;
        let fitted = x.dot(&coefficients);
        let residuals = y - &fitted;

        let weighted_rss = match &self.weights {
            Some(w) => residuals
                .iter()
                .zip(w.iter())
                .map(|(e, weight)| *weight * *e * *e)
                .sum(),
            None => residuals.dot(&residuals),
        };
        let scale = weighted_rss / F::cast(n - p);
        let information = information / scale;

        let standard_errors = if self.reduced {
            None
        } else {
            let covariance = pinv(information.view(), None)?;
            let mut errors = Array1::zeros(p);
            for j in 0..p {
                let variance = covariance[(j, j)];
                if variance < F::zero() {
                    return Err(Error::NegativeVariance(j));
                }
                errors[j] = num_traits::Float::sqrt(variance);
            }
            Some(errors)
        };

        Ok(LeastSquaresFit {
            coefficients,
            residuals,
            scale,
            information,
            fitted: if self.reduced { None } else { Some(fitted) },
            standard_errors,
        })
    }
}

/// Result of a least-squares fit.
///
/// `fitted` and `standard_errors` are only present for the extended field
/// set (the default); see [`LeastSquares::with_extended`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeastSquaresFit<F> {
    coefficients: Array1<F>,
    residuals: Array1<F>,
    scale: F,
    information: Array2<F>,
    fitted: Option<Array1<F>>,
    standard_errors: Option<Array1<F>>,
}

impl<F: Float> LeastSquaresFit<F> {
    /// The estimated coefficient vector `b`.
    pub fn coefficients(&self) -> &Array1<F> {
        &self.coefficients
    }

    /// Residuals `y - Xb`.
    pub fn residuals(&self) -> &Array1<F> {
        &self.residuals
    }

    /// Residual variance estimate `eᵀWe / (n - p)`.
    pub fn scale(&self) -> F {
        self.scale
    }

    /// Information matrix for the coefficients, `XᵀWX / scale`. Its
    /// pseudo-inverse approximates the coefficient covariance matrix.
    pub fn information(&self) -> &Array2<F> {
        &self.information
    }

    /// Fitted values `Xb`; `None` for the reduced field set.
    pub fn fitted(&self) -> Option<&Array1<F>> {
        self.fitted.as_ref()
    }

    /// Coefficient standard errors; `None` for the reduced field set.
    pub fn standard_errors(&self) -> Option<&Array1<F>> {
        self.standard_errors.as_ref()
    }

    /// Apply the fitted coefficients to new rows.
    pub fn predict(&self, x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array1<F> {
        x.dot(&self.coefficients)
    }
}
