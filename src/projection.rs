//! Orthogonal projection decomposition.

use crate::error::{Error, Result};
use crate::utils::solve_symmetric_multi;
use crate::Float;
use ndarray::{Array2, ArrayBase, Data, Ix2};
use serde::{Deserialize, Serialize};

/// Decomposition of `Y` into its projection onto the column space of `X`
/// and the orthogonal remainder, see [`project`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection<F> {
    coordinates: Array2<F>,
    parallel: Array2<F>,
    orthogonal: Array2<F>,
}

impl<F: Float> Projection<F> {
    /// Coordinates `B = (XᵀX)⁻¹XᵀY` of the projection in the basis given by
    /// the columns of `X`, with shape `(p, q)`.
    pub fn coordinates(&self) -> &Array2<F> {
        &self.coordinates
    }

    /// The projection `P = XB` of `Y` onto the column space of `X`.
    pub fn parallel(&self) -> &Array2<F> {
        &self.parallel
    }

    /// The orthogonal remainder `Q = Y - P`, satisfying `XᵀQ ≈ 0`.
    pub fn orthogonal(&self) -> &Array2<F> {
        &self.orthogonal
    }
}

/// Projects `y` with shape `(n, q)` onto the column space of `x` with shape
/// `(n, p)`.
///
/// The coordinates solve the normal equations `(XᵀX) B = XᵀY` through a
/// symmetric factorization. When `x` has linearly dependent columns the
/// system is resolved through the pseudo-inverse instead, yielding the
/// minimum-norm coordinates; the projection itself stays well defined and
/// the result is never NaN-laden.
///
/// The parts satisfy `parallel + orthogonal == y` up to floating-point
/// rounding.
pub fn project<F: Float>(
    x: &ArrayBase<impl Data<Elem = F>, Ix2>,
    y: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Result<Projection<F>> {
    if x.nrows() != y.nrows() {
        return Err(Error::DimensionMismatch(format!(
            "basis matrix has {} rows but the projected matrix has {}",
            x.nrows(),
            y.nrows()
        )));
    }

    let gram = x.t().dot(x);
    let moment = x.t().dot(y);
    let coordinates = solve_symmetric_multi(&gram, &moment)?;

    let parallel = x.dot(&coordinates);
    let orthogonal = y - &parallel;

    Ok(Projection {
        coordinates,
        parallel,
        orthogonal,
    })
}
