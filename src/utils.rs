//! Shared solvers: symmetric solve with a pseudo-inverse fallback.

use crate::error::Result;
use crate::Float;
use ndarray::{s, Array1, Array2, ArrayView2, Axis, OwnedRepr};
use ndarray_linalg::{BKFactorized, FactorizeH, SolveH, SVD};

/// Calculates the Moore-Penrose pseudo-inverse of a matrix through its SVD.
///
/// Singular values below `cond` are treated as zero; the default threshold is
/// `max(s) * max(n, m) * eps`, matching the usual numpy/scipy convention.
pub(crate) fn pinv<F: Float>(x: ArrayView2<F>, cond: Option<F>) -> Result<Array2<F>> {
    let (opt_u, s, opt_vh) = x.svd(true, true)?;
    let u = opt_u.unwrap();
    let vh = opt_vh.unwrap();

    let smax = s.iter().cloned().fold(F::zero(), |acc, v| acc.max(v));
    let cond =
        cond.unwrap_or_else(|| smax * F::cast(x.nrows().max(x.ncols())) * F::epsilon());

    let rank = s.iter().filter(|&&v| v > cond).count();

    let mut ucut = u.slice_move(s![.., ..rank]);
    ucut /= &s.slice(s![..rank]);

    Ok(vh.slice(s![..rank, ..]).t().dot(&ucut.t()))
}

/// Solves `a x = b` for symmetric `a` through a Bunch-Kaufman factorization.
///
/// A singular or near-singular system is resolved through the pseudo-inverse
/// instead (the minimum-norm solution): both the factorization error and a
/// non-finite backsubstitution result trigger the fallback, so callers always
/// receive a finite answer for consistent systems.
pub(crate) fn solve_symmetric<F: Float>(a: &Array2<F>, b: &Array1<F>) -> Result<Array1<F>> {
    let factorized: std::result::Result<BKFactorized<OwnedRepr<F>>, _> = a.factorizeh();
    if let Ok(x) = factorized.and_then(|f| f.solveh(b)) {
        if x.iter().all(|v| v.is_finite()) {
            return Ok(x);
        }
    }
    Ok(pinv(a.view(), None)?.dot(b))
}

/// Column-wise variant of [`solve_symmetric`]: solves `a x = b` for each
/// column of `b`, factorizing `a` once.
pub(crate) fn solve_symmetric_multi<F: Float>(a: &Array2<F>, b: &Array2<F>) -> Result<Array2<F>> {
    let factorized: std::result::Result<BKFactorized<OwnedRepr<F>>, _> = a.factorizeh();
    if let Ok(factorized) = factorized {
        let mut out = Array2::zeros(b.dim());
        let solved = b.axis_iter(Axis(1)).enumerate().try_for_each(|(j, col)| {
            factorized.solveh(&col.to_owned()).map(|x| {
                out.column_mut(j).assign(&x);
            })
        });
        if solved.is_ok() && out.iter().all(|v| v.is_finite()) {
            return Ok(out);
        }
    }
    Ok(pinv(a.view(), None)?.dot(b))
}
