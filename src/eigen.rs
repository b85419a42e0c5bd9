//! Eigenvalues of symmetric matrices.

use crate::error::{Error, Result};
use crate::Float;
use ndarray::{Array1, ArrayBase, Data, Ix2};
use ndarray_linalg::{EigValsh, UPLO};

/// Calculates the eigenvalues of the real symmetric matrix `a`, in ascending
/// order.
///
/// The input is assumed symmetric and only its lower triangle is referenced;
/// for a non-symmetric input the result is whatever LAPACK computes for the
/// symmetric matrix spanned by that triangle, it is not symmetrized or
/// checked. Non-square input is rejected.
pub fn symmetric_eigenvalues<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Result<Array1<F>> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Ok(a.eigvalsh(UPLO::Lower)?)
}
