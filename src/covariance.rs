//! Cross covariance and correlation matrices.

use crate::error::{Error, Result};
use crate::Float;
use ndarray::{Array2, ArrayBase, Axis, Data, Ix2};

/// Calculates the cross covariance matrix of `a` with shape `(n, p)` and `b`
/// with shape `(n, q)`, observed on the same `n` rows.
///
/// Both matrices are centered by their column means, then
/// `R = ZaᵀZb / (n - 1)` with shape `(p, q)`. Requires `n ≥ 2` and equal row
/// counts. `covariance(a, b)` equals the transpose of `covariance(b, a)`.
pub fn covariance<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix2>,
    b: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Result<Array2<F>> {
    cross_moment(a, b, false)
}

/// Calculates the cross correlation matrix of `a` and `b`.
///
/// Like [`covariance`], but each centered column is scaled to unit Euclidean
/// norm before the inner product, so the entries already lie in `[-1, 1]`
/// and no further division takes place. A column with zero variance cannot
/// be normalized and is reported as [`Error::ZeroVariance`].
pub fn correlation<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix2>,
    b: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Result<Array2<F>> {
    cross_moment(a, b, true)
}

fn cross_moment<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix2>,
    b: &ArrayBase<impl Data<Elem = F>, Ix2>,
    normalize: bool,
) -> Result<Array2<F>> {
    let n = a.nrows();
    if b.nrows() != n {
        return Err(Error::DimensionMismatch(format!(
            "first matrix has {} rows but the second has {}",
            n,
            b.nrows()
        )));
    }
    if n < 2 {
        return Err(Error::NotEnoughRows(2));
    }

    let mut za = a - &a.mean_axis(Axis(0)).unwrap();
    let mut zb = b - &b.mean_axis(Axis(0)).unwrap();

    if normalize {
        normalize_columns(&mut za, a)?;
        normalize_columns(&mut zb, b)?;
    }

    let r = za.t().dot(&zb);
    Ok(if normalize { r } else { r / F::cast(n - 1) })
}

/// Scales every column to unit norm, flagging columns whose centered norm is
/// indistinguishable from rounding noise of the original column magnitude.
fn normalize_columns<F: Float>(
    z: &mut Array2<F>,
    source: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Result<()> {
    let tol = num_traits::Float::sqrt(F::cast(z.nrows())) * F::epsilon();
    for j in 0..z.ncols() {
        let mut col = z.column_mut(j);
        let norm = num_traits::Float::sqrt(col.dot(&col));
        let magnitude = source
            .column(j)
            .iter()
            .fold(F::zero(), |acc, v| acc.max(num_traits::Float::abs(*v)));
        if norm <= magnitude * tol {
            return Err(Error::ZeroVariance(j));
        }
        col.mapv_inplace(|v| v / norm);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};
    use ndarray_rand::{rand_distr::Uniform, RandomExt};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn covariance_of_collinear_columns() {
        let a = array![[1., 2.], [3., 4.], [5., 6.]];
        let cov = covariance(&a, &a).unwrap();
        assert_abs_diff_eq!(cov, array![[4., 4.], [4., 4.]], epsilon = 1e-12);
    }

    #[test]
    fn diagonal_matches_sample_variance() {
        let mut rng = SmallRng::seed_from_u64(42);
        let a = Array2::random_using((50, 4), Uniform::new(-2., 2.), &mut rng);
        let cov = covariance(&a, &a).unwrap();
        let var = a.var_axis(Axis(0), 1.);
        let diag = Array1::from_iter((0..4).map(|j| cov[(j, j)]));
        assert_abs_diff_eq!(diag, var, epsilon = 1e-10);
    }

    #[test]
    fn covariance_transposes_consistently() {
        let mut rng = SmallRng::seed_from_u64(7);
        let a = Array2::random_using((30, 3), Uniform::new(-1., 1.), &mut rng);
        let b = Array2::random_using((30, 5), Uniform::new(-1., 1.), &mut rng);

        let ab = covariance(&a, &b).unwrap();
        let ba = covariance(&b, &a).unwrap();
        assert_abs_diff_eq!(ab, ba.t(), epsilon = 1e-12);
    }

    #[test]
    fn self_correlation_has_unit_diagonal() {
        let mut rng = SmallRng::seed_from_u64(3);
        let a = Array2::random_using((50, 4), Uniform::new(-2., 2.), &mut rng);
        let corr = correlation(&a, &a).unwrap();
        for j in 0..4 {
            assert_abs_diff_eq!(corr[(j, j)], 1., epsilon = 1e-12);
        }
    }

    #[test]
    fn correlation_of_perfectly_linear_columns_is_one() {
        let a = array![[1.], [3.], [5.]];
        let b = array![[10.], [30.], [50.]];
        let corr = correlation(&a, &b).unwrap();
        assert_abs_diff_eq!(corr[(0, 0)], 1., epsilon = 1e-12);
    }

    #[test]
    fn zero_variance_column_is_rejected_in_correlation_mode() {
        let a = array![[1., 5.], [2., 5.], [3., 5.]];
        let err = correlation(&a, &a).unwrap_err();
        assert!(matches!(err, Error::ZeroVariance(1)));
    }

    #[test]
    fn zero_variance_column_is_fine_in_covariance_mode() {
        let a = array![[1., 5.], [2., 5.], [3., 5.]];
        let cov = covariance(&a, &a).unwrap();
        assert_abs_diff_eq!(cov, array![[1., 0.], [0., 0.]], epsilon = 1e-12);
    }

    #[test]
    fn single_row_is_rejected() {
        let a = array![[1., 2.]];
        let err = covariance(&a, &a).unwrap_err();
        assert!(matches!(err, Error::NotEnoughRows(2)));
    }

    #[test]
    fn mismatched_row_counts_are_rejected() {
        let a = array![[1., 2.], [3., 4.]];
        let b = array![[1.], [2.], [3.]];
        let err = covariance(&a, &b).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch(_)));
    }
}
