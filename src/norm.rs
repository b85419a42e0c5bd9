//! Lp norms of vectors.

use crate::error::{Error, Result};
use crate::Float;
use ndarray::{ArrayBase, Data, Ix1};

/// Calculates the Lp norm `(Σ|x_i|^p)^(1/p)` of a vector for any positive
/// integer order `p`.
///
/// `p = 2` is the Euclidean norm and `p = 1` the sum of absolute values;
/// every order goes through the same general formula. The norm of the empty
/// vector is zero. `p = 0` is rejected as [`Error::InvalidNormOrder`].
pub fn lp_norm<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix1>, p: u32) -> Result<F> {
    if p == 0 {
        return Err(Error::InvalidNormOrder(p));
    }
    let sum = x.iter().map(|v| num_traits::Float::powi(num_traits::Float::abs(*v), p as i32)).sum::<F>();
    Ok(num_traits::Float::powf(sum, F::one() / F::cast(p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn euclidean_norm_of_three_four_is_five() {
        assert_abs_diff_eq!(lp_norm(&array![3., 4.], 2).unwrap(), 5., epsilon = 1e-12);
    }

    #[test]
    fn first_order_sums_absolute_values() {
        assert_abs_diff_eq!(
            lp_norm(&array![3., -4.], 1).unwrap(),
            7.,
            epsilon = 1e-12
        );
    }

    #[test]
    fn higher_orders_follow_the_general_formula() {
        assert_abs_diff_eq!(
            lp_norm(&array![3., -4.], 3).unwrap(),
            91f64.powf(1. / 3.),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            lp_norm(&array![1., 1., 1., 1.], 4).unwrap(),
            2f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn empty_vector_has_zero_norm() {
        let x = Array1::<f64>::zeros(0);
        assert_abs_diff_eq!(lp_norm(&x, 2).unwrap(), 0., epsilon = 1e-12);
    }

    #[test]
    fn order_zero_is_rejected() {
        let err = lp_norm(&array![1., 2.], 0).unwrap_err();
        assert!(matches!(err, Error::InvalidNormOrder(0)));
    }
}
