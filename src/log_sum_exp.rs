//! Numerically stable log-sum-exp.

use crate::error::{Error, Result};
use crate::Float;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use std::cmp::Ordering;

/// Calculates `log(Σ exp(x_i))` without overflowing for large entries.
///
/// Entries are folded in descending order with the two-term recurrence
/// `log(exp(a) + exp(b)) = max(a, b) + log1p(exp(-|a - b|))`, which never
/// exponentiates a positive argument; inputs like `[700, 701, 702]` return a
/// finite value where direct exponentiation would overflow.
///
/// The empty vector is rejected as [`Error::EmptyVector`]; a single entry is
/// returned unchanged.
pub fn log_sum_exp<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<F> {
    let scan = descending_scan(x)?;
    Ok(scan[scan.len() - 1])
}

/// Cumulative variant of [`log_sum_exp`]: returns the whole sequence of
/// running log-sum-exp values.
///
/// The sequence is reported in the descending order used internally, not in
/// input order; callers that need to match entries to input positions must
/// track the sorting permutation themselves. The last element equals
/// [`log_sum_exp`] of the full vector.
pub fn cumulative_log_sum_exp<F: Float>(
    x: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Result<Array1<F>> {
    descending_scan(x)
}

fn descending_scan<F: Float>(x: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<Array1<F>> {
    if x.is_empty() {
        return Err(Error::EmptyVector);
    }

    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    let mut scan = Array1::zeros(sorted.len());
    scan[0] = sorted[0];
    for j in 1..sorted.len() {
        let acc = scan[j - 1];
        scan[j] = sorted[j].max(acc) + num_traits::Float::exp(-num_traits::Float::abs(sorted[j] - acc)).ln_1p();
    }
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn matches_direct_evaluation_for_small_inputs() {
        let x = array![1., 2., 3.];
        let expected = (1f64.exp() + 2f64.exp() + 3f64.exp()).ln();
        assert_abs_diff_eq!(log_sum_exp(&x).unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(log_sum_exp(&x).unwrap(), 3.40760596444438, epsilon = 1e-10);
    }

    #[test]
    fn stays_finite_where_direct_exponentiation_overflows() {
        let x = array![700., 701., 702.];
        let result: f64 = log_sum_exp(&x).unwrap();
        assert!(result.is_finite());
        // lse(700, 701, 702) = 702 + lse(-2, -1, 0)
        let expected = 702. + (1f64 + (-1f64).exp() + (-2f64).exp()).ln();
        assert_abs_diff_eq!(result, expected, epsilon = 1e-10);
    }

    #[test]
    fn single_entry_is_returned_unchanged() {
        assert_abs_diff_eq!(log_sum_exp(&array![-3.5]).unwrap(), -3.5, epsilon = 0.);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = log_sum_exp(&Array1::<f64>::zeros(0)).unwrap_err();
        assert!(matches!(err, Error::EmptyVector));
    }

    #[test]
    fn cumulative_scan_of_equal_entries() {
        // lse of j copies of zero is log(j)
        let scan = cumulative_log_sum_exp(&array![0., 0., 0.]).unwrap();
        assert_abs_diff_eq!(scan, array![0., 2f64.ln(), 3f64.ln()], epsilon = 1e-12);
    }

    #[test]
    fn cumulative_scan_starts_at_maximum_and_is_nondecreasing() {
        let x = array![2., 3., 1., -0.5];
        let scan = cumulative_log_sum_exp(&x).unwrap();

        assert_eq!(scan.len(), x.len());
        assert_abs_diff_eq!(scan[0], 3., epsilon = 0.);
        for j in 1..scan.len() {
            assert!(scan[j] >= scan[j - 1]);
        }
        assert_abs_diff_eq!(
            scan[scan.len() - 1],
            log_sum_exp(&x).unwrap(),
            epsilon = 1e-12
        );
    }
}
