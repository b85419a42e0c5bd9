use ndarray::NdFloat;
use ndarray_linalg::{Lapack, Scalar};
use num_traits::{FromPrimitive, NumCast};
use std::iter::Sum;

/// Floating point numbers accepted by every routine in this crate.
///
/// Collects the requirements imposed by `ndarray` on one side and by the
/// LAPACK-backed factorizations of `ndarray-linalg` on the other. Implemented
/// for `f32` and `f64`; `f64` is the reference precision.
pub trait Float:
    NdFloat + FromPrimitive + Sum + Default + Scalar<Real = Self> + Lapack
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}
impl Float for f64 {}
