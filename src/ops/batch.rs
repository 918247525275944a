use ndarray::{ArrayView2, ArrayViewMut2};
use num_traits::Float;

/// Flat dot product of two equally shaped batches.
///
/// x: A 2D array of shape (batch_size, dim).
/// y: A 2D array of shape (batch_size, dim).
/// Returns the scalar sum over every element pair; the squared-error
/// reduction of a difference buffer is `dot_flat(diff, diff)`.
pub fn dot_flat<F: Float>(x: &ArrayView2<'_, F>, y: &ArrayView2<'_, F>) -> F {
    debug_assert_eq!(x.dim(), y.dim());
    x.iter()
        .zip(y.iter())
        .fold(F::zero(), |acc, (&a, &b)| acc + a * b)
}

/// Scaled copy `dst = alpha * src` over a whole batch.
///
/// A pure overwrite: nothing already in `dst` contributes to the result.
pub fn scaled_assign<F: Float>(alpha: F, src: &ArrayView2<'_, F>, dst: &mut ArrayViewMut2<'_, F>) {
    debug_assert_eq!(src.dim(), dst.dim());
    dst.zip_mut_with(src, |d, &s| *d = alpha * s);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{arr2, Array2};

    #[test]
    fn test_dot_flat_sums_every_element() {
        let x = arr2(&[[1.0f32, 2.0], [3.0, 4.0]]);
        let y = arr2(&[[2.0f32, 0.5], [1.0, 0.25]]);
        assert_relative_eq!(dot_flat(&x.view(), &y.view()), 7.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dot_flat_with_itself_is_sum_of_squares() {
        let x = arr2(&[[1.0f32, 2.0, 2.0, 3.0]]);
        assert_relative_eq!(dot_flat(&x.view(), &x.view()), 18.0, epsilon = 1e-6);
    }

    #[test]
    fn test_scaled_assign_overwrites_destination() {
        let src = arr2(&[[1.0f32, -2.0], [0.5, 4.0]]);
        // 기존 값은 결과에 섞이지 않는다
        let mut dst = Array2::<f32>::from_elem((2, 2), 99.0);
        scaled_assign(0.5, &src.view(), &mut dst.view_mut());
        assert_relative_eq!(dst, arr2(&[[0.5, -1.0], [0.25, 2.0]]), epsilon = 1e-6);
    }
}
