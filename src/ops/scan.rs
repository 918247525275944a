use ndarray::{ArrayView1, ArrayViewMut1};
use num_traits::Float;

/// Left-to-right running sum of `src` into `dst`.
///
/// `dst[j] = src[0] + ... + src[j]`. No clamping and no normalization:
/// when the inputs are not probabilities the result may leave `[0, 1]`.
pub fn prefix_sum_row<F: Float>(src: ArrayView1<'_, F>, mut dst: ArrayViewMut1<'_, F>) {
    debug_assert_eq!(src.len(), dst.len());
    let mut acc = F::zero();
    for j in 0..src.len() {
        acc = acc + src[j];
        dst[j] = acc;
    }
}

/// Right-to-left running sum of `src` into `dst`.
///
/// `dst[j] = src[j] + ... + src[len - 1]` — the adjoint of
/// [`prefix_sum_row`] as a linear operator.
pub fn suffix_sum_row<F: Float>(src: ArrayView1<'_, F>, mut dst: ArrayViewMut1<'_, F>) {
    debug_assert_eq!(src.len(), dst.len());
    let mut acc = F::zero();
    for j in (0..src.len()).rev() {
        acc = acc + src[j];
        dst[j] = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{arr1, Array1};

    #[test]
    fn test_prefix_sum_row() {
        let src = arr1(&[1.0f32, 1.0, 1.0, 1.0]);
        let mut dst = Array1::<f32>::zeros(4);
        prefix_sum_row(src.view(), dst.view_mut());
        assert_relative_eq!(dst, arr1(&[1.0, 2.0, 3.0, 4.0]), epsilon = 1e-6);
    }

    #[test]
    fn test_prefix_sum_last_element_is_total() {
        let src = arr1(&[0.3f32, -0.1, 0.7, 0.2, -0.4]);
        let mut dst = Array1::<f32>::zeros(5);
        prefix_sum_row(src.view(), dst.view_mut());
        assert_relative_eq!(dst[4], src.sum(), epsilon = 1e-6);
    }

    #[test]
    fn test_prefix_sum_monotone_for_nonnegative_input() {
        let src = arr1(&[0.0f32, 0.5, 0.0, 1.25, 0.25]);
        let mut dst = Array1::<f32>::zeros(5);
        prefix_sum_row(src.view(), dst.view_mut());
        for j in 1..5 {
            assert!(dst[j] >= dst[j - 1]);
        }
    }

    #[test]
    fn test_suffix_sum_row() {
        let src = arr1(&[1.0f32, 2.0, 2.0, 3.0]);
        let mut dst = Array1::<f32>::zeros(4);
        suffix_sum_row(src.view(), dst.view_mut());
        assert_relative_eq!(dst, arr1(&[8.0, 7.0, 5.0, 3.0]), epsilon = 1e-6);
    }

    #[test]
    fn test_suffix_sum_is_adjoint_of_prefix_sum() {
        // <prefix(x), y> == <x, suffix(y)>
        let x = arr1(&[0.2f32, -0.6, 1.1, 0.4]);
        let y = arr1(&[0.5f32, 0.3, -0.8, 0.9]);

        let mut px = Array1::<f32>::zeros(4);
        prefix_sum_row(x.view(), px.view_mut());
        let mut sy = Array1::<f32>::zeros(4);
        suffix_sum_row(y.view(), sy.view_mut());

        let lhs: f32 = px.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
        let rhs: f32 = x.iter().zip(sy.iter()).map(|(a, b)| a * b).sum();
        assert_relative_eq!(lhs, rhs, epsilon = 1e-5);
    }
}
