use ndarray::ArrayViewMut1;
use num_traits::Float;

/// Writes the 0/1 step target for one sample into `row`.
///
/// Bins below the label index stay 0, bins at and above it become 1.
/// `label == 0` yields an all-one row, `label == row.len()` an all-zero
/// row. Callers validate the label range; here it is a debug contract.
pub fn fill_step_row<F: Float>(mut row: ArrayViewMut1<'_, F>, label: usize) {
    debug_assert!(label <= row.len());
    for j in 0..row.len() {
        row[j] = if j < label { F::zero() } else { F::one() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn step_vec(k: usize, label: usize) -> Vec<f32> {
        let mut row = Array1::<f32>::zeros(k);
        fill_step_row(row.view_mut(), label);
        row.to_vec()
    }

    #[test]
    fn test_step_rises_at_label() {
        assert_eq!(step_vec(4, 2), vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(step_vec(5, 1), vec![0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_step_boundary_labels() {
        // label 0 은 전 구간 1, label K 는 전 구간 0
        assert_eq!(step_vec(4, 0), vec![1.0; 4]);
        assert_eq!(step_vec(4, 4), vec![0.0; 4]);
    }

    #[test]
    fn test_step_every_label_is_monotone() {
        let k = 7;
        for label in 0..=k {
            let row = step_vec(k, label);
            for j in 0..k {
                let expected = if j < label { 0.0 } else { 1.0 };
                assert_eq!(row[j], expected);
            }
        }
    }
}
