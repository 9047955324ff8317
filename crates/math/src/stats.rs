//! Summary statistics used to build correlation matrices.

use ndarray::ArrayView1;

use crate::MathError;

/// Arithmetic mean; `0.0` for empty input.
#[must_use]
pub fn mean(x: ArrayView1<'_, f64>) -> f64 {
    x.mean().unwrap_or(0.0)
}

/// Sample standard deviation (divisor `n - 1`); `0.0` below two values.
#[must_use]
pub fn sample_std(x: ArrayView1<'_, f64>) -> f64 {
    let n = x.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(x);
    let ss: f64 = x.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Pearson correlation by the raw-score formula.
///
/// ```text
/// r = (n Σxy - Σx Σy) / sqrt((n Σx² - (Σx)²) (n Σy² - (Σy)²))
/// ```
///
/// Returns `Ok(None)` when the denominator vanishes (a constant series).
///
/// # Errors
/// Returns error if the inputs are empty or of different lengths.
pub fn pearson(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<Option<f64>, MathError> {
    if x.is_empty() {
        return Err(MathError::EmptyData);
    }
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch { expected: x.len(), actual: y.len() });
    }

    let n = x.len() as f64;
    let (mut sx, mut sy, mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y.iter()) {
        sx += a;
        sy += b;
        sxx += a * a;
        syy += b * b;
        sxy += a * b;
    }

    let spread = (n * sxx - sx * sx) * (n * syy - sy * sy);
    if spread <= 0.0 || !spread.is_finite() {
        return Ok(None);
    }
    Ok(Some((n * sxy - sx * sy) / spread.sqrt()))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    use super::*;

    #[test]
    fn mean_and_std() {
        let x = array![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(x.view()), 5.0);
        assert_relative_eq!(sample_std(x.view()), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(sample_std(array![1.0].view()), 0.0);
    }

    #[test]
    fn pearson_perfect_and_inverse() {
        let x = array![1.0, 2.0, 3.0, 4.0];
        let up = array![3.0, 5.0, 7.0, 9.0];
        let down = array![8.0, 6.0, 4.0, 2.0];
        assert_relative_eq!(pearson(x.view(), up.view()).unwrap().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            pearson(x.view(), down.view()).unwrap().unwrap(),
            -1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn pearson_known_value() {
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = array![2.0, 1.0, 4.0, 3.0, 5.0];
        assert_relative_eq!(pearson(x.view(), y.view()).unwrap().unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn pearson_constant_series_is_undefined() {
        let x = array![1.0, 2.0, 3.0];
        let flat = array![4.0, 4.0, 4.0];
        assert!(pearson(x.view(), flat.view()).unwrap().is_none());
    }

    #[test]
    fn pearson_checks_lengths() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![1.0, 2.0];
        assert!(pearson(x.view(), y.view()).is_err());
        let empty = Array1::<f64>::zeros(0);
        assert!(pearson(empty.view(), empty.view()).is_err());
    }
}
