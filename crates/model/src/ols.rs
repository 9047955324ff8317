//! Ordinary least squares with coefficient t-statistics.

use ndarray::{Array1, Array2, ArrayView1, s};
use regsearch_math::{inverse, multiply, multiply_vector, pearson, transpose};

use crate::ModelError;

/// Result of an ordinary least squares fit.
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Coefficients; index 0 is the intercept.
    pub coefficients: Array1<f64>,
    /// Fitted values `X b`.
    pub fitted: Array1<f64>,
    /// Residuals `fitted - y`.
    pub residuals: Array1<f64>,
    /// Sum of squared residuals.
    pub sse: f64,
    /// Mean square error `SSE / (n - k - 1)`.
    pub mse: f64,
    /// Correlation between `y` and the fitted values.
    pub r: f64,
    /// Standard error of the estimate, `sqrt(MSE)`.
    pub standard_error: f64,
    /// t-statistic per coefficient, intercept first.
    pub t_statistics: Array1<f64>,
}

impl OlsFit {
    /// Intercept.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.coefficients[0]
    }

    /// Coefficients without the intercept.
    #[must_use]
    pub fn slopes(&self) -> ArrayView1<'_, f64> {
        self.coefficients.slice(s![1..])
    }
}

/// Prepend a column of ones.
#[must_use]
pub fn with_intercept(x: &Array2<f64>) -> Array2<f64> {
    let (n, k) = x.dim();
    let mut design = Array2::ones((n, k + 1));
    design.slice_mut(s![.., 1..]).assign(x);
    design
}

/// Fit `y = X b` by the normal equations `b = (X'X)^-1 X'y`.
///
/// # Arguments
/// * `x` - Design matrix (n x (k+1)) whose first column is all ones
/// * `y` - Response vector (n,)
///
/// # Errors
/// Returns `ModelError::SingularMatrix` if `X'X` cannot be inverted, and
/// `ModelError::InsufficientDegreesOfFreedom` if `n <= k + 1`.
pub fn ordinary_least_squares(x: &Array2<f64>, y: &Array1<f64>) -> Result<OlsFit, ModelError> {
    let (n, p) = x.dim();
    if y.len() != n {
        return Err(ModelError::DimensionMismatch(format!(
            "design has {n} rows but response has {}",
            y.len()
        )));
    }
    if n <= p {
        return Err(ModelError::InsufficientDegreesOfFreedom { observations: n, parameters: p });
    }

    let xt = transpose(x)?;
    let xtx = multiply(&xt, x)?;
    let xty = multiply_vector(&xt, y)?;

    let Some(xtx_inv) = inverse(&xtx)?.inverse else {
        return Err(ModelError::SingularMatrix);
    };

    let coefficients = multiply_vector(&xtx_inv, &xty)?;
    let fitted = multiply_vector(x, &coefficients)?;
    let residuals = &fitted - y;

    let sse = residuals.dot(&residuals);
    let mse = sse / (n - p) as f64;
    let standard_error = mse.sqrt();
    let r = pearson(y.view(), fitted.view())?.unwrap_or(0.0);

    let t_statistics = coefficients
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let se_b = (mse * xtx_inv[[i, i]]).sqrt();
            if se_b > 0.0 {
                b / se_b
            } else if b == 0.0 {
                0.0
            } else {
                b.signum() * f64::INFINITY
            }
        })
        .collect();

    Ok(OlsFit { coefficients, fitted, residuals, sse, mse, r, standard_error, t_statistics })
}
