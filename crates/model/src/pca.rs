//! Principal component transform of a variable combination.

use ndarray::{Array1, Array2, ArrayView1, s};
use regsearch_math::{EigenStatus, JacobiEigen, mean, pearson, sample_std};

use crate::ModelError;

/// Standardization, correlation eigen structure and component scores for
/// the raw columns of one combination.
///
/// Components are ordered by descending eigenvalue of the correlation matrix.
#[derive(Debug, Clone)]
pub struct PrincipalComponents {
    means: Array1<f64>,
    std_devs: Array1<f64>,
    eigenvalues: Array1<f64>,
    eigenvectors: Array2<f64>,
    standardized: Array2<f64>,
}

impl PrincipalComponents {
    /// Decompose the raw columns `x` (observations x variables).
    ///
    /// # Errors
    /// Returns `ModelError::ZeroVariance` for a constant column and
    /// `ModelError::EigenNotConverged` if the Jacobi solver fails.
    pub fn fit(x: &Array2<f64>) -> Result<Self, ModelError> {
        let (n, k) = x.dim();
        if n < 2 || k == 0 {
            return Err(ModelError::InsufficientDegreesOfFreedom { observations: n, parameters: k });
        }

        let means: Array1<f64> = x.columns().into_iter().map(mean).collect();
        let std_devs: Array1<f64> = x.columns().into_iter().map(sample_std).collect();

        let mut correlation = Array2::zeros((k, k));
        for i in 0..k {
            for j in i..k {
                let r = pearson(x.column(i), x.column(j))?
                    .ok_or(ModelError::ZeroVariance { column: if i == j { i } else { j } })?;
                correlation[[i, j]] = r;
                correlation[[j, i]] = r;
            }
        }

        let mut eigen = JacobiEigen::new(&correlation)?;
        if eigen.solve() != EigenStatus::Converged {
            return Err(ModelError::EigenNotConverged { sweeps: eigen.sweeps() });
        }
        let (Some(eigenvalues), Some(eigenvectors)) = (eigen.eigenvalues(), eigen.eigenvectors())
        else {
            return Err(ModelError::EigenNotConverged { sweeps: eigen.sweeps() });
        };

        let mut standardized = x.to_owned();
        for (mut column, (&m, &sd)) in
            standardized.columns_mut().into_iter().zip(means.iter().zip(std_devs.iter()))
        {
            column.mapv_inplace(|v| (v - m) / sd);
        }

        Ok(Self {
            means,
            std_devs,
            eigenvalues: eigenvalues.clone(),
            eigenvectors: eigenvectors.clone(),
            standardized,
        })
    }

    /// Number of variables (and of available components).
    #[must_use]
    pub fn n_variables(&self) -> usize {
        self.means.len()
    }

    /// Per-variable means.
    #[must_use]
    pub const fn means(&self) -> &Array1<f64> {
        &self.means
    }

    /// Per-variable sample standard deviations.
    #[must_use]
    pub const fn std_devs(&self) -> &Array1<f64> {
        &self.std_devs
    }

    /// Eigenvalues of the correlation matrix, descending.
    #[must_use]
    pub const fn eigenvalues(&self) -> &Array1<f64> {
        &self.eigenvalues
    }

    /// Eigenvectors as columns.
    #[must_use]
    pub const fn eigenvectors(&self) -> &Array2<f64> {
        &self.eigenvectors
    }

    /// Scores on the first `components` components (observations x components).
    ///
    /// `components` is clamped to the number of variables.
    #[must_use]
    pub fn scores(&self, components: usize) -> Array2<f64> {
        let c = components.min(self.n_variables());
        self.standardized.dot(&self.eigenvectors.slice(s![.., ..c]))
    }

    /// Map a fit on component scores back to raw-variable units.
    ///
    /// `component_coefficients` holds one slope per retained component.
    /// Returns the adjusted intercept and one coefficient per variable.
    #[must_use]
    pub fn to_raw(
        &self,
        component_coefficients: ArrayView1<'_, f64>,
        intercept: f64,
    ) -> (f64, Vec<f64>) {
        let c = component_coefficients.len().min(self.n_variables());
        let mut adjusted = intercept;
        let coefficients = (0..self.n_variables())
            .map(|j| {
                let standardized: f64 =
                    (0..c).map(|m| component_coefficients[m] * self.eigenvectors[[j, m]]).sum();
                let raw = standardized / self.std_devs[j];
                adjusted -= raw * self.means[j];
                raw
            })
            .collect();
        (adjusted, coefficients)
    }
}
