//! Input data with missing-value sentinels.

use ndarray::{Array1, Array2, ArrayView1};

/// Errors raised while assembling a [`Dataset`].
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Row or name count mismatch.
    #[error("dimension mismatch for {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected count.
        expected: usize,
        /// Actual count.
        actual: usize,
        /// What was being counted.
        context: &'static str,
    },

    /// No observations or no variables.
    #[error("dataset needs at least one observation and one variable")]
    EmptyData,
}

/// Whether `value` is missing under `sentinel`. NaN always counts as missing.
#[must_use]
pub fn is_missing(value: f64, sentinel: f64) -> bool {
    value.is_nan() || value == sentinel
}

/// Independent variables (observations x variables) and the dependent series.
///
/// Each side carries its own missing-value sentinel.
#[derive(Debug, Clone)]
pub struct Dataset {
    independent: Array2<f64>,
    dependent: Array1<f64>,
    independent_missing: f64,
    dependent_missing: f64,
    names: Vec<String>,
}

impl Dataset {
    /// Create a dataset with default variable names `x1..xk`.
    ///
    /// # Errors
    /// Returns error if the row counts differ or either side is empty.
    pub fn new(
        independent: Array2<f64>,
        dependent: Array1<f64>,
        independent_missing: f64,
        dependent_missing: f64,
    ) -> Result<Self, DatasetError> {
        if independent.nrows() == 0 || independent.ncols() == 0 {
            return Err(DatasetError::EmptyData);
        }
        if dependent.len() != independent.nrows() {
            return Err(DatasetError::DimensionMismatch {
                expected: independent.nrows(),
                actual: dependent.len(),
                context: "dependent",
            });
        }

        let names = (1..=independent.ncols()).map(|i| format!("x{i}")).collect();
        Ok(Self { independent, dependent, independent_missing, dependent_missing, names })
    }

    /// Replace the variable names.
    ///
    /// # Errors
    /// Returns error if the name count differs from the variable count.
    pub fn with_names(mut self, names: Vec<String>) -> Result<Self, DatasetError> {
        if names.len() != self.n_variables() {
            return Err(DatasetError::DimensionMismatch {
                expected: self.n_variables(),
                actual: names.len(),
                context: "variable names",
            });
        }
        self.names = names;
        Ok(self)
    }

    /// Number of observations.
    #[must_use]
    pub fn n_observations(&self) -> usize {
        self.independent.nrows()
    }

    /// Number of candidate independent variables.
    #[must_use]
    pub fn n_variables(&self) -> usize {
        self.independent.ncols()
    }

    /// Independent matrix (observations x variables).
    #[must_use]
    pub const fn independent(&self) -> &Array2<f64> {
        &self.independent
    }

    /// One independent variable as a column view.
    #[must_use]
    pub fn variable(&self, index: usize) -> ArrayView1<'_, f64> {
        self.independent.column(index)
    }

    /// Dependent series.
    #[must_use]
    pub const fn dependent(&self) -> &Array1<f64> {
        &self.dependent
    }

    /// Sentinel marking missing independent values.
    #[must_use]
    pub const fn independent_missing(&self) -> f64 {
        self.independent_missing
    }

    /// Sentinel marking missing dependent values.
    #[must_use]
    pub const fn dependent_missing(&self) -> f64 {
        self.dependent_missing
    }

    /// Variable names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of one variable.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Whether the independent value at (`row`, `variable`) is missing.
    #[must_use]
    pub fn is_missing_independent(&self, row: usize, variable: usize) -> bool {
        is_missing(self.independent[[row, variable]], self.independent_missing)
    }

    /// Whether the dependent value at `row` is missing.
    #[must_use]
    pub fn is_missing_dependent(&self, row: usize) -> bool {
        is_missing(self.dependent[row], self.dependent_missing)
    }
}
