//! Search configuration.

use crate::ModelError;

/// Minimum usable observations for a combination to be fitted.
pub const MIN_OBSERVATIONS: usize = 6;

/// Residual degrees of freedom below which no further component is added.
pub const MIN_RESIDUAL_DF: usize = 4;

/// Default |t| threshold for a coefficient to count as significant.
pub const DEFAULT_CRITICAL_T: f64 = 1.2;

/// Default size of the top-K model table.
pub const DEFAULT_MAX_COMBINATIONS: usize = 10;

/// How combinations of more than one variable are fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMethod {
    /// Regress on leading principal components of the standardized variables.
    #[default]
    PrincipalComponents,
    /// Regress on the raw variables directly.
    OrdinaryLeastSquares,
}

/// Configuration for [`CombinationSearch`](crate::CombinationSearch).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Capacity of the top-K table.
    pub max_combinations: usize,
    /// |t| threshold; smaller values are not significant.
    pub critical_t: f64,
    /// Cap on retained principal components (None for no cap).
    pub max_components: Option<usize>,
    /// Fitting method for multi-variable combinations.
    pub method: FitMethod,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            critical_t: DEFAULT_CRITICAL_T,
            max_components: None,
            method: FitMethod::default(),
        }
    }
}

impl SearchConfig {
    /// Check the configuration.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` for an empty table, a negative or
    /// non-finite threshold, or a zero component cap.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.max_combinations == 0 {
            return Err(ModelError::InvalidConfig("max_combinations must be at least 1".into()));
        }
        if !self.critical_t.is_finite() || self.critical_t < 0.0 {
            return Err(ModelError::InvalidConfig(format!(
                "critical_t must be finite and non-negative, got {}",
                self.critical_t
            )));
        }
        if self.max_components == Some(0) {
            return Err(ModelError::InvalidConfig("max_components must be at least 1".into()));
        }
        Ok(())
    }
}
