//! Fitted models and the final ranking.

use serde::{Deserialize, Serialize};

use crate::VariableSet;

/// A screened regression model for one variable combination.
///
/// `coefficients` has one slot per candidate variable; slots of variables not
/// in the combination hold the `missing` sentinel. `fitted` and `residuals`
/// are compacted to the observations flagged in `observation_mask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Included variables.
    pub variables: VariableSet,
    /// Intercept in raw-variable units.
    pub intercept: f64,
    /// Raw-variable coefficients, one per candidate variable.
    pub coefficients: Vec<f64>,
    /// Sentinel stored for variables outside the combination.
    pub missing: f64,
    /// Correlation between observed and fitted values.
    pub r: f64,
    /// Standard error of the estimate.
    pub standard_error: f64,
    /// Observations used in the fit.
    pub observation_count: usize,
    /// Principal components retained; `0` for a direct least squares fit.
    pub retained_components: usize,
    /// Fitted values over the used observations.
    pub fitted: Vec<f64>,
    /// Residuals (`fitted - observed`) over the used observations.
    pub residuals: Vec<f64>,
    /// One flag per original observation, set when it was used.
    pub observation_mask: Vec<bool>,
}

impl Model {
    /// Coefficient of `variable`, or `None` when it is not in the model.
    #[must_use]
    pub fn coefficient(&self, variable: usize) -> Option<f64> {
        if self.variables.contains(variable) { self.coefficients.get(variable).copied() } else { None }
    }

    /// Number of included variables.
    #[must_use]
    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    /// Coefficient of determination.
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }

    /// Whether the fit went through principal components.
    #[must_use]
    pub const fn uses_components(&self) -> bool {
        self.retained_components > 0
    }
}

/// Models ordered by ascending standard error; rank 1 is the best.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    models: Vec<Model>,
}

impl Ranking {
    /// Wrap models that are already sorted best first.
    #[must_use]
    pub const fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    /// Number of ranked models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Rank 1.
    #[must_use]
    pub fn best(&self) -> Option<&Model> {
        self.models.first()
    }

    /// Model at a 1-based rank.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&Model> {
        rank.checked_sub(1).and_then(|i| self.models.get(i))
    }

    /// `(rank, model)` pairs, best first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Model)> + '_ {
        self.models.iter().enumerate().map(|(i, m)| (i + 1, m))
    }

    /// Ranked models as a slice, best first.
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Consume into the ranked models.
    #[must_use]
    pub fn into_models(self) -> Vec<Model> {
        self.models
    }
}
