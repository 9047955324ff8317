//! Expected coefficient signs.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::VariableSet;

/// Sign of a zero-order correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Sign {
    /// Positive correlation.
    #[display("+")]
    Positive,
    /// Negative correlation.
    #[display("-")]
    Negative,
    /// Zero or undefined correlation.
    #[display("?")]
    Undetermined,
}

impl Sign {
    /// Sign of `value`; zero and NaN are undetermined.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Undetermined
        }
    }

    /// Whether `value` is strictly of this sign. Nothing agrees with
    /// [`Sign::Undetermined`].
    #[must_use]
    pub fn agrees(self, value: f64) -> bool {
        match self {
            Self::Positive => value > 0.0,
            Self::Negative => value < 0.0,
            Self::Undetermined => false,
        }
    }
}

/// Per-variable expected signs, fixed for the duration of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignVector {
    correlations: Vec<Option<f64>>,
    signs: Vec<Sign>,
}

impl SignVector {
    /// Build from zero-order correlations; `None` marks an undefined correlation.
    #[must_use]
    pub fn from_correlations(correlations: Vec<Option<f64>>) -> Self {
        let signs = correlations.iter().map(|r| r.map_or(Sign::Undetermined, Sign::of)).collect();
        Self { correlations, signs }
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.signs.len()
    }

    /// Whether there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }

    /// Expected sign of one variable.
    #[must_use]
    pub fn sign(&self, variable: usize) -> Sign {
        self.signs.get(variable).copied().unwrap_or(Sign::Undetermined)
    }

    /// Zero-order correlation of one variable with the dependent series.
    #[must_use]
    pub fn correlation(&self, variable: usize) -> Option<f64> {
        self.correlations.get(variable).copied().flatten()
    }

    /// First variable whose coefficient contradicts its expected sign.
    ///
    /// `coefficients` runs parallel to `variables.indices()`.
    #[must_use]
    pub fn first_disagreement(
        &self,
        variables: &VariableSet,
        coefficients: &[f64],
    ) -> Option<usize> {
        variables
            .iter()
            .zip(coefficients)
            .find(|&(variable, &b)| !self.sign(variable).agrees(b))
            .map(|(variable, _)| variable)
    }
}
