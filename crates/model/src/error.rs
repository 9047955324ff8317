//! Error types for regression and search.

use regsearch_math::MathError;
use regsearch_primitives::VariableSet;

/// Errors that can occur while fitting or searching.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// `X'X` could not be inverted.
    #[error("matrix inversion failed: X'X is singular")]
    SingularMatrix,

    /// Not enough observations to estimate the parameters.
    #[error("insufficient degrees of freedom: {observations} observations for {parameters} parameters")]
    InsufficientDegreesOfFreedom {
        /// Observations available.
        observations: usize,
        /// Parameters to estimate, intercept included.
        parameters: usize,
    },

    /// A correlation could not be formed because a column is constant.
    #[error("zero variance in column {column}")]
    ZeroVariance {
        /// Column position within the combination.
        column: usize,
    },

    /// Jacobi sweeps ran out before convergence.
    #[error("eigen decomposition did not converge after {sweeps} sweeps")]
    EigenNotConverged {
        /// Sweeps performed.
        sweeps: usize,
    },

    /// No combination survived screening.
    #[error("no combination survived screening")]
    NoModels,

    /// Fatal error while evaluating one combination.
    #[error("combination {variables}: {source}")]
    Combination {
        /// The offending combination.
        variables: VariableSet,
        /// Underlying failure.
        #[source]
        source: Box<ModelError>,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dimension mismatch.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
}

impl ModelError {
    /// Attach the combination being evaluated.
    #[must_use]
    pub fn in_combination(self, variables: &VariableSet) -> Self {
        if matches!(self, Self::Combination { .. }) {
            return self;
        }
        Self::Combination { variables: variables.clone(), source: Box::new(self) }
    }

    /// The combination that triggered the error, if known.
    #[must_use]
    pub const fn combination(&self) -> Option<&VariableSet> {
        match self {
            Self::Combination { variables, .. } => Some(variables),
            _ => None,
        }
    }

    /// Returns whether this is a numerical failure (singular matrix,
    /// constant column or non-convergence).
    #[must_use]
    pub fn is_numerical(&self) -> bool {
        match self {
            Self::SingularMatrix | Self::ZeroVariance { .. } | Self::EigenNotConverged { .. } => {
                true
            }
            Self::Combination { source, .. } => source.is_numerical(),
            _ => false,
        }
    }
}
