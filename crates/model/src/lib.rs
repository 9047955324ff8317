#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/regsearch/regsearch-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::{
    DEFAULT_CRITICAL_T, DEFAULT_MAX_COMBINATIONS, FitMethod, MIN_OBSERVATIONS, MIN_RESIDUAL_DF,
    SearchConfig,
};

mod ols;
pub use ols::{OlsFit, ordinary_least_squares, with_intercept};

mod pca;
pub use pca::PrincipalComponents;

mod table;
pub use table::{Admission, ModelTable};

mod search;
pub use search::{CombinationSearch, Evaluation, Rejection, SearchContext, search};

mod error;
pub use error::ModelError;

/// Re-export commonly used types.
pub mod prelude {
    pub use regsearch_primitives::{Dataset, Model, Ranking, VariableSet};

    pub use super::{CombinationSearch, FitMethod, ModelError, SearchConfig, search};
}
