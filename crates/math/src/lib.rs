#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/regsearch/regsearch-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod matrix;
pub use matrix::{
    EPS, InversionMode, Inversion, gauss_jordan, inverse, multiply, multiply_vector, solve,
    sort_indices, transpose,
};

mod eigen;
pub use eigen::{EigenStatus, JacobiEigen, MAX_SWEEPS};

mod stats;
pub use stats::{mean, pearson, sample_std};

mod error;
pub use error::MathError;
