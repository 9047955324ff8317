//! # regsearch
//!
//! Best-subset regression search with principal-component fits.
//!
//! This crate provides a unified interface to the regsearch crates.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `math`: Matrix inversion, eigen solver and statistics
//! - `model`: Least squares, principal components and the combination search
//! - `utils`: Data loading
//! - `cli`: The `regsearch` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use regsearch::model::prelude::*;
//!
//! let ranking = search(&dataset, SearchConfig::default())?;
//! println!("best: {}", ranking.best().unwrap().variables);
//! ```

#![doc(issue_tracker_base_url = "https://github.com/regsearch/regsearch-rs/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use regsearch_primitives as primitives;
#[cfg(feature = "math")]
#[doc(inline)]
pub use regsearch_math as math;
#[cfg(feature = "model")]
#[doc(inline)]
pub use regsearch_model as model;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use regsearch_utils as utils;
