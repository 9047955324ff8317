#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/regsearch/regsearch-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod dataset;
pub use dataset::{Dataset, DatasetError, is_missing};

mod variables;
pub use variables::VariableSet;

mod sign;
pub use sign::{Sign, SignVector};

mod model;
pub use model::{Model, Ranking};
