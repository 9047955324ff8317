#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/regsearch/regsearch-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod fill;
pub use fill::fill_missing;

mod frame;
pub use frame::{dataset_from_frame, load_csv};

mod error;
pub use error::UtilsError;
