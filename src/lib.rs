//! `htools` is a semi-modular toolkit of libraries for staggered-grid
//! hydrodynamics output analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use htools_utils as utils;

#[cfg(feature = "fields")]
#[cfg_attr(docsrs, doc(cfg(feature = "fields")))]
#[doc(inline)]
pub use htools_fields as fields;
