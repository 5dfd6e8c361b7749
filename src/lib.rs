//! varcombine - policy-driven deep merge for variable documents
//!
//! This crate combines any number of JSON-like documents into one, with
//! later documents taking precedence over earlier ones. Nested mappings
//! merge deeply or override whole depending on the `recursive` option,
//! and colliding sequences are combined under one of six `list_merge`
//! policies. Inputs are never modified; every merge builds new values.

pub mod combine;
pub mod error;
pub mod flatten;
pub mod merge;
pub mod policy;
pub mod resolve;

pub use combine::{combine, combine_with};
pub use error::MergeError;
pub use flatten::flatten;
pub use merge::merge_hash;
pub use policy::{ListMerge, MergeOptions};
pub use resolve::{FullyResolved, Resolver};
