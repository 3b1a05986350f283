//! json-normalize - Recursive normalization of embedded JSON strings
//!
//! This crate provides utilities for unwrapping JSON values whose string
//! entries are themselves encoded JSON documents. Every string-valued entry
//! of an object that parses as JSON is replaced by its decoded value, one
//! level of unwrapping per pass, descending through nested objects only.

pub mod normalize;
pub mod parse_embedded;

// Re-exports for convenience
pub use normalize::{normalize, normalize_in_place, normalize_map};
pub use parse_embedded::parse_embedded;
