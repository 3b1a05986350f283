//! Recursive normalization of embedded JSON strings.
//!
//! Provides the normalization routine in two variants: a purely functional
//! form that builds a new value, and a mutating form that updates the input
//! in place. Both apply the same entry rules.

mod normalize;
mod normalize_in_place;

pub use normalize::{normalize, normalize_map};
pub use normalize_in_place::normalize_in_place;
