//! Schema inference module
//!
//! Derives a fixed SQL column type for every field of the first input record.
//!
//! # Features
//!
//! - **Type Inference**: Maps a JSON value to a SQL type tag
//! - **Type Mapping**: Immutable field → type table built once per stream
//! - **Sorted Keys**: Deterministic column ordering shared by every renderer

mod inference;
mod types;

pub use inference::{build_type_mapping, infer_type, sorted_keys};
pub use types::{SqlType, TypeMapping};
