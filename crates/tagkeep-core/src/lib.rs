//! # tagkeep-core
//!
//! Core types, traits, and validation for the tagkeep service.
//!
//! This crate provides the tag model, the request payloads, the validation
//! rules applied before any write, and the [`TagRepository`] trait that
//! record stores implement.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
pub use validation::{validate_search_query, validate_tag_name};
