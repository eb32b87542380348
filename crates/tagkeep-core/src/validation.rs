//! Request validation for tag writes and searches.
//!
//! Validation runs before any store access; a failing payload never reaches
//! the record store.

use crate::defaults::TAG_NAME_MAX_LEN;
use crate::error::{Error, Result};
use crate::models::{CreateTagRequest, UpdateTagRequest};

/// Validate a tag name.
///
/// Rules:
/// - Must be present
/// - Must be non-empty after trimming surrounding whitespace
/// - At most [`TAG_NAME_MAX_LEN`] characters after trimming
///
/// Returns the trimmed name to persist.
pub fn validate_tag_name(name: Option<&str>) -> Result<String> {
    let name = name
        .map(str::trim)
        .ok_or_else(|| Error::Validation("name is required".to_string()))?;

    if name.is_empty() {
        return Err(Error::Validation("name cannot be empty".to_string()));
    }
    if name.chars().count() > TAG_NAME_MAX_LEN {
        return Err(Error::Validation(format!(
            "name must be {} characters or less",
            TAG_NAME_MAX_LEN
        )));
    }

    Ok(name.to_string())
}

/// Validate a search query parameter and return the trimmed query.
pub fn validate_search_query(q: Option<&str>) -> Result<String> {
    match q.map(str::trim) {
        Some(q) if !q.is_empty() => Ok(q.to_string()),
        _ => Err(Error::Validation("search query 'q' cannot be empty".to_string())),
    }
}

impl CreateTagRequest {
    /// Validate the payload, returning the name to persist.
    pub fn validate(&self) -> Result<String> {
        validate_tag_name(self.name.as_deref())
    }
}

impl UpdateTagRequest {
    /// Validate the payload, returning the name to persist.
    ///
    /// `name` is the only mutable field, so an update without it is rejected
    /// rather than treated as a no-op.
    pub fn validate(&self) -> Result<String> {
        validate_tag_name(self.name.as_deref())
    }
}
