//! Tag HTTP handlers.
//!
//! Provides the search, read, create and update endpoints for tags. Writes
//! are validated before the store is touched, and every failure is reported
//! through [`ApiError`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::{ApiError, AppState};
use tagkeep_core::logging::{ops, subsystems};
use tagkeep_core::{
    validate_search_query, CreateTagRequest, Error, SearchTagsQuery, Tag, UpdateTagRequest,
};

/// Parse an id path segment.
///
/// Anything that is not a positive integer cannot name a stored tag, so it is
/// reported the same way as an unknown id. That includes segments axum could
/// not decode at all (invalid percent-encoded UTF-8).
fn parse_tag_id(segment: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let raw = match segment {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!(subsystem = subsystems::API, error = %rejection, "Undecodable tag id");
            return Err(Error::NotFound("Tag not found".to_string()).into());
        }
    };
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::NotFound(format!("Tag '{}' not found", raw)).into())
}

/// Search tags by name substring.
///
/// # Query Parameters
/// - `q`: substring to match (required, non-empty)
///
/// # Returns
/// - 200 OK with the matching tags ordered by id
/// - 404 Not Found if nothing matches
/// - 422 Unprocessable Entity if `q` is missing or empty
pub async fn search_tags(
    State(state): State<AppState>,
    query: Result<Query<SearchTagsQuery>, QueryRejection>,
) -> Result<Json<Vec<Tag>>, ApiError> {
    let Query(query) = query?;
    let q = validate_search_query(query.q.as_deref())?;
    let tags = state.tags.search(&q).await?;

    // An empty match set is an error, not an empty collection.
    if tags.is_empty() {
        debug!(subsystem = subsystems::API, op = ops::SEARCH, query = %q, "No tags matched");
        return Err(Error::NotFound(format!("No tags match '{}'", q)).into());
    }
    Ok(Json(tags))
}

/// Get a tag by id.
///
/// # Returns
/// - 200 OK with the tag
/// - 404 Not Found if the id is unknown
pub async fn get_tag(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Tag>, ApiError> {
    let id = parse_tag_id(id)?;
    let tag = state
        .tags
        .get(id)
        .await?
        .ok_or(Error::TagNotFound(id))?;
    Ok(Json(tag))
}

/// Create a new tag.
///
/// # Request Body
/// `{ "name": "<non-empty>" }`
///
/// # Returns
/// - 201 Created with the stored tag
/// - 422 Unprocessable Entity if `name` is missing or empty
pub async fn create_tag(
    State(state): State<AppState>,
    payload: Result<Json<CreateTagRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Tag>), ApiError> {
    let Json(req) = payload?;
    let name = req.validate()?;
    let tag = state.tags.create(&name).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// Update an existing tag.
///
/// # Request Body
/// `{ "name": "<non-empty>" }`
///
/// # Returns
/// - 200 OK with the updated tag
/// - 404 Not Found if the id is unknown
/// - 422 Unprocessable Entity if `name` is missing or empty
pub async fn update_tag(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateTagRequest>, JsonRejection>,
) -> Result<Json<Tag>, ApiError> {
    let Json(req) = payload?;
    // Rejected payloads never reach the store, whether or not the id exists.
    let name = req.validate()?;
    let id = parse_tag_id(id)?;

    let tag = state
        .tags
        .update(id, &name)
        .await?
        .ok_or(Error::TagNotFound(id))?;
    Ok(Json(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(raw: &str) -> Result<Path<String>, PathRejection> {
        Ok(Path(raw.to_string()))
    }

    #[test]
    fn test_parse_tag_id_accepts_positive_integers() {
        assert_eq!(parse_tag_id(segment("1")).unwrap(), 1);
        assert_eq!(parse_tag_id(segment("9000")).unwrap(), 9000);
    }

    #[test]
    fn test_parse_tag_id_rejects_as_not_found() {
        for raw in ["0", "-1", "abc", "1.5", "", "99999999999999999999"] {
            match parse_tag_id(segment(raw)) {
                Err(ApiError::NotFound(_)) => {}
                other => panic!("Expected NotFound for {:?}, got {:?}", raw, other),
            }
        }
    }
}
