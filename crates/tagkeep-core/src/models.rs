//! Data models for tagkeep.

use serde::{Deserialize, Serialize};

/// A tag record as stored and served.
///
/// The JSON form is exactly `{"id": <int>, "name": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Store-assigned identifier, immutable once created.
    pub id: i64,
    /// Non-empty display name.
    pub name: String,
}

/// Request body for creating a tag.
///
/// `name` is optional at the type level so that a missing field reaches the
/// validator instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateTagRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for a partial tag update.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateTagRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Query parameters for tag search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTagsQuery {
    /// Substring to look for in tag names.
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_serializes_to_id_and_name_only() {
        let tag = Tag {
            id: 1,
            name: "test".to_string(),
        };
        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(value, serde_json::json!({ "id": 1, "name": "test" }));
    }

    #[test]
    fn test_create_request_missing_name() {
        let req: CreateTagRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_none());
    }

    #[test]
    fn test_update_request_ignores_unknown_fields() {
        let req: UpdateTagRequest =
            serde_json::from_str(r#"{"name":"rust","color":"red","id":99}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("rust"));
    }

    #[test]
    fn test_create_request_null_name() {
        let req: CreateTagRequest = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert!(req.name.is_none());
    }
}
