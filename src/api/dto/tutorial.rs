//! DTOs for tutorial endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::application::services::tutorial_service::TITLE_REQUIRED;
use crate::domain::entities::{NewTutorial, Tutorial, TutorialPatch};
use crate::error::AppError;

/// JSON representation of a tutorial.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tutorial> for TutorialItem {
    fn from(t: Tutorial) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            published: t.published,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Request body for `POST /api/tutorials`.
///
/// `published` defaults to `false` when omitted.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateTutorialRequest {
    #[validate(required(message = "Title can not be empty!"))]
    #[validate(custom(function = "validate_title"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub published: Option<bool>,
}

impl TryFrom<CreateTutorialRequest> for NewTutorial {
    type Error = AppError;

    fn try_from(request: CreateTutorialRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let title = request
            .title
            .ok_or_else(|| AppError::bad_request(TITLE_REQUIRED))?;

        Ok(Self {
            title,
            description: request.description,
            published: request.published.unwrap_or(false),
        })
    }
}

/// Request body for `PUT /api/tutorials/{id}`.
///
/// All fields are optional; only provided fields change. Any `id` in the body
/// is ignored.
///
/// # `description` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear description
/// - **String** → set new description
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTutorialRequest {
    pub title: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    pub published: Option<bool>,
}

impl From<UpdateTutorialRequest> for TutorialPatch {
    fn from(request: UpdateTutorialRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            published: request.published,
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(TITLE_REQUIRED)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CreateTutorialRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_defaults_published_to_false() {
        let new = NewTutorial::try_from(parse(json!({ "title": "ionic" }))).unwrap();

        assert_eq!(new.title, "ionic");
        assert!(!new.published);
        assert!(new.description.is_none());
    }

    #[test]
    fn test_create_keeps_explicit_fields() {
        let new = NewTutorial::try_from(parse(json!({
            "title": "Test tutorial",
            "description": "Test tutorial description",
            "published": true
        })))
        .unwrap();

        assert!(new.published);
        assert_eq!(new.description.as_deref(), Some("Test tutorial description"));
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let err = NewTutorial::try_from(parse(json!({ "title": "", "published": true }))).unwrap_err();
        assert_eq!(err.to_string(), TITLE_REQUIRED);
    }

    #[test]
    fn test_create_rejects_whitespace_title() {
        let err = NewTutorial::try_from(parse(json!({ "title": "  \t " }))).unwrap_err();
        assert_eq!(err.to_string(), TITLE_REQUIRED);
    }

    #[test]
    fn test_create_rejects_missing_title() {
        let err = NewTutorial::try_from(CreateTutorialRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), TITLE_REQUIRED);
    }

    #[test]
    fn test_update_description_absent_vs_null() {
        let absent: UpdateTutorialRequest = serde_json::from_value(json!({})).unwrap();
        let null: UpdateTutorialRequest =
            serde_json::from_value(json!({ "description": null })).unwrap();

        assert_eq!(TutorialPatch::from(absent).description, None);
        assert_eq!(TutorialPatch::from(null).description, Some(None));
    }

    #[test]
    fn test_update_ignores_id_field() {
        let request: UpdateTutorialRequest =
            serde_json::from_value(json!({ "id": "other", "published": true })).unwrap();

        let patch = TutorialPatch::from(request);
        assert_eq!(patch.published, Some(true));
        assert!(patch.title.is_none());
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let now = Utc::now();
        let item = TutorialItem::from(Tutorial {
            id: "abc".to_string(),
            title: "react native".to_string(),
            description: None,
            published: false,
            created_at: now,
            updated_at: now,
        });

        let value = serde_json::to_value(item).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["description"], serde_json::Value::Null);
    }
}
