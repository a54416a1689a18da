//! Tutorial entity.

use chrono::{DateTime, Utc};

/// A persisted tutorial.
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// `title` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tutorial {
    /// Builds a fresh record from creation input, stamping both timestamps
    /// with `now`.
    pub fn from_new(id: String, new_tutorial: NewTutorial, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new_tutorial.title,
            description: new_tutorial.description,
            published: new_tutorial.published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update in place. Only supplied fields change.
    pub fn apply(&mut self, patch: TutorialPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
        self.updated_at = now;
    }
}

/// Input data for creating a tutorial.
///
/// Defaults are already resolved here: `published` is a plain `bool`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTutorial {
    pub title: String,
    pub description: Option<String>,
    pub published: bool,
}

/// Partial update of a tutorial.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TutorialPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub published: Option<bool>,
}

impl TutorialPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.published.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample() -> Tutorial {
        let now = Utc::now();
        Tutorial::from_new(
            "4882200e85ab4c1d9e000001".to_string(),
            NewTutorial {
                title: "react native".to_string(),
                description: Some("first course".to_string()),
                published: true,
            },
            now,
        )
    }

    #[test]
    fn test_from_new_sets_both_timestamps() {
        let tutorial = sample();

        assert_eq!(tutorial.created_at, tutorial.updated_at);
        assert_eq!(tutorial.title, "react native");
        assert!(tutorial.published);
    }

    #[test]
    fn test_apply_partial_keeps_other_fields() {
        let mut tutorial = sample();
        let later = tutorial.created_at + Duration::seconds(5);

        tutorial.apply(
            TutorialPatch {
                published: Some(false),
                ..Default::default()
            },
            later,
        );

        assert_eq!(tutorial.title, "react native");
        assert_eq!(tutorial.description.as_deref(), Some("first course"));
        assert!(!tutorial.published);
        assert_eq!(tutorial.updated_at, later);
        assert_ne!(tutorial.created_at, tutorial.updated_at);
    }

    #[test]
    fn test_apply_clears_description() {
        let mut tutorial = sample();

        tutorial.apply(
            TutorialPatch {
                description: Some(None),
                ..Default::default()
            },
            Utc::now(),
        );

        assert!(tutorial.description.is_none());
    }

    #[test]
    fn test_apply_never_touches_id() {
        let mut tutorial = sample();
        let id = tutorial.id.clone();

        tutorial.apply(
            TutorialPatch {
                title: Some("ionic".to_string()),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(tutorial.id, id);
        assert_eq!(tutorial.title, "ionic");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(TutorialPatch::default().is_empty());
        assert!(
            !TutorialPatch {
                published: Some(true),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
