use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum length of an idea, in characters.
pub const MAX_CONTENT_LEN: usize = 1000;

/// A single captured idea, as stored in the hosted `ideas` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdeaError {
    #[error("idea content is empty")]
    Empty,
    #[error("idea content is {len} characters, the maximum is {max}")]
    TooLong { len: usize, max: usize },
}

/// Validate idea text before it is sent to the remote table.
///
/// Returns the trimmed slice; the trimmed form is what gets persisted.
pub fn validate_content(content: &str) -> Result<&str, IdeaError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(IdeaError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_CONTENT_LEN {
        return Err(IdeaError::TooLong {
            len,
            max: MAX_CONTENT_LEN,
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_ordinary_content() {
        assert_eq!(validate_content("  remember the milk \n"), Ok("remember the milk"));
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert_eq!(validate_content(""), Err(IdeaError::Empty));
        assert_eq!(validate_content("   \n\t "), Err(IdeaError::Empty));
    }

    #[test]
    fn rejects_overlong_content() {
        let long = "a".repeat(MAX_CONTENT_LEN + 1);
        assert_eq!(
            validate_content(&long),
            Err(IdeaError::TooLong {
                len: MAX_CONTENT_LEN + 1,
                max: MAX_CONTENT_LEN
            })
        );
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 1000 multi-byte characters are exactly at the limit
        let cjk = "想".repeat(MAX_CONTENT_LEN);
        assert_eq!(validate_content(&cjk), Ok(cjk.as_str()));
    }

    #[test]
    fn idea_round_trips_through_table_json() {
        let row = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "content": "try the new espresso place",
            "created_at": "2026-02-14T09:30:00Z"
        }"#;
        let idea: Idea = serde_json::from_str(row).unwrap();
        assert_eq!(idea.content, "try the new espresso place");
        let back = serde_json::to_string(&idea).unwrap();
        let again: Idea = serde_json::from_str(&back).unwrap();
        assert_eq!(idea, again);
    }
}
