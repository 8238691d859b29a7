//! Post submission validation
//!
//! Declarative per-field constraints over the submission payload. Failures
//! surface as one message per offending field for field-level display and
//! are never escalated to a fatal error.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::content::Language;

/// A post submission as received from a form or the CLI
///
/// Tags and related posts are carried as ids; resolution to full tag values
/// happens after validation. The language field is a closed enum, so a
/// malformed language never reaches validation in the first place.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostForm {
    #[validate(length(min = 7, message = "Title should be at least 7 characters long"))]
    pub title: String,

    #[validate(length(min = 5, message = "Slug should be at least 5 characters long"))]
    pub slug: String,

    #[validate(length(min = 25, message = "Content should be at least 25 characters long"))]
    pub content: String,

    #[serde(default)]
    pub summary: Option<String>,

    #[validate(url(message = "Must be a valid URL"))]
    #[serde(default)]
    pub featured_image: Option<String>,

    #[serde(default)]
    pub featured_image_description: Option<String>,

    #[serde(default)]
    pub featured_image_credit: Option<String>,

    #[serde(default)]
    pub meta_title: Option<String>,

    #[serde(default)]
    pub meta_description: Option<String>,

    #[validate(
        length(min = 1, message = "At least one tag is required"),
        custom(function = positive_tag_ids)
    )]
    pub tags: Vec<u64>,

    #[serde(default)]
    pub featured: Option<bool>,

    pub language: Language,

    #[serde(default)]
    pub related_posts: Option<Vec<u64>>,
}

/// Tag references must be positive integers
fn positive_tag_ids(tags: &[u64]) -> Result<(), ValidationError> {
    if tags.iter().any(|id| *id == 0) {
        let mut error = ValidationError::new("positive_tag_ids");
        error.message = Some("Tag ids must be positive integers".into());
        return Err(error);
    }
    Ok(())
}

/// One reportable validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field path as submitted
    pub field: String,
    /// Human-readable message
    pub message: String,
}

/// Validate a submission, returning per-field messages on failure
pub fn validate_post(form: &PostForm) -> Result<(), Vec<FieldError>> {
    form.validate().map_err(|errors| field_errors(&errors))
}

/// Flatten validator output into one (field, message) pair per failure,
/// ordered by field name
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();

    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(list) = kind {
            for error in list {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                out.push(FieldError {
                    field: field.to_string(),
                    message,
                });
            }
        }
    }

    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PostForm {
        PostForm {
            title: "Learning Rust in public".to_string(),
            slug: "learning-rust-in-public".to_string(),
            content: "A body easily longer than twenty-five characters.".to_string(),
            summary: None,
            featured_image: None,
            featured_image_description: None,
            featured_image_credit: None,
            meta_title: None,
            meta_description: None,
            tags: vec![1, 2],
            featured: None,
            language: Language::En,
            related_posts: None,
        }
    }

    fn messages_for(form: &PostForm, field: &str) -> Vec<String> {
        match validate_post(form) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .into_iter()
                .filter(|error| error.field == field)
                .map(|error| error.message)
                .collect(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_post(&valid_form()).is_ok());
    }

    #[test]
    fn test_short_title_is_rejected() {
        let mut form = valid_form();
        form.title = "Tiny".to_string();
        assert_eq!(
            messages_for(&form, "title"),
            vec!["Title should be at least 7 characters long".to_string()]
        );
    }

    #[test]
    fn test_short_slug_and_content_are_rejected() {
        let mut form = valid_form();
        form.slug = "abc".to_string();
        form.content = "too short".to_string();

        assert_eq!(
            messages_for(&form, "slug"),
            vec!["Slug should be at least 5 characters long".to_string()]
        );
        assert_eq!(
            messages_for(&form, "content"),
            vec!["Content should be at least 25 characters long".to_string()]
        );
    }

    #[test]
    fn test_at_least_one_tag_is_required() {
        let mut form = valid_form();
        form.tags = Vec::new();
        assert_eq!(
            messages_for(&form, "tags"),
            vec!["At least one tag is required".to_string()]
        );
    }

    #[test]
    fn test_zero_tag_id_is_rejected() {
        let mut form = valid_form();
        form.tags = vec![1, 0];
        assert_eq!(
            messages_for(&form, "tags"),
            vec!["Tag ids must be positive integers".to_string()]
        );
    }

    #[test]
    fn test_featured_image_must_be_a_url_when_present() {
        let mut form = valid_form();
        form.featured_image = Some("not a url".to_string());
        assert_eq!(
            messages_for(&form, "featured_image"),
            vec!["Must be a valid URL".to_string()]
        );

        form.featured_image = Some("https://example.com/cover.png".to_string());
        assert!(validate_post(&form).is_ok());
    }

    #[test]
    fn test_failures_enumerate_one_message_per_field() {
        let mut form = valid_form();
        form.title = "Tiny".to_string();
        form.tags = Vec::new();

        let errors = validate_post(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|error| error.field.as_str()).collect();
        assert_eq!(fields, vec!["tags", "title"]);
    }
}
