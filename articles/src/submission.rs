//! Article submission form validation.
//!
//! Submissions are not transmitted anywhere yet; the page validates the draft,
//! waits a fixed placeholder delay, and reports success. [`Submission`] is the
//! payload a future endpoint would receive.

use serde::Serialize;

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

pub const SUCCESS_MESSAGE: &str = "Your article has been submitted successfully. We'll review and contact you.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please complete all required fields.")]
    MissingField(&'static str),
    #[error("Article content is too short. Please provide a detailed write-up.")]
    ContentTooShort { min: usize, actual: usize },
}

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub author_name: String,
    pub author_email: String,
    pub article_title: String,
    pub article_category: String,
    pub article_tags: String,
    pub article_summary: String,
    pub article_content: String,
}

/// A validated, trimmed submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub author_name: String,
    pub author_email: String,
    pub article_title: String,
    pub article_category: String,
    pub article_tags: String,
    pub article_summary: String,
    pub article_content: String,
}

impl SubmissionDraft {
    /// Trim every field, require all but tags, and enforce a minimum content
    /// length in characters.
    ///
    /// # Errors
    ///
    /// [`SubmissionError::MissingField`] naming the first empty required field,
    /// or [`SubmissionError::ContentTooShort`].
    pub fn validate(&self, min_content_chars: usize) -> Result<Submission, SubmissionError> {
        let submission = Submission {
            author_name: self.author_name.trim().to_owned(),
            author_email: self.author_email.trim().to_owned(),
            article_title: self.article_title.trim().to_owned(),
            article_category: self.article_category.trim().to_owned(),
            article_tags: self.article_tags.trim().to_owned(),
            article_summary: self.article_summary.trim().to_owned(),
            article_content: self.article_content.trim().to_owned(),
        };

        let required = [
            ("authorName", &submission.author_name),
            ("authorEmail", &submission.author_email),
            ("articleTitle", &submission.article_title),
            ("articleCategory", &submission.article_category),
            ("articleSummary", &submission.article_summary),
            ("articleContent", &submission.article_content),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(SubmissionError::MissingField(*field));
        }

        let actual = submission.article_content.chars().count();
        if actual < min_content_chars {
            return Err(SubmissionError::ContentTooShort { min: min_content_chars, actual });
        }

        Ok(submission)
    }
}
