use super::*;

fn complete_draft() -> SubmissionDraft {
    SubmissionDraft {
        author_name: " Ada ".to_owned(),
        author_email: "ada@example.com".to_owned(),
        article_title: "Designing Idempotent Consumers".to_owned(),
        article_category: "Backend".to_owned(),
        article_tags: String::new(),
        article_summary: "How to make consumers safe to retry.".to_owned(),
        article_content: "x".repeat(300),
    }
}

#[test]
fn complete_draft_validates_and_trims() {
    let submission = complete_draft().validate(300).unwrap();
    assert_eq!(submission.author_name, "Ada");
    assert_eq!(submission.article_tags, "");
}

#[test]
fn tags_are_optional_but_other_fields_are_required() {
    let mut draft = complete_draft();
    draft.author_email = "   ".to_owned();
    assert_eq!(draft.validate(300), Err(SubmissionError::MissingField("authorEmail")));

    let mut draft = complete_draft();
    draft.article_summary.clear();
    let err = draft.validate(300).unwrap_err();
    assert_eq!(err.to_string(), "Please complete all required fields.");
}

#[test]
fn short_content_is_rejected_after_trimming() {
    let mut draft = complete_draft();
    draft.article_content = format!("  {}  ", "y".repeat(299));
    let err = draft.validate(300).unwrap_err();
    assert_eq!(err, SubmissionError::ContentTooShort { min: 300, actual: 299 });
    assert_eq!(err.to_string(), "Article content is too short. Please provide a detailed write-up.");
}

#[test]
fn content_length_counts_characters_not_bytes() {
    let mut draft = complete_draft();
    draft.article_content = "é".repeat(300);
    assert!(draft.validate(300).is_ok());
}

#[test]
fn missing_fields_are_reported_before_length() {
    let mut draft = complete_draft();
    draft.author_name.clear();
    draft.article_content = "short".to_owned();
    assert!(matches!(draft.validate(300), Err(SubmissionError::MissingField("authorName"))));
}

#[test]
fn submission_serializes_camel_case_payload() {
    let submission = complete_draft().validate(300).unwrap();
    let value = serde_json::to_value(&submission).unwrap();
    assert_eq!(value["authorName"], "Ada");
    assert!(value.get("articleContent").is_some());
}
