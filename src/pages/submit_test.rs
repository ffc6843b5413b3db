use super::*;

#[test]
fn field_names_match_payload_keys() {
    let names: Vec<&str> = DraftField::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        [
            "authorName",
            "authorEmail",
            "articleTitle",
            "articleCategory",
            "articleTags",
            "articleSummary",
            "articleContent"
        ]
    );
}

#[test]
fn only_tags_are_optional() {
    let optional: Vec<DraftField> = DraftField::ALL.into_iter().filter(|f| !f.required()).collect();
    assert_eq!(optional, [DraftField::ArticleTags]);
}

#[test]
fn long_fields_render_as_textareas() {
    assert_eq!(DraftField::ArticleContent.input_type(), None);
    assert_eq!(DraftField::ArticleSummary.input_type(), None);
    assert_eq!(DraftField::AuthorEmail.input_type(), Some("email"));
    assert_eq!(DraftField::ArticleTitle.input_type(), Some("text"));
}

#[test]
fn set_then_value_round_trips_every_field() {
    let mut draft = SubmissionDraft::default();
    for field in DraftField::ALL {
        field.set(&mut draft, format!("{} value", field.name()));
    }
    for field in DraftField::ALL {
        assert_eq!(field.value(&draft), format!("{} value", field.name()));
    }
    assert_eq!(draft.article_content, "articleContent value");
}

#[test]
fn status_from_validation_error_is_an_error() {
    let status = SubmitStatus::error(&SubmissionError::MissingField("authorName"));
    assert!(status.is_error);
    assert_eq!(status.message, "Please complete all required fields.");

    let status = SubmitStatus::error(&SubmissionError::ContentTooShort { min: 300, actual: 12 });
    assert_eq!(status.message, "Article content is too short. Please provide a detailed write-up.");
}

#[test]
fn success_status_uses_confirmation_text() {
    let status = SubmitStatus::success();
    assert!(!status.is_error);
    assert_eq!(status.message, "Your article has been submitted successfully. We'll review and contact you.");
}
