use super::*;

#[test]
fn copy_message_maps_success_and_failure() {
    assert_eq!(copy_message(&Ok(())), "Article link copied to clipboard.");
    assert_eq!(
        copy_message(&Err(ClipboardError::Unavailable)),
        "Could not copy automatically. Please copy the URL manually."
    );
    assert_eq!(copy_message(&Err(ClipboardError::Rejected("denied".to_owned()))), COPY_FAILURE_MESSAGE);
}

#[test]
fn clipboard_error_display() {
    assert_eq!(ClipboardError::Rejected("denied".to_owned()).to_string(), "clipboard write rejected: denied");
}
