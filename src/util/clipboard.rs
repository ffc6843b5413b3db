//! Copy-link support for the article page.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

pub const COPY_SUCCESS_MESSAGE: &str = "Article link copied to clipboard.";
pub const COPY_FAILURE_MESSAGE: &str = "Could not copy automatically. Please copy the URL manually.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Reader-facing message for a copy attempt.
pub fn copy_message(result: &Result<(), ClipboardError>) -> &'static str {
    match result {
        Ok(()) => COPY_SUCCESS_MESSAGE,
        Err(_) => COPY_FAILURE_MESSAGE,
    }
}

/// Write the current page URL to the system clipboard.
///
/// # Errors
///
/// [`ClipboardError::Unavailable`] when there is no window, location, or
/// clipboard API; [`ClipboardError::Rejected`] when the write promise fails.
pub async fn copy_current_url() -> Result<(), ClipboardError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let href = window.location().href().map_err(|_| ClipboardError::Unavailable)?;
        let navigator = window.navigator();
        // Insecure contexts have no `navigator.clipboard`.
        let has_clipboard = js_sys::Reflect::get(&navigator, &wasm_bindgen::JsValue::from_str("clipboard"))
            .is_ok_and(|v| !v.is_undefined());
        if !has_clipboard {
            return Err(ClipboardError::Unavailable);
        }
        wasm_bindgen_futures::JsFuture::from(navigator.clipboard().write_text(&href))
            .await
            .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))))?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ClipboardError::Unavailable)
    }
}
