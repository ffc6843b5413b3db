//! Scroll-progress math for the article reading bar.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Percentage of the scrollable distance covered, clamped to `0..=100`.
/// Pages that do not scroll report 0.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Current progress for the window, 0 outside the browser.
pub fn window_scroll_percent() -> f64 {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return 0.0;
        };
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        scroll_percent(scroll_top, height, viewport)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
