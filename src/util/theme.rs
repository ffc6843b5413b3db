//! Theme initialization and toggle.
//!
//! Resolves the starting theme from the stored preference, falling back to
//! the OS `prefers-color-scheme` query, and applies it as a `data-theme`
//! attribute on the `<html>` element. Toggle writes the new value back
//! through [`Persistence`].
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: a failed write is logged and the
//! visible theme still changes for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use articles::persistence::recover;
use articles::{KeyValueStore, Persistence, Theme};

/// Whether the OS reports a dark color-scheme preference.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Stored theme if valid, otherwise the OS preference.
pub fn initial<S: KeyValueStore>(persistence: &Persistence<S>) -> Theme {
    Theme::initial(recover(persistence.load_theme(), "load theme"), prefers_dark())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("could not apply theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle<S: KeyValueStore>(persistence: &Persistence<S>, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(e) = persistence.save_theme(next) {
        log::warn!("theme preference not saved: {e}");
    }
    next
}
