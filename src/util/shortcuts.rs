//! Home page keyboard shortcuts.
//!
//! `/` jumps to the search box unless the reader is already typing
//! somewhere; `Escape` leaves the search box.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    FocusSearch,
    BlurSearch,
}

/// Where keyboard focus currently is when a key is pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusContext {
    /// Focus is in an input, textarea, or contenteditable element.
    pub typing: bool,
    /// Focus is in the search box itself.
    pub in_search: bool,
}

pub fn shortcut_for(key: &str, focus: FocusContext) -> Option<ShortcutAction> {
    match key {
        "/" if !focus.typing && !focus.in_search => Some(ShortcutAction::FocusSearch),
        "Escape" if focus.in_search => Some(ShortcutAction::BlurSearch),
        _ => None,
    }
}

/// Tag names that count as text entry.
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}
