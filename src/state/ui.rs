//! Local UI chrome state (theme, hero rotation).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of library state so the theme
//! toggle and hero animation never touch persisted reader data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use articles::Theme;

/// Rotating headlines shown in the home page hero.
pub const HERO_TITLES: [&str; 4] = [
    "Practical coding guides for developers who build real products.",
    "Learn software engineering with production-ready examples.",
    "Read backend, frontend, and system design articles in one place.",
    "Upgrade your coding career with clear, implementation-first tutorials.",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub hero_index: usize,
    /// True while the current headline is fading out.
    pub hero_fading: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn hero_title(&self) -> &'static str {
        HERO_TITLES[self.hero_index % HERO_TITLES.len()]
    }

    /// Swap in the next headline and end the fade.
    pub fn advance_hero(&mut self) {
        self.hero_index = (self.hero_index + 1) % HERO_TITLES.len();
        self.hero_fading = false;
    }
}
