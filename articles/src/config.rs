//! Compiled-in site configuration.
//!
//! The site is static, so there is no runtime configuration source; the app
//! builds one [`BlogConfig`] at start-up and shares it through context.

pub const DEFAULT_STORAGE_PREFIX: &str = "solutions2coding";
pub const DEFAULT_PAGE_SIZE: usize = 4;
pub const DEFAULT_WORDS_PER_MINUTE: usize = 180;
pub const DEFAULT_MIN_SUBMISSION_CHARS: usize = 300;
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 500;
pub const DEFAULT_HERO_ROTATE_MS: u32 = 3400;
pub const DEFAULT_HERO_FADE_MS: u32 = 260;

/// Storage keys for the three persisted records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub bookmarks: String,
    pub reading_activity: String,
    pub theme: String,
}

impl StorageKeys {
    /// Keys of the form `{prefix}-bookmarks`, `{prefix}-reading-activity`,
    /// `{prefix}-theme`.
    #[must_use]
    pub fn namespaced(prefix: &str) -> Self {
        Self {
            bookmarks: format!("{prefix}-bookmarks"),
            reading_activity: format!("{prefix}-reading-activity"),
            theme: format!("{prefix}-theme"),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::namespaced(DEFAULT_STORAGE_PREFIX)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogConfig {
    /// Cards revealed per page and per "load more".
    pub page_size: usize,
    pub words_per_minute: usize,
    /// Minimum trimmed length of submitted article content.
    pub min_submission_chars: usize,
    /// Placeholder latency for the simulated submission request.
    pub submit_delay_ms: u64,
    pub hero_rotate_ms: u32,
    pub hero_fade_ms: u32,
    pub storage_keys: StorageKeys,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            min_submission_chars: DEFAULT_MIN_SUBMISSION_CHARS,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            hero_rotate_ms: DEFAULT_HERO_ROTATE_MS,
            hero_fade_ms: DEFAULT_HERO_FADE_MS,
            storage_keys: StorageKeys::default(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
