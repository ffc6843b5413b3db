//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and article building blocks while reading
//! shared state from Leptos context providers or from props handed down by
//! pages.

pub mod article_section;
pub mod category_list;
pub mod code_tabs;
pub mod post_card;
pub mod reading_progress;
pub mod saved_panel;
pub mod site_footer;
pub mod site_header;
pub mod streak_stats;
