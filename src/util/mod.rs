//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. Each browser call is gated on the
//! `csr` feature and degrades to a no-op (or an `Unavailable` error) natively.

pub mod clipboard;
pub mod progress;
pub mod shortcuts;
pub mod storage;
pub mod theme;
