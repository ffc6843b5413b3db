//! Reactive application state held in `RwSignal` contexts.
//!
//! DESIGN
//! ======
//! State structs are plain data with plain methods; `app.rs` wraps each in a
//! signal and provides it as context. Persistence side effects go through an
//! explicit `Persistence` handle so every transition is testable against an
//! in-memory store.

pub mod library;
pub mod ui;
