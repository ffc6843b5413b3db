//! Tabbed code samples for one article section.
//!
//! DESIGN
//! ======
//! Exactly one tab is active at a time, the first by default. Inactive
//! panels stay in the DOM and are hidden by the `is-active` class so the
//! highlighter only runs once per sample.

#[cfg(test)]
#[path = "code_tabs_test.rs"]
mod code_tabs_test;

use articles::CodeSample;
use leptos::prelude::*;

/// Active-tab bookkeeping for a strip of `len` tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelection {
    active: usize,
    len: usize,
}

impl TabSelection {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> Option<usize> {
        (self.active < self.len).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Activate `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }
}

#[component]
pub fn CodeTabs(samples: &'static [CodeSample]) -> impl IntoView {
    let selection = RwSignal::new(TabSelection::new(samples.len()));

    let tabs = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let is_active = move || selection.get().is_active(index);
            view! {
                <button
                    class="code-tab-btn"
                    type="button"
                    role="tab"
                    class:is-active=is_active
                    aria-selected=move || if is_active() { "true" } else { "false" }
                    on:click=move |_| selection.update(|s| s.select(index))
                >
                    {sample.tab_label(index)}
                </button>
            }
        })
        .collect_view();

    let panels = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let code_class = format!("language-{}", sample.highlight_language());
            view! {
                <figure class="code-block" role="tabpanel" class:is-active=move || selection.get().is_active(index)>
                    <figcaption>{sample.caption()}</figcaption>
                    <pre class="line-numbers">
                        <code class=code_class>{sample.code.as_str()}</code>
                    </pre>
                </figure>
            }
        })
        .collect_view();

    view! {
        <div class="code-tabs">
            <div class="code-tab-list" role="tablist" aria-label="Code language selector">
                {tabs}
            </div>
            <div class="code-tab-panels">{panels}</div>
        </div>
    }
}
