//! "Write for us" page: article submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no submission endpoint yet. A valid draft waits a fixed delay,
//! is logged, and the form resets with a success message.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use articles::submission::SUCCESS_MESSAGE;
use articles::{SubmissionDraft, SubmissionError};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::app::BlogContext;

/// One input of the submission form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    AuthorName,
    AuthorEmail,
    ArticleTitle,
    ArticleCategory,
    ArticleTags,
    ArticleSummary,
    ArticleContent,
}

impl DraftField {
    pub const ALL: [DraftField; 7] = [
        Self::AuthorName,
        Self::AuthorEmail,
        Self::ArticleTitle,
        Self::ArticleCategory,
        Self::ArticleTags,
        Self::ArticleSummary,
        Self::ArticleContent,
    ];

    /// Form control name, matching the submission payload key.
    pub fn name(self) -> &'static str {
        match self {
            Self::AuthorName => "authorName",
            Self::AuthorEmail => "authorEmail",
            Self::ArticleTitle => "articleTitle",
            Self::ArticleCategory => "articleCategory",
            Self::ArticleTags => "articleTags",
            Self::ArticleSummary => "articleSummary",
            Self::ArticleContent => "articleContent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AuthorName => "Your name",
            Self::AuthorEmail => "Email",
            Self::ArticleTitle => "Article title",
            Self::ArticleCategory => "Category",
            Self::ArticleTags => "Tags (optional, comma separated)",
            Self::ArticleSummary => "Summary",
            Self::ArticleContent => "Article content",
        }
    }

    pub fn required(self) -> bool {
        self != Self::ArticleTags
    }

    /// `<input type>` for single-line fields, `None` for textareas.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::AuthorEmail => Some("email"),
            Self::ArticleSummary | Self::ArticleContent => None,
            _ => Some("text"),
        }
    }

    pub fn value(self, draft: &SubmissionDraft) -> &str {
        match self {
            Self::AuthorName => &draft.author_name,
            Self::AuthorEmail => &draft.author_email,
            Self::ArticleTitle => &draft.article_title,
            Self::ArticleCategory => &draft.article_category,
            Self::ArticleTags => &draft.article_tags,
            Self::ArticleSummary => &draft.article_summary,
            Self::ArticleContent => &draft.article_content,
        }
    }

    pub fn set(self, draft: &mut SubmissionDraft, value: String) {
        let slot = match self {
            Self::AuthorName => &mut draft.author_name,
            Self::AuthorEmail => &mut draft.author_email,
            Self::ArticleTitle => &mut draft.article_title,
            Self::ArticleCategory => &mut draft.article_category,
            Self::ArticleTags => &mut draft.article_tags,
            Self::ArticleSummary => &mut draft.article_summary,
            Self::ArticleContent => &mut draft.article_content,
        };
        *slot = value;
    }
}

/// Message line under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitStatus {
    pub message: String,
    pub is_error: bool,
}

impl SubmitStatus {
    pub fn success() -> Self {
        Self { message: SUCCESS_MESSAGE.to_owned(), is_error: false }
    }

    pub fn error(err: &SubmissionError) -> Self {
        Self { message: err.to_string(), is_error: true }
    }
}

#[component]
pub fn SubmitPage() -> impl IntoView {
    let config = expect_context::<BlogContext>().config;
    let min_chars = config.min_submission_chars;
    let delay_ms = config.submit_delay_ms;

    let draft = RwSignal::new(SubmissionDraft::default());
    let status = RwSignal::new(None::<SubmitStatus>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let submission = match draft.with_untracked(|d| d.validate(min_chars)) {
            Ok(submission) => submission,
            Err(e) => {
                log::debug!("submission rejected: {e:?}");
                status.set(Some(SubmitStatus::error(&e)));
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            #[cfg(feature = "csr")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
            #[cfg(not(feature = "csr"))]
            let _ = delay_ms;
            log::info!("article submitted: {:?} ({})", submission.article_title, submission.article_category);
            draft.set(SubmissionDraft::default());
            status.set(Some(SubmitStatus::success()));
            busy.set(false);
        });
    };

    let fields = DraftField::ALL
        .into_iter()
        .map(|field| {
            let value = move || draft.with(|d| field.value(d).to_owned());
            let on_input = move |ev: leptos::ev::Event| {
                let raw = event_target_value(&ev);
                draft.update(|d| field.set(d, raw));
            };
            let control = match field.input_type() {
                Some(kind) => view! {
                    <input
                        id=field.name()
                        name=field.name()
                        type=kind
                        required=field.required()
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any(),
                None => view! {
                    <textarea
                        id=field.name()
                        name=field.name()
                        rows=if field == DraftField::ArticleContent { "12" } else { "3" }
                        required=field.required()
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any(),
            };
            view! {
                <div class="form-field">
                    <label for=field.name()>{field.label()}</label>
                    {control}
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="Write for us | Solutions2Coding"/>
        <section class="submit-page">
            <h1>"Submit an article"</h1>
            <p class="submit-intro">
                {format!(
                    "Share a practical write-up with other developers. Content needs at least {min_chars} characters.",
                )}
            </p>
            <form id="submit-article-form" class="submit-form" novalidate=true on:submit=on_submit>
                {fields}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Article" }}
                </button>
            </form>
            <p
                id="submit-message"
                class="submit-message"
                class:is-error=move || status.with(|s| s.as_ref().is_some_and(|s| s.is_error))
                class:is-success=move || status.with(|s| s.as_ref().is_some_and(|s| !s.is_error))
                aria-live="polite"
            >
                {move || status.with(|s| s.as_ref().map(|s| s.message.clone()).unwrap_or_default())}
            </p>
        </section>
    }
}
