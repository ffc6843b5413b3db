//! Article detail page, addressed as `/article?slug=<slug>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening an article counts as reading it: the visit is recorded for today
//! and the streak counters in `LibraryState` refresh immediately. Unknown or
//! missing slugs render the not-found view instead.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use articles::Article;
use articles::bookmarks::{detail_label, toggle_message};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::app::BlogContext;
use crate::components::article_section::ArticleSection;
use crate::components::reading_progress::ReadingProgress;
use crate::pages::not_found::ArticleNotFound;
use crate::state::library::LibraryState;
use crate::util::clipboard::{copy_current_url, copy_message};

const SITE_NAME: &str = "Solutions2Coding";

/// Browser tab title for an article.
pub fn document_title(article: &Article) -> String {
    format!("{} | {SITE_NAME}", article.title)
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let catalog = expect_context::<BlogContext>().catalog;
    let query = use_query_map();
    let article = Memo::new(move |_| {
        query.with(|q| q.get("slug")).and_then(|slug| catalog.get_article_by_slug(&slug))
    });

    move || match article.get() {
        Some(article) => view! { <ArticleDetail article=article/> }.into_any(),
        None => view! { <ArticleNotFound/> }.into_any(),
    }
}

#[component]
fn ArticleDetail(article: &'static Article) -> impl IntoView {
    let blog = expect_context::<BlogContext>();
    let library = expect_context::<RwSignal<LibraryState>>();
    let persistence = blog.persistence.clone();

    let record_persistence = persistence.clone();
    Effect::new(move || {
        let today = articles::reading::today_utc();
        library.update(|l| l.record_read(&record_persistence, &article.slug, today));
    });

    let saved = Memo::new(move |_| library.with(|l| l.bookmarks.contains(&article.slug)));
    let message = RwSignal::new(None::<String>);

    let on_bookmark = move |_| {
        let now_saved = library.try_update(|l| l.toggle_bookmark(&persistence, &article.slug)).unwrap_or(false);
        message.set(Some(toggle_message(now_saved).to_owned()));
    };

    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            let result = copy_current_url().await;
            if let Err(e) = &result {
                log::warn!("copy link failed: {e}");
            }
            message.set(Some(copy_message(&result).to_owned()));
        });
    };

    let dynamic_read_time = article.dynamic_read_time_label(blog.config.words_per_minute);
    let sections = article.content.iter().map(|section| view! { <ArticleSection section=section/> }).collect_view();

    view! {
        <Title text=document_title(article)/>
        <ReadingProgress/>
        <article class="article-detail">
            <a class="back-link" href="/">"← Back to articles"</a>
            <header class="article-header">
                <div class="post-meta">
                    <span class="badge">{article.category.as_str()}</span>
                    <span>{article.date.as_str()}</span>
                    <span>{article.read_time.as_str()}</span>
                    <span class="badge badge--muted">{dynamic_read_time}</span>
                </div>
                <h1>{article.title.as_str()}</h1>
                <p class="article-excerpt">{article.excerpt.as_str()}</p>
                <div class="article-actions">
                    <button
                        id="bookmark-btn"
                        class="btn"
                        type="button"
                        class:is-saved=move || saved.get()
                        aria-pressed=move || if saved.get() { "true" } else { "false" }
                        on:click=on_bookmark
                    >
                        {move || detail_label(saved.get())}
                    </button>
                    <button id="copy-link-btn" class="btn" type="button" on:click=on_copy>
                        "Copy Link"
                    </button>
                </div>
                <p class="action-message" aria-live="polite">{move || message.get().unwrap_or_default()}</p>
            </header>
            {sections}
        </article>
    }
}
