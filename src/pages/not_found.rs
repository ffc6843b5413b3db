//! Not-found views for unknown routes and unknown article slugs.

use leptos::prelude::*;
use leptos_meta::Title;

/// Shown by the article route when the slug is missing or unknown.
#[component]
pub fn ArticleNotFound() -> impl IntoView {
    view! { <NotFoundNotice heading="Article not found" message="The requested article does not exist."/> }
}

/// Router fallback for paths outside the known routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <NotFoundNotice heading="Page not found" message="The page you requested does not exist."/> }
}

#[component]
fn NotFoundNotice(heading: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <Title text=format!("{heading} | Solutions2Coding")/>
        <section class="not-found">
            <h1>{heading}</h1>
            <p>{message}</p>
            <a class="btn btn--primary" href="/">"Browse all articles"</a>
        </section>
    }
}
