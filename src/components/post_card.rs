//! Article card for the listing grid.
//!
//! The whole card behaves as a link: click, Enter, or Space opens the
//! article. Nested controls (the read link and the bookmark button) handle
//! their own events and never trigger the card navigation.

use articles::Article;
use articles::bookmarks::card_label;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[component]
pub fn PostCard(
    article: &'static Article,
    #[prop(into)] saved: Signal<bool>,
    on_toggle_bookmark: Callback<String>,
) -> impl IntoView {
    let navigate = use_navigate();
    let href = article.href();

    let open_on_click = {
        let navigate = navigate.clone();
        let href = href.clone();
        move |ev: leptos::ev::MouseEvent| {
            if from_nested_control(&ev) {
                return;
            }
            navigate(&href, NavigateOptions::default());
        }
    };
    let open_on_key = {
        let href = href.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if (ev.key() == "Enter" || ev.key() == " ") && !from_nested_control(&ev) {
                ev.prevent_default();
                navigate(&href, NavigateOptions::default());
            }
        }
    };

    view! {
        <article
            class="post-card clickable-card"
            role="link"
            tabindex="0"
            aria-label=format!("Open article: {}", article.title)
            on:click=open_on_click
            on:keydown=open_on_key
        >
            <div class="post-meta">
                <span class="badge">{article.category.as_str()}</span>
                <span>{article.date.as_str()}</span>
                <span>{article.read_time.as_str()}</span>
            </div>
            <h3 class="post-title">{article.title.as_str()}</h3>
            <p class="post-excerpt">{article.excerpt.as_str()}</p>
            <div class="post-actions">
                <a class="post-link" href=href>
                    "Read article"
                </a>
                <button
                    class="bookmark-btn"
                    type="button"
                    class:is-saved=move || saved.get()
                    aria-pressed=move || if saved.get() { "true" } else { "false" }
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_toggle_bookmark.run(article.slug.clone());
                    }
                >
                    {move || card_label(saved.get())}
                </button>
            </div>
        </article>
    }
}

/// Whether the event started on a link or button inside the card.
fn from_nested_control(ev: &leptos::ev::Event) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        ev.target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a, button").ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        false
    }
}
