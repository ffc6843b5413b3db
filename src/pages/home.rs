//! Home page: hero, streak counters, searchable article listing, and the
//! reading list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Listing filters live in `LibraryState` so they
//! survive a round trip to an article and back. The hero headline rotates on
//! a timer owned by this page and stops when the page unmounts. Streak
//! counters are recomputed for the current day on every visit.

use articles::listing::category_facets;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::BlogContext;
use crate::components::category_list::CategoryList;
use crate::components::post_card::PostCard;
use crate::components::saved_panel::SavedPanel;
use crate::components::streak_stats::StreakStats;
use crate::state::library::LibraryState;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let blog = expect_context::<BlogContext>();
    let ui = expect_context::<RwSignal<UiState>>();
    let library = expect_context::<RwSignal<LibraryState>>();
    let catalog = blog.catalog;
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    {
        let rotate = std::time::Duration::from_millis(u64::from(blog.config.hero_rotate_ms));
        let fade = std::time::Duration::from_millis(u64::from(blog.config.hero_fade_ms));
        let hero_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let hero_alive_task = hero_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(rotate).await;
                if !hero_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                ui.update(|u| u.hero_fading = true);
                gloo_timers::future::sleep(fade).await;
                if !hero_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                ui.update(UiState::advance_hero);
            }
        });
        on_cleanup(move || hero_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let search_ref = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "csr")]
    {
        use crate::util::shortcuts::{ShortcutAction, shortcut_for};

        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            let Some(input) = search_ref.get_untracked() else {
                return;
            };
            match shortcut_for(&ev.key(), focus_context(&input)) {
                Some(ShortcutAction::FocusSearch) => {
                    ev.prevent_default();
                    let _ = input.focus();
                    input.select();
                }
                Some(ShortcutAction::BlurSearch) => {
                    let _ = input.blur();
                }
                None => {}
            }
        });
        on_cleanup(move || keys.remove());
    }

    let refresh_persistence = blog.persistence.clone();
    Effect::new(move || {
        let today = articles::reading::today_utc();
        library.update(|l| l.refresh_stats(&refresh_persistence, today));
    });

    let page = Memo::new(move |_| library.with(|l| l.listing.page(catalog)));
    let active_category = Signal::derive(move || library.with(|l| l.listing.active_category().to_owned()));
    let stats = Signal::derive(move || library.with(|l| l.stats));

    let on_select_category = Callback::new(move |name: String| {
        library.update(|l| l.listing.set_category(&name));
    });
    let persistence = blog.persistence.clone();
    let on_toggle_bookmark = Callback::new(move |slug: String| {
        library.update(|l| {
            l.toggle_bookmark(&persistence, &slug);
        });
    });

    let on_random = move |_| {
        if let Some(article) = catalog.pick(random_fraction()) {
            navigate(&article.href(), NavigateOptions::default());
        }
    };

    view! {
        <section class="hero">
            <p class="eyebrow">"Solutions2Coding"</p>
            <h1 class="hero-title" class:is-changing=move || ui.get().hero_fading>
                {move || ui.get().hero_title()}
            </h1>
            <p class="hero-copy">
                "Hands-on articles on backend, frontend, and system design, with code you can ship."
            </p>
            <button class="btn btn--primary" type="button" on:click=on_random>
                "Read a random article"
            </button>
        </section>

        <StreakStats stats=stats/>

        <section class="listing" aria-label="Articles">
            <div class="listing-controls">
                <input
                    id="search-input"
                    class="search-input"
                    type="search"
                    placeholder="Search articles (press / to focus)"
                    aria-label="Search articles"
                    node_ref=search_ref
                    prop:value=move || library.with(|l| l.search_input.clone())
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        library.update(|l| l.set_search(raw));
                    }
                />
                <CategoryList facets=category_facets(catalog) active=active_category on_select=on_select_category/>
            </div>
            <p class="results-count" aria-live="polite">{move || page.with(|p| p.results_label())}</p>
            <div class="posts-grid">
                {move || {
                    page.get()
                        .visible
                        .into_iter()
                        .map(|article| {
                            let saved = Signal::derive(move || library.with(|l| l.bookmarks.contains(&article.slug)));
                            view! { <PostCard article=article saved=saved on_toggle_bookmark=on_toggle_bookmark/> }
                        })
                        .collect_view()
                }}
            </div>
            <Show when=move || page.with(|p| p.has_more())>
                <button
                    id="load-more"
                    class="btn load-more"
                    type="button"
                    on:click=move |_| library.update(|l| l.listing.load_more())
                >
                    "Load more"
                </button>
            </Show>
        </section>

        <SavedPanel on_toggle_bookmark=on_toggle_bookmark/>
    }
}

/// Uniform sample in `[0, 1)`.
fn random_fraction() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

#[cfg(feature = "csr")]
fn focus_context(search: &web_sys::HtmlInputElement) -> crate::util::shortcuts::FocusContext {
    use crate::util::shortcuts::{FocusContext, is_text_entry_tag};
    use wasm_bindgen::JsCast;

    let Some(active) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.active_element()) else {
        return FocusContext::default();
    };
    let in_search = search.unchecked_ref::<web_sys::Element>() == &active;
    let typing = is_text_entry_tag(&active.tag_name())
        || active.dyn_ref::<web_sys::HtmlElement>().is_some_and(web_sys::HtmlElement::is_content_editable);
    FocusContext { typing, in_search }
}
