//! Reading list of bookmarked articles, in catalog order.
//!
//! Saved articles render as the same cards as the listing grid, so a reader
//! can open or un-save them from here.

use articles::bookmarks::saved_label;
use leptos::prelude::*;

use crate::app::BlogContext;
use crate::components::post_card::PostCard;
use crate::state::library::LibraryState;

#[component]
pub fn SavedPanel(on_toggle_bookmark: Callback<String>) -> impl IntoView {
    let catalog = expect_context::<BlogContext>().catalog;
    let library = expect_context::<RwSignal<LibraryState>>();
    let saved = Memo::new(move |_| library.with(|l| l.bookmarks.saved_articles(catalog)));

    view! {
        <section class="saved-panel" aria-labelledby="saved-heading">
            <h2 id="saved-heading">"Reading list"</h2>
            <p class="saved-count">{move || saved.with(|s| saved_label(s.len()))}</p>
            <div class="posts-grid saved-grid">
                {move || {
                    saved
                        .get()
                        .into_iter()
                        .map(|article| {
                            let is_saved = Signal::derive(move || library.with(|l| l.bookmarks.contains(&article.slug)));
                            view! { <PostCard article=article saved=is_saved on_toggle_bookmark=on_toggle_bookmark/> }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
