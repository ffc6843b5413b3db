//! Site header with brand link, navigation, and theme toggle.

use leptos::prelude::*;

use crate::app::BlogContext;
use crate::state::ui::UiState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let blog = expect_context::<BlogContext>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        let next = crate::util::theme::toggle(&blog.persistence, ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <header class="site-header">
            <a class="brand" href="/">"Solutions2Coding"</a>
            <nav class="site-nav" aria-label="Primary">
                <a href="/">"Articles"</a>
                <a href="/submit">"Write for us"</a>
            </nav>
            <button
                class="btn theme-toggle"
                type="button"
                aria-pressed=move || if ui.get().theme.is_dark() { "true" } else { "false" }
                on:click=on_toggle_theme
            >
                {move || ui.get().theme.toggle_label()}
            </button>
        </header>
    }
}
