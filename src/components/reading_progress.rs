//! Fixed reading-progress bar for the article page.

use leptos::prelude::*;

#[component]
pub fn ReadingProgress() -> impl IntoView {
    let percent = RwSignal::new(crate::util::progress::window_scroll_percent());

    #[cfg(feature = "csr")]
    {
        let update = move || percent.set(crate::util::progress::window_scroll_percent());
        let scroll = window_event_listener(leptos::ev::scroll, move |_| update());
        let resize = window_event_listener(leptos::ev::resize, move |_| update());
        on_cleanup(move || {
            scroll.remove();
            resize.remove();
        });
    }

    view! {
        <div class="reading-progress" aria-hidden="true">
            <div class="reading-progress__bar" style:width=move || format!("{:.2}%", percent.get())></div>
        </div>
    }
}
