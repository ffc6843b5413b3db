//! Site footer with the current year.

use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = articles::reading::today_utc().year();

    view! {
        <footer class="site-footer">
            <p>"© " <span id="year">{year}</span> " Solutions2Coding. Practical guides for working developers."</p>
        </footer>
    }
}
