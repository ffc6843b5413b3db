//! Reading streak counters shown on the home page.

use articles::ReadingStats;
use leptos::prelude::*;

#[component]
pub fn StreakStats(#[prop(into)] stats: Signal<ReadingStats>) -> impl IntoView {
    view! {
        <section class="streak-stats" aria-label="Reading streak">
            <div class="streak-stat">
                <span class="streak-stat__value" id="current-streak">{move || stats.get().current_streak}</span>
                <span class="streak-stat__label">"Current streak (days)"</span>
            </div>
            <div class="streak-stat">
                <span class="streak-stat__value" id="best-streak">{move || stats.get().best_streak}</span>
                <span class="streak-stat__label">"Best streak (days)"</span>
            </div>
            <div class="streak-stat">
                <span class="streak-stat__value" id="total-completed">{move || stats.get().total_completed}</span>
                <span class="streak-stat__label">"Articles read"</span>
            </div>
        </section>
    }
}
