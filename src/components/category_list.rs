//! Category facet buttons with per-category counts.

use articles::CategoryFacet;
use leptos::prelude::*;

#[component]
pub fn CategoryList(
    facets: Vec<CategoryFacet>,
    #[prop(into)] active: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let buttons = facets
        .into_iter()
        .map(|facet| {
            let name = facet.name;
            let is_active = {
                let name = name.clone();
                move || active.with(|a| *a == name)
            };
            let label = format!("{name} ({})", facet.count);
            view! {
                <li>
                    <button
                        class="category-btn"
                        type="button"
                        class:is-active=is_active
                        on:click=move |_| on_select.run(name.clone())
                    >
                        {label}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="category-list" aria-label="Categories">{buttons}</ul> }
}
