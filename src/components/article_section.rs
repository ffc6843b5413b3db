//! One headed block of an article body.
//!
//! Paragraphs and key points are rendered through
//! `articles::markup::inline_html`, the only raw-HTML injection point in the
//! app; everything else is plain interpolated text.

use articles::Section;
use articles::markup::inline_html;
use leptos::prelude::*;

use crate::components::code_tabs::CodeTabs;

#[component]
pub fn ArticleSection(section: &'static Section) -> impl IntoView {
    let paragraphs = section
        .paragraphs
        .iter()
        .map(|text| view! { <p inner_html=inline_html(text)></p> })
        .collect_view();

    let key_points = (!section.key_points.is_empty()).then(|| {
        let items = section.key_points.iter().map(|text| view! { <li inner_html=inline_html(text)></li> }).collect_view();
        view! { <ul class="key-points">{items}</ul> }
    });

    let code = (!section.code_samples.is_empty()).then(|| view! { <CodeTabs samples=section.code_samples.as_slice()/> });

    view! {
        <section class="article-section">
            <h2>{section.heading.as_str()}</h2>
            {paragraphs}
            {key_points}
            {code}
        </section>
    }
}
