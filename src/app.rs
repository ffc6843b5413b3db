//! Root application component with routing and context providers.

use articles::{BlogConfig, Catalog, Persistence};
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::pages::{article::ArticlePage, home::HomePage, not_found::NotFoundPage, submit::SubmitPage};
use crate::state::library::LibraryState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Read-only wiring shared by every page: tunables, the catalog, and the
/// storage adapter.
#[derive(Clone, Debug)]
pub struct BlogContext {
    pub config: BlogConfig,
    pub catalog: &'static Catalog,
    pub persistence: Persistence<BrowserStorage>,
}

impl BlogContext {
    pub fn new(config: BlogConfig) -> Self {
        let persistence = Persistence::new(BrowserStorage, config.storage_keys.clone());
        Self { config, catalog: Catalog::builtin(), persistence }
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let blog = BlogContext::new(BlogConfig::default());
    let today = articles::reading::today_utc();

    let theme = crate::util::theme::initial(&blog.persistence);
    crate::util::theme::apply(theme);
    let ui = RwSignal::new(UiState::new(theme));
    let library = RwSignal::new(LibraryState::load(&blog.persistence, &blog.config, today));
    log::debug!("catalog ready: {} articles", blog.catalog.len());

    provide_context(blog);
    provide_context(ui);
    provide_context(library);

    view! {
        <Stylesheet id="site" href="/style/main.css"/>
        <Title text="Solutions2Coding"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("article") view=ArticlePage/>
                    <Route path=StaticSegment("submit") view=SubmitPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
