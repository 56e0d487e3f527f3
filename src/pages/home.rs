// pages/home.rs - Storefront home page
//
// Owns the single `StoreState` signal and the dispatch loop: every UI
// event goes through the reducer, and any `Command`s it returns are run
// with spawn_local, feeding their completions back in as events. Fetches
// are never awaited by the render path and never cancelled; stale results
// are dropped by the reducer's request-id check.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::CatalogClient;
use crate::components::{
    CategoryDropdown, HeaderExtras, HeroBanner, LogoSection, ProductCarousel, SearchBar, SideNav,
    TopMenu,
};
use crate::projection;
use crate::state::{Command, StoreEvent, StoreState};

/// Fold one event into the state and run the resulting fetches.
fn dispatch(state: RwSignal<StoreState>, event: StoreEvent) {
    let commands = state
        .try_update(|s| s.apply(event))
        .unwrap_or_default();
    run_commands(state, commands);
}

fn run_commands(state: RwSignal<StoreState>, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::FetchProducts { request, filter } => {
                spawn_local(async move {
                    let client = CatalogClient::default();
                    let event = match client.fetch_products(&filter).await {
                        Ok(products) => StoreEvent::ProductsLoaded { request, products },
                        Err(err) => StoreEvent::ProductsFailed {
                            request,
                            error: err.to_string(),
                        },
                    };
                    dispatch(state, event);
                });
            }
            Command::FetchCategories => {
                spawn_local(async move {
                    let client = CatalogClient::default();
                    let event = match client.fetch_categories().await {
                        Ok(categories) => StoreEvent::CategoriesLoaded(categories),
                        Err(err) => StoreEvent::CategoriesFailed(err.to_string()),
                    };
                    dispatch(state, event);
                });
            }
        }
    }
}

/// Home page: header chrome, search and category controls, hero banner,
/// and the product carousel.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(StoreState::default());

    // Initial fetches run exactly once, concurrently.
    dispatch(state, StoreEvent::Mounted);

    // Derived render inputs, recomputed from state on every change.
    let search_query = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let selected = Signal::derive(move || state.with(|s| s.selected.clone()));
    let dropdown = Signal::derive(move || state.with(|s| projection::dropdown_entries(&s.categories)));
    let carousel = Signal::derive(move || {
        state.with(|s| projection::project(&s.products, &s.search_query))
    });
    let heading = Signal::derive(move || state.with(|s| projection::section_heading(&s.selected)));

    let on_search = Callback::new(move |text: String| {
        dispatch(state, StoreEvent::SearchEdited(text));
    });
    let on_category = Callback::new(move |filter| {
        dispatch(state, StoreEvent::CategorySelected(filter));
    });

    view! {
        <div class="banner_bg_main">
            <TopMenu />
            <LogoSection />
            <div class="header_section">
                <div class="containt_main">
                    <SideNav />
                    <CategoryDropdown
                        entries=dropdown
                        selected=selected
                        on_select=on_category
                    />
                    <div class="main">
                        <SearchBar value=search_query on_edit=on_search />
                    </div>
                    <HeaderExtras />
                </div>
            </div>
            <HeroBanner />
        </div>
        <ProductCarousel model=carousel heading=heading />
    }
}
