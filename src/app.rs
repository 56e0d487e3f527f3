// app.rs - Root application component
//
// Single-page app: meta tags plus the home page. There are no routes.

use leptos::prelude::*;
use leptos_meta::*;

use crate::pages::HomePage;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Storefront" />
        <Meta name="description" content="Searchable product carousel backed by the remote catalog API" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <main>
            <HomePage />
        </main>
    }
}
