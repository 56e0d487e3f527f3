// lib.rs - Storefront banner library
//
// A searchable, category-filtered product carousel backed by a remote
// read-only catalog API.
//
// Architecture:
// - model/: Shared data types (products, category filter)
// - catalog/: Async HTTP client for the remote catalog service
// - state: Event reducer (selection state, fetch sequencing)
// - projection: Pure derivation of the render model (filter, chunk, labels)
// - components/, pages/, app: Leptos UI (csr feature only)
//
// The reducer and projection are framework-free: user input and fetch
// completions enter as `StoreEvent`s, fetches leave as `Command`s, and the
// render model is recomputed from state on every render.

pub mod catalog;
pub mod model;
pub mod projection;
pub mod state;

// The browser UI is only built for the WASM bundle
#[cfg(feature = "csr")]
pub mod components;

#[cfg(feature = "csr")]
pub mod pages;

#[cfg(feature = "csr")]
pub mod app;

// Re-export the root component for the binary
#[cfg(feature = "csr")]
pub use app::App;
