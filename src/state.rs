// state.rs - Selection state and the event reducer
//
// The banner is driven by a single reducer: every external input (mount,
// keystroke, dropdown change, fetch completion) becomes a `StoreEvent`,
// `StoreState::apply` folds it into the state, and any network work the
// transition requires comes back as `Command`s for the caller to run. The
// reducer itself never performs I/O, so the whole control flow tests
// without a UI framework or an HTTP stack.
//
// Fetch race: product fetches carry a monotonically increasing request id.
// If the selection changes twice in quick succession both fetches are
// issued, but a completion whose id is not the latest issued one is
// discarded, so the displayed list always corresponds to the most recent
// selection. The single mount-time categories fetch cannot be superseded
// and needs no id.

use tracing::{debug, info, warn};

use crate::model::{CategoryFilter, Product};

/// The full client-side state of the banner.
///
/// Owned by a single component instance; event callbacks are the only
/// writers and run one at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreState {
    /// Last successfully fetched product list for the current selection.
    /// Replaced wholesale by each completed fetch, never merged.
    pub products: Vec<Product>,
    /// Remote category names, in service order. The synthesized
    /// "All Products" entry is not stored here; projection prepends it.
    pub categories: Vec<String>,
    /// The active category filter.
    pub selected: CategoryFilter,
    /// Free-text search input. Persists across category changes.
    pub search_query: String,
    /// Id of the most recently issued product fetch; completions with an
    /// older id are stale and dropped.
    latest_products_request: u64,
}

/// External inputs to the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// The component was mounted; fires the two initial fetches.
    Mounted,
    /// The user edited the search box.
    SearchEdited(String),
    /// The user picked a category in the dropdown.
    CategorySelected(CategoryFilter),
    /// A product fetch completed.
    ProductsLoaded { request: u64, products: Vec<Product> },
    /// A product fetch failed.
    ProductsFailed { request: u64, error: String },
    /// The categories fetch completed.
    CategoriesLoaded(Vec<String>),
    /// The categories fetch failed.
    CategoriesFailed(String),
}

/// Network work emitted by a transition, to be run by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FetchProducts { request: u64, filter: CategoryFilter },
    FetchCategories,
}

impl StoreState {
    /// Apply one event and return the commands it triggers.
    ///
    /// Total over all `(state, event)` pairs: failures and stale
    /// completions are absorbed (prior state retained, diagnostics logged)
    /// rather than surfaced.
    pub fn apply(&mut self, event: StoreEvent) -> Vec<Command> {
        match event {
            StoreEvent::Mounted => {
                // Both initial fetches run concurrently; neither depends on
                // the other completing.
                vec![
                    self.issue_products_fetch(CategoryFilter::All),
                    Command::FetchCategories,
                ]
            }

            StoreEvent::SearchEdited(query) => {
                // Pure re-filter of the already-fetched list; no network.
                self.search_query = query;
                Vec::new()
            }

            StoreEvent::CategorySelected(filter) => {
                if filter == self.selected {
                    // Idempotent: re-selecting the current value is a no-op.
                    return Vec::new();
                }
                self.selected = filter.clone();
                vec![self.issue_products_fetch(filter)]
            }

            StoreEvent::ProductsLoaded { request, products } => {
                if request != self.latest_products_request {
                    debug!(
                        request,
                        latest = self.latest_products_request,
                        "discarding stale product fetch result"
                    );
                    return Vec::new();
                }
                info!("loaded {} products for {:?}", products.len(), self.selected);
                self.products = products;
                Vec::new()
            }

            StoreEvent::ProductsFailed { request, error } => {
                // Previous list stays on screen; a later user-triggered
                // selection change naturally re-attempts the fetch.
                warn!(request, "product fetch failed: {error}");
                Vec::new()
            }

            StoreEvent::CategoriesLoaded(categories) => {
                info!("loaded {} categories", categories.len());
                self.categories = categories;
                Vec::new()
            }

            StoreEvent::CategoriesFailed(error) => {
                warn!("categories fetch failed: {error}");
                Vec::new()
            }
        }
    }

    fn issue_products_fetch(&mut self, filter: CategoryFilter) -> Command {
        self.latest_products_request += 1;
        Command::FetchProducts {
            request: self.latest_products_request,
            filter,
        }
    }
}
