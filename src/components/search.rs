// components/search.rs - Search input and category selector
//
// Both components are controlled: they render from signals owned by the
// page and report user input through callbacks. Search is applied on every
// keystroke with no debounce; the magnifier button is decorative.

use leptos::prelude::*;

use crate::model::CategoryFilter;
use crate::projection::selector_label;

/// Free-text search input.
///
/// Emits the full input value on every edit; filtering happens client-side
/// in the projection, so typing never triggers a network request.
#[component]
pub fn SearchBar(
    /// Current search text
    value: Signal<String>,
    /// Called with the new text on each keystroke
    on_edit: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search_box input-group">
            <input
                type="text"
                class="form-control"
                placeholder="Search this blog"
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            />
            <div class="input-group-append">
                <button class="btn search_btn" type="button">
                    <i class="fa fa-search"></i>
                </button>
            </div>
        </div>
    }
}

/// Category dropdown.
///
/// The toggle button shows [`selector_label`] for the active filter;
/// `entries` already includes the synthesized "All Products" entry as its
/// first element, and the picked entry is mapped back to a
/// [`CategoryFilter`] so the sentinel label never escapes the UI layer.
#[component]
pub fn CategoryDropdown(
    /// Dropdown entries, sentinel first
    entries: Signal<Vec<String>>,
    /// The active filter
    selected: Signal<CategoryFilter>,
    /// Called when the user picks an entry
    on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="dropdown category_dropdown">
            <button
                class="btn btn-secondary dropdown-toggle"
                type="button"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || selector_label(&selected.get())}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown-menu">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.clone()
                        children=move |entry| {
                            let value = entry.clone();
                            view! {
                                <button
                                    type="button"
                                    class="dropdown-item"
                                    on:click=move |_| {
                                        open.set(false);
                                        on_select.run(CategoryFilter::from_label(&value));
                                    }
                                >
                                    {entry.clone()}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{CategoryFilter, ALL_PRODUCTS_LABEL};
    use crate::projection::selector_label;

    #[test]
    fn test_dropdown_pick_maps_sentinel_to_all() {
        // The menu hands back the raw entry label; picking the sentinel
        // entry must clear the filter rather than select a category.
        assert_eq!(
            CategoryFilter::from_label(ALL_PRODUCTS_LABEL),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::from_label("electronics"),
            CategoryFilter::Named("electronics".to_string())
        );
    }

    #[test]
    fn test_toggle_button_label() {
        assert_eq!(selector_label(&CategoryFilter::All), "All Category");
        assert_eq!(
            selector_label(&CategoryFilter::Named("jewelery".to_string())),
            "jewelery"
        );
    }
}
