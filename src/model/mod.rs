// model/mod.rs - Shared data types for the storefront banner
//
// These structs mirror the payloads of the remote catalog service and the
// client-side selection state. Products are immutable once fetched; every
// successful fetch replaces the previous list wholesale.

use serde::{Deserialize, Serialize};

/// Dropdown label for the synthesized "no category filter" entry.
///
/// This string exists only in the UI: it is prepended to the category
/// dropdown and mapped back to [`CategoryFilter::All`] on selection. It is
/// never sent to the remote service.
pub const ALL_PRODUCTS_LABEL: &str = "All Products";

/// Product as returned by the remote catalog service.
///
/// The remote payload carries more fields (description, rating); serde
/// ignores anything we don't model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}

/// The active category filter.
///
/// Replaces the stringly-typed "All Products" sentinel: `All` means "no
/// filter", and `Named` always holds a real, non-empty remote category name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a dropdown value back into a filter.
    ///
    /// The empty string and the synthesized [`ALL_PRODUCTS_LABEL`] both mean
    /// "no filter"; anything else is a remote category name.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == ALL_PRODUCTS_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    /// The label shown in the dropdown for this filter.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_PRODUCTS_LABEL,
            CategoryFilter::Named(name) => name,
        }
    }

    /// The category name to send to the remote filter endpoint.
    ///
    /// `None` for [`CategoryFilter::All`], so the sentinel label cannot leak
    /// onto the wire.
    pub fn remote_name(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Named(name) => Some(name),
        }
    }

}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
