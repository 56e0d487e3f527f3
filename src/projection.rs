// projection.rs - Pure derivation of the render model
//
// Everything the carousel displays is computed here from the current
// product list and search text: title filtering, chunking into fixed-size
// slide groups, the dropdown entries, and the two header labels. No state
// lives in this module; it recomputes from scratch on every render.

use crate::model::{CategoryFilter, Product, ALL_PRODUCTS_LABEL};

/// Products per carousel slide.
pub const GROUP_SIZE: usize = 3;

/// Dropdown label shown when no category is selected.
pub const DEFAULT_SELECTOR_LABEL: &str = "All Category";

/// Section heading shown when no category is selected.
pub const DEFAULT_SECTION_HEADING: &str = "Man & Woman Fashion";

/// The derived carousel content: filtered products, chunked into slides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselModel {
    pub groups: Vec<Vec<Product>>,
}

impl CarouselModel {
    /// True when there is nothing to show and the carousel should render
    /// its single "No Products Found" slide instead.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Keep the products whose title contains `query`, case-insensitively.
///
/// An empty query is the identity filter. Relative order is preserved.
pub fn filter_by_title(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Partition `products` into consecutive groups of at most [`GROUP_SIZE`].
///
/// Stable and lossless: concatenating the groups yields the input, every
/// group except possibly the last has exactly [`GROUP_SIZE`] elements, and
/// no group is ever empty. An empty input yields no groups.
pub fn chunk(products: &[Product]) -> Vec<Vec<Product>> {
    products.chunks(GROUP_SIZE).map(<[Product]>::to_vec).collect()
}

/// Derive the carousel render model from the fetched products and the
/// current search text.
pub fn project(products: &[Product], query: &str) -> CarouselModel {
    let filtered = filter_by_title(products, query);
    CarouselModel {
        groups: chunk(&filtered),
    }
}

/// Dropdown entries: the synthesized "All Products" entry first, then the
/// remote categories in service order.
pub fn dropdown_entries(categories: &[String]) -> Vec<String> {
    let mut entries = Vec::with_capacity(categories.len() + 1);
    entries.push(ALL_PRODUCTS_LABEL.to_string());
    entries.extend(categories.iter().cloned());
    entries
}

/// Label for the category selector button.
pub fn selector_label(selected: &CategoryFilter) -> String {
    match selected {
        CategoryFilter::All => DEFAULT_SELECTOR_LABEL.to_string(),
        CategoryFilter::Named(name) => name.clone(),
    }
}

/// Heading for the product section: the selected category, first character
/// upper-cased, suffixed with " Fashion".
pub fn section_heading(selected: &CategoryFilter) -> String {
    match selected {
        CategoryFilter::All => DEFAULT_SECTION_HEADING.to_string(),
        CategoryFilter::Named(name) => format!("{} Fashion", capitalize_first(name)),
    }
}

/// Upper-case the first character only; the rest of the string is
/// unchanged.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 19.99,
            image: format!("https://img.example/{id}.jpg"),
            category: "clothing".to_string(),
        }
    }

    fn products(n: u32) -> Vec<Product> {
        (1..=n).map(|i| product(i, &format!("Item {i}"))).collect()
    }

    #[test]
    fn test_chunk_is_lossless_and_ordered() {
        for n in 0..10 {
            let input = products(n);
            let groups = chunk(&input);
            let rejoined: Vec<Product> = groups.concat();
            assert_eq!(rejoined, input, "chunking of {n} products lost or reordered items");
        }
    }

    #[test]
    fn test_chunk_sizes() {
        let groups = chunk(&products(7));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 3);
        assert_eq!(groups[2].len(), 1);
        assert!(groups.iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn test_chunk_empty_input() {
        assert!(chunk(&[]).is_empty());
    }

    #[test]
    fn test_chunk_exact_multiple() {
        let groups = chunk(&products(6));
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == GROUP_SIZE));
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let input = products(5);
        assert_eq!(filter_by_title(&input, ""), input);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let input = vec![
            product(1, "Mens Cotton Shirt"),
            product(2, "Gold Ring"),
            product(3, "SHIRT, slim fit"),
        ];
        let matched = filter_by_title(&input, "shirt");
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].id, 1);
        assert_eq!(matched[1].id, 3);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let input = products(9);
        let matched = filter_by_title(&input, "item");
        let ids: Vec<u32> = matched.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_by_title(&products(4), "zzz").is_empty());
    }

    #[test]
    fn test_project_empty_products_signals_empty_state() {
        let model = project(&[], "");
        assert!(model.is_empty());
    }

    #[test]
    fn test_project_filtered_then_chunked() {
        // 7 products, 2 with "Shirt" in the title: one group of 2.
        let mut input = products(5);
        input.push(product(6, "Mens Casual Shirt"));
        input.push(product(7, "Linen shirt"));

        let model = project(&input, "shirt");
        assert_eq!(model.groups.len(), 1);
        assert_eq!(model.groups[0].len(), 2);
    }

    #[test]
    fn test_dropdown_entries_sentinel_first() {
        let entries = dropdown_entries(&["electronics".to_string(), "jewelery".to_string()]);
        assert_eq!(entries, vec!["All Products", "electronics", "jewelery"]);
    }

    #[test]
    fn test_dropdown_entries_before_categories_load() {
        assert_eq!(dropdown_entries(&[]), vec!["All Products"]);
    }

    #[test]
    fn test_selector_label() {
        assert_eq!(selector_label(&CategoryFilter::All), "All Category");
        assert_eq!(
            selector_label(&CategoryFilter::Named("jewelery".to_string())),
            "jewelery"
        );
    }

    #[test]
    fn test_section_heading_default() {
        assert_eq!(section_heading(&CategoryFilter::All), "Man & Woman Fashion");
    }

    #[test]
    fn test_section_heading_capitalizes_first_char_only() {
        assert_eq!(
            section_heading(&CategoryFilter::Named("jewelery".to_string())),
            "Jewelery Fashion"
        );
        assert_eq!(
            section_heading(&CategoryFilter::Named("men's clothing".to_string())),
            "Men's clothing Fashion"
        );
    }

    #[test]
    fn test_capitalize_first_edge_cases() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first("Electronics"), "Electronics");
    }
}
