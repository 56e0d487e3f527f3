// catalog/mod.rs - HTTP client for the remote catalog service
//
// Wraps `reqwest::Client` with catalog-specific URL construction. The
// service exposes three read-only endpoints (no auth, no pagination):
//
//   GET /products                       -> JSON array of Product
//   GET /products/category/{category}   -> server-side filtered array
//   GET /products/categories            -> JSON array of category names
//
// There is no retry, no backoff, and no request cancellation; a failed
// fetch is reported once and the caller keeps whatever it had.

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::model::{CategoryFilter, Product};

/// Production catalog service. Override with `CATALOG_API_URL` or
/// [`CatalogClient::new`].
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Failure while talking to the catalog service.
///
/// The variants exist for diagnostics only; callers treat every kind the
/// same way (log it, keep the previous state slice).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog service returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("malformed catalog payload: {message}")]
    Deserialization { message: String },
}

/// Async client for the remote catalog service.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl Default for CatalogClient {
    fn default() -> Self {
        let base = std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base)
            .unwrap_or_else(|_| Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"));
        Self::new(base_url)
    }
}

impl CatalogClient {
    /// Create a client against the given service root.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client with a pre-built `reqwest::Client` (used by tests to
    /// point at a mock server).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The service root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the full, unfiltered product list.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint(&["products"]);
        let products: Vec<Product> = self.get_json(url).await?;
        info!("fetched {} products", products.len());
        Ok(products)
    }

    /// Fetch products filtered server-side by exact category match.
    ///
    /// `category` must be a real remote category name; the synthesized
    /// "All Products" entry is handled by [`fetch_products`](Self::fetch_products)
    /// and never reaches this endpoint.
    pub async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let url = self.endpoint(&["products", "category", category]);
        let products: Vec<Product> = self.get_json(url).await?;
        info!("fetched {} products for category {:?}", products.len(), category);
        Ok(products)
    }

    /// Fetch the products matching a [`CategoryFilter`].
    ///
    /// `All` delegates to the unfiltered endpoint, so the remote service
    /// only ever sees real category names.
    pub async fn fetch_products(&self, filter: &CategoryFilter) -> Result<Vec<Product>, CatalogError> {
        match filter.remote_name() {
            None => self.fetch_all().await,
            Some(category) => self.fetch_by_category(category).await,
        }
    }

    /// Fetch the list of remote category names.
    ///
    /// The returned list does not include the synthesized "All Products"
    /// entry; that is prepended at projection time.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint(&["products", "categories"]);
        let categories: Vec<String> = self.get_json(url).await?;
        info!("fetched {} categories", categories.len());
        Ok(categories)
    }

    /// Build a full URL from path segments.
    ///
    /// Segments are appended via `path_segments_mut`, which percent-encodes
    /// anything that is not URL-path-safe (e.g. the space in
    /// "men's clothing").
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("catalog base URL cannot be a base")
            .pop_if_empty()
            .extend(segments);
        url
    }

    /// Send a GET request and decode the JSON payload.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(CatalogError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        let body = resp.text().await.map_err(CatalogError::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            // Truncate by chars, not bytes; a byte slice can split a
            // multibyte UTF-8 character and panic.
            let preview: String = body.chars().take(200).collect();
            CatalogError::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new(Url::parse("https://catalog.example").unwrap())
    }

    #[test]
    fn test_endpoint_products() {
        let url = client().endpoint(&["products"]);
        assert_eq!(url.as_str(), "https://catalog.example/products");
    }

    #[test]
    fn test_endpoint_categories() {
        let url = client().endpoint(&["products", "categories"]);
        assert_eq!(url.as_str(), "https://catalog.example/products/categories");
    }

    #[test]
    fn test_endpoint_encodes_category_names() {
        // Remote category names can contain spaces ("men's clothing");
        // they must be path-encoded, never sent raw.
        let url = client().endpoint(&["products", "category", "men's clothing"]);
        assert_eq!(
            url.as_str(),
            "https://catalog.example/products/category/men's%20clothing"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash_in_base() {
        let client = CatalogClient::new(Url::parse("https://catalog.example/").unwrap());
        let url = client.endpoint(&["products"]);
        assert_eq!(url.as_str(), "https://catalog.example/products");
    }

    #[test]
    fn test_default_base_url_parses() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        assert_eq!(url.scheme(), "https");
    }
}
