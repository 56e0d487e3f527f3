// components/mod.rs - UI components module
//
// Structure:
// - chrome.rs: Static navigation and marketing chrome (inert)
// - search.rs: Search input and category selector
// - product.rs: Product cards and the carousel

pub mod chrome;
pub mod product;
pub mod search;

// Re-export commonly used components for convenience
pub use chrome::*;
pub use product::*;
pub use search::*;
