//! Reference data: products and warehouse locations.
//!
//! Thin domain crate over the `products` and `locations` collections. Label
//! lookups live here so every consumer renders the same names.

pub mod catalog;
pub mod location;
pub mod product;

pub use catalog::Catalog;
pub use location::Location;
pub use product::Product;
