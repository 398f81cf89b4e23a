use stockroom_core::{LocationId, ProductId};
use stockroom_store::{Collection, CollectionStore, StoreError, read_records, write_records};

use crate::location::Location;
use crate::product::Product;

/// Typed access to the product/location reference collections.
#[derive(Debug)]
pub struct Catalog<S> {
    store: S,
}

impl<S: CollectionStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn products(&self) -> Result<Vec<Product>, StoreError> {
        read_records(&self.store, Collection::Products)
    }

    pub fn locations(&self) -> Result<Vec<Location>, StoreError> {
        read_records(&self.store, Collection::Locations)
    }

    /// Replace the product collection.
    pub fn save_products(&self, products: &[Product]) -> Result<(), StoreError> {
        write_records(&self.store, Collection::Products, products)
    }

    /// Replace the location collection.
    pub fn save_locations(&self, locations: &[Location]) -> Result<(), StoreError> {
        write_records(&self.store, Collection::Locations, locations)
    }

    /// Display name for a product; falls back to the raw id for unknown
    /// products so labels never go blank.
    pub fn product_name(&self, id: &ProductId) -> Result<String, StoreError> {
        let products = self.products()?;
        Ok(products
            .into_iter()
            .find(|p| p.id == *id)
            .map(|p| p.name)
            .unwrap_or_else(|| id.to_string()))
    }

    /// Display name for a location; falls back to the raw id.
    pub fn location_name(&self, id: &LocationId) -> Result<String, StoreError> {
        let locations = self.locations()?;
        Ok(locations
            .into_iter()
            .find(|l| l.id == *id)
            .map(|l| l.name)
            .unwrap_or_else(|| id.to_string()))
    }
}
