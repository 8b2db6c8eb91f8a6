//! In-memory product catalog
//!
//! Seeded from `data/catalog.json`. Holds each product's listing and a
//! revision counter that moves whenever the availability calendar changes.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use crate::pricing::models::{AvailabilityEntry, Listing, ListingError};
use crate::pricing::requests::BrowseQuery;
use crate::pricing::suggest::ListingMetadata;

const SEED_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors raised while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Product {id} has an invalid listing: {source}")]
    InvalidListing { id: u32, source: ListingError },

    #[error("Product id {0} appears more than once")]
    DuplicateId(u32),
}

/// Product record as stored in the seed file
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: u32,
    name: String,
    category: String,
    location: String,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    reviews: u32,
    owner: String,
    daily_price: u64,
    #[serde(default)]
    availability: Vec<AvailabilityEntry>,
}

/// A rentable product and its listing
#[derive(Debug, Clone)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    pub owner: String,
    pub listing: Listing,
    pub revision: u64,
}

impl Product {
    pub fn metadata(&self) -> ListingMetadata {
        ListingMetadata {
            name: self.name.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
        }
    }

    fn matches(&self, query: &BrowseQuery) -> bool {
        // Search text is lowercased but not trimmed; category is an exact match
        let matches_search = match query.q.as_deref() {
            None => true,
            Some(q) => {
                let q = q.to_lowercase();
                self.name.to_lowercase().contains(&q) || self.category.to_lowercase().contains(&q)
            }
        };

        let matches_category = match query.category.as_deref() {
            None | Some("all") => true,
            Some(category) => self.category == category,
        };

        matches_search && matches_category
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    products: BTreeMap<u32, Product>,
}

impl Catalog {
    /// Catalog with the bundled demo products
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;

        let mut products = BTreeMap::new();
        for record in records {
            let id = record.id;
            let listing = Listing::new(record.daily_price, record.availability)
                .map_err(|source| CatalogError::InvalidListing { id, source })?;

            let product = Product {
                id,
                name: record.name,
                category: record.category,
                location: record.location,
                rating: record.rating,
                reviews: record.reviews,
                owner: record.owner,
                listing,
                revision: 0,
            };

            if products.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }

        info!("Catalog loaded with {} products", products.len());
        Ok(Self { products })
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Products matching the search text and category, in id order
    pub fn browse(&self, query: &BrowseQuery) -> Vec<&Product> {
        self.products.values().filter(|p| p.matches(query)).collect()
    }

    /// Upsert calendar days for a product and bump its revision.
    ///
    /// Returns the updated product, or `None` if the id is unknown.
    pub fn update_availability(
        &mut self,
        id: u32,
        entries: Vec<AvailabilityEntry>,
    ) -> Option<&Product> {
        let product = self.products.get_mut(&id)?;
        let count = entries.len();
        product.listing.upsert_availability(entries);
        product.revision += 1;
        info!(
            "Availability updated for product {} ({} days, revision {})",
            id, count, product.revision
        );
        Some(product)
    }
}
