//! Quote service functions with catalog and cache access.
//!
//! These wrap the pure calculators: look up the product, try the quote
//! cache, compute on a miss and remember successful quotes.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{AppCache, QuoteKey};
use crate::catalog::Catalog;
use crate::error::{AppError, Result};

use super::calculators::compute_quote;
use super::models::{BookingQuote, DateRange, FeeSchedule};
use super::suggest::PriceOracle;

/// Quote for a catalog product
#[derive(Debug, Clone)]
pub struct ProductQuote {
    pub product_id: u32,
    pub daily_price: u64,
    pub quote: BookingQuote,
    pub cached: bool,
}

/// Quote a catalog product for `range`.
///
/// The catalog lock is only held long enough to snapshot the listing.
pub async fn quote_product(
    catalog: &RwLock<Catalog>,
    cache: &AppCache,
    fees: &FeeSchedule,
    product_id: u32,
    range: DateRange,
) -> Result<ProductQuote> {
    let (listing, revision) = {
        let catalog = catalog.read().await;
        let product = catalog.get(product_id).ok_or(AppError::NotFound)?;
        (product.listing.clone(), product.revision)
    };

    let key = QuoteKey::new(product_id, revision, &range);

    if let Some(cached) = cache.quotes.get(&key).await {
        debug!("Cache HIT for quote: {:?}", key);
        return Ok(ProductQuote {
            product_id,
            daily_price: listing.daily_price(),
            quote: *cached,
            cached: true,
        });
    }

    debug!("Cache MISS for quote: {:?}", key);
    let quote = compute_quote(&listing, &range, fees)?;
    cache.quotes.insert(key, Arc::new(quote)).await;

    Ok(ProductQuote {
        product_id,
        daily_price: listing.daily_price(),
        quote,
        cached: false,
    })
}

/// Ask the oracle for a suggested daily price for a catalog product
pub async fn suggest_product_price(
    catalog: &RwLock<Catalog>,
    oracle: &dyn PriceOracle,
    product_id: u32,
) -> Result<u64> {
    let metadata = {
        let catalog = catalog.read().await;
        catalog.get(product_id).ok_or(AppError::NotFound)?.metadata()
    };

    oracle
        .suggest_price(&metadata)
        .ok_or(AppError::NoSuggestion)
}
