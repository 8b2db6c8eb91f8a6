//! In-memory caching using moka
//!
//! Caches computed quotes per product calendar revision. An availability
//! update bumps the revision, so stale quotes are simply never looked up
//! again and age out on their TTL.

use chrono::NaiveDate;
use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::pricing::models::{BookingQuote, DateRange};

/// Cache key for a product quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteKey {
    pub product_id: u32,
    pub revision: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl QuoteKey {
    pub fn new(product_id: u32, revision: u64, range: &DateRange) -> Self {
        Self {
            product_id,
            revision,
            start_date: range.start_date,
            end_date: range.end_date,
        }
    }
}

/// Application cache holding computed quotes
#[derive(Clone)]
pub struct AppCache {
    pub quotes: Cache<QuoteKey, Arc<BookingQuote>>,
}

impl AppCache {
    /// Create a new cache instance with the given quote TTL
    pub fn new(quote_ttl: Duration) -> Self {
        Self {
            // Quotes: 10k entries, idle entries dropped after half the TTL
            quotes: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(quote_ttl)
                .time_to_idle(quote_ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
}
