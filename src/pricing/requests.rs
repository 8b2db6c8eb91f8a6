//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use super::models::{AvailabilityEntry, DateRange, Listing, ListingError};

/// Inline listing supplied by the caller
#[derive(Debug, Deserialize)]
pub struct ListingRequest {
    pub daily_price: u64,
    #[serde(default)]
    pub availability: Vec<AvailabilityEntry>,
}

impl ListingRequest {
    pub fn into_listing(self) -> Result<Listing, ListingError> {
        Listing::new(self.daily_price, self.availability)
    }
}

/// Date range from a date picker
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DateRangeRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<DateRangeRequest> for DateRange {
    fn from(req: DateRangeRequest) -> Self {
        DateRange::new(req.start_date, req.end_date)
    }
}

/// Request to quote or check an inline listing
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub listing: ListingRequest,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl QuoteRequest {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Browse filter for the product catalog
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Calendar days to insert or overwrite on a product
#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub entries: Vec<AvailabilityEntry>,
}
