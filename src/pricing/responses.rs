//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use super::availability::Availability;
use super::models::{AvailabilityEntry, BookingQuote, DateRange};

/// Money value for JSON responses (minor units)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyResponse {
    pub amount: u64,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: u64, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a night count
#[derive(Debug, Serialize)]
pub struct NightsResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: i64,
}

/// Response for an availability check
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub conflicting_dates: Vec<NaiveDate>,
}

impl From<Availability> for AvailabilityResponse {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::Available => Self {
                available: true,
                conflicting_dates: vec![],
            },
            Availability::Unavailable(dates) => Self {
                available: false,
                conflicting_dates: dates.into_iter().collect(),
            },
        }
    }
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: i64,
    pub daily_price: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub insurance_fee: MoneyResponse,
    pub service_fee: MoneyResponse,
    pub total: MoneyResponse,
}

impl QuoteResponse {
    pub fn new(range: &DateRange, daily_price: u64, quote: &BookingQuote, currency: &str) -> Self {
        Self {
            start_date: range.start_date,
            end_date: range.end_date,
            nights: quote.nights,
            daily_price: MoneyResponse::new(daily_price, currency),
            subtotal: MoneyResponse::new(quote.subtotal, currency),
            insurance_fee: MoneyResponse::new(quote.insurance_fee, currency),
            service_fee: MoneyResponse::new(quote.service_fee, currency),
            total: MoneyResponse::new(quote.total, currency),
        }
    }
}

/// Catalog product for browse and detail views
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    pub owner: String,
    pub daily_price: MoneyResponse,
    pub availability: Vec<AvailabilityEntry>,
}

/// Suggested daily price for a product
#[derive(Debug, Serialize)]
pub struct SuggestedPriceResponse {
    pub product_id: u32,
    pub suggested_price: MoneyResponse,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
