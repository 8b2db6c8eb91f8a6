//! Booking quote engine.
//!
//! Computes rental quotes (nights, subtotal, insurance and service fees)
//! and checks requested dates against a listing's availability calendar.

pub mod availability;
pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod suggest;

// Re-export commonly used items
pub use availability::{check_availability, Availability};
pub use calculators::{apply_rate, compute_nights, compute_quote, QuoteError};
pub use models::{AvailabilityEntry, BookingQuote, DateRange, FeeSchedule, Listing, ListingError};
pub use routes::router;
pub use suggest::{PriceOracle, StaticPriceOracle};
