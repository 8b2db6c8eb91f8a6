//! Domain models for booking quotes.
//!
//! Amounts are integers in the currency's smallest unit. Rates are exact
//! decimals so fee rounding never drifts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Errors raised while constructing a listing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    #[error("Daily price must be positive")]
    NonPositivePrice,

    #[error("Availability calendar lists {0} more than once")]
    DuplicateDate(NaiveDate),
}

/// One day of an availability calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub date: NaiveDate,
    pub available: bool,
}

/// A rentable listing: price plus per-day availability calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    daily_price: u64,
    availability: BTreeMap<NaiveDate, bool>,
}

impl Listing {
    /// Build a listing, rejecting a zero price or repeated calendar dates.
    pub fn new(
        daily_price: u64,
        availability: impl IntoIterator<Item = AvailabilityEntry>,
    ) -> Result<Self, ListingError> {
        if daily_price == 0 {
            return Err(ListingError::NonPositivePrice);
        }

        let mut calendar = BTreeMap::new();
        for entry in availability {
            if calendar.insert(entry.date, entry.available).is_some() {
                return Err(ListingError::DuplicateDate(entry.date));
            }
        }

        Ok(Self {
            daily_price,
            availability: calendar,
        })
    }

    pub fn daily_price(&self) -> u64 {
        self.daily_price
    }

    /// Availability flag for a day, `None` if the calendar has no entry.
    pub fn is_available_on(&self, date: NaiveDate) -> Option<bool> {
        self.availability.get(&date).copied()
    }

    /// First and last published calendar day.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.availability.keys().next()?;
        let last = self.availability.keys().next_back()?;
        Some((*first, *last))
    }

    /// Calendar entries in date order
    pub fn entries(&self) -> Vec<AvailabilityEntry> {
        self.availability
            .iter()
            .map(|(date, available)| AvailabilityEntry {
                date: *date,
                available: *available,
            })
            .collect()
    }

    /// Insert or overwrite calendar days. Later entries win.
    pub fn upsert_availability(&mut self, entries: impl IntoIterator<Item = AvailabilityEntry>) {
        for entry in entries {
            self.availability.insert(entry.date, entry.available);
        }
    }
}

/// Requested rental period. Nights run from `start_date` up to, not
/// including, `end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

/// Price breakdown for a prospective booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    pub nights: i64,
    pub subtotal: u64,
    pub insurance_fee: u64,
    pub service_fee: u64,
    pub total: u64,
}

/// Platform surcharges applied to a rental subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    pub insurance_rate: Decimal,
    pub service_rate: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            insurance_rate: dec!(0.05),
            service_rate: dec!(0.10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    fn entry(d: u32, available: bool) -> AvailabilityEntry {
        AvailabilityEntry {
            date: day(d),
            available,
        }
    }

    #[test]
    fn test_listing_rejects_zero_price() {
        let err = Listing::new(0, vec![entry(15, true)]).unwrap_err();
        assert_eq!(err, ListingError::NonPositivePrice);
    }

    #[test]
    fn test_listing_rejects_duplicate_dates() {
        let err = Listing::new(850, vec![entry(15, true), entry(15, false)]).unwrap_err();
        assert_eq!(err, ListingError::DuplicateDate(day(15)));
    }

    #[test]
    fn test_listing_window_is_sorted_regardless_of_input_order() {
        let listing = Listing::new(850, vec![entry(18, true), entry(15, true), entry(16, false)]).unwrap();
        assert_eq!(listing.window(), Some((day(15), day(18))));
        assert_eq!(listing.entries()[0].date, day(15));
    }

    #[test]
    fn test_listing_empty_calendar_has_no_window() {
        let listing = Listing::new(850, vec![]).unwrap();
        assert_eq!(listing.window(), None);
    }

    #[test]
    fn test_upsert_availability_overwrites_and_extends() {
        let mut listing = Listing::new(850, vec![entry(15, true)]).unwrap();
        listing.upsert_availability(vec![entry(15, false), entry(16, true)]);

        assert_eq!(listing.is_available_on(day(15)), Some(false));
        assert_eq!(listing.is_available_on(day(16)), Some(true));
        assert_eq!(listing.is_available_on(day(17)), None);
    }

    #[test]
    fn test_default_fee_schedule() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.insurance_rate, dec!(0.05));
        assert_eq!(fees.service_rate, dec!(0.10));
    }
}
