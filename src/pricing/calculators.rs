//! Core quote calculation functions.
//!
//! Pure functions for booking math - no catalog or cache access.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::prelude::*;

use super::availability::{check_availability, Availability};
use super::models::{BookingQuote, DateRange, FeeSchedule, Listing};

/// Reasons a quote cannot be produced. All but `InvalidRate` are
/// user-correctable; a negative rate is a configuration fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("End date {end_date} must be after start date {start_date}")]
    InvalidRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("Dates {start_date} to {end_date} fall outside the listing's calendar")]
    OutOfRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
        window: Option<(NaiveDate, NaiveDate)>,
    },

    #[error("{} requested day(s) are not available", dates.len())]
    AvailabilityConflict { dates: BTreeSet<NaiveDate> },

    #[error("Quote amount exceeds the supported range")]
    AmountOverflow,

    #[error("Fee rate {0} is negative")]
    InvalidRate(Decimal),
}

/// Whole calendar days between the two dates, ignoring their order.
///
/// `NaiveDate` carries no time-of-day or offset, so daylight-saving shifts
/// cannot produce off-by-one counts. Zero means an incomplete selection.
pub fn compute_nights(range: &DateRange) -> i64 {
    (range.end_date - range.start_date).num_days().abs()
}

/// Apply a percentage rate to an amount, rounding up to the next whole unit.
///
/// Negative rates are rejected with `InvalidRate`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rental_quotes::pricing::apply_rate;
///
/// assert_eq!(apply_rate(1700, dec!(0.05)).unwrap(), 85);
/// assert_eq!(apply_rate(3, dec!(0.05)).unwrap(), 1);   // ceil(0.15)
/// assert_eq!(apply_rate(0, dec!(0.10)).unwrap(), 0);
/// ```
pub fn apply_rate(amount: u64, rate: Decimal) -> Result<u64, QuoteError> {
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(QuoteError::InvalidRate(rate));
    }
    Decimal::from(amount)
        .checked_mul(rate)
        .map(|fee| fee.ceil())
        .and_then(|fee| fee.to_u64())
        .ok_or(QuoteError::AmountOverflow)
}

/// Compute a validated quote for booking `listing` over `range`.
///
/// Each fee is rounded up on its own before being added to the subtotal.
pub fn compute_quote(
    listing: &Listing,
    range: &DateRange,
    fees: &FeeSchedule,
) -> Result<BookingQuote, QuoteError> {
    let nights = compute_nights(range);
    if nights < 1 || range.end_date < range.start_date {
        return Err(QuoteError::InvalidRange {
            start_date: range.start_date,
            end_date: range.end_date,
        });
    }

    if let Availability::Unavailable(dates) = check_availability(listing, range)? {
        return Err(QuoteError::AvailabilityConflict { dates });
    }

    let subtotal = listing
        .daily_price()
        .checked_mul(nights as u64)
        .ok_or(QuoteError::AmountOverflow)?;
    let insurance_fee = apply_rate(subtotal, fees.insurance_rate)?;
    let service_fee = apply_rate(subtotal, fees.service_rate)?;
    let total = subtotal
        .checked_add(insurance_fee)
        .and_then(|t| t.checked_add(service_fee))
        .ok_or(QuoteError::AmountOverflow)?;

    Ok(BookingQuote {
        nights,
        subtotal,
        insurance_fee,
        service_fee,
        total,
    })
}
