//! Availability checks against a listing's calendar.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::calculators::{compute_nights, QuoteError};
use super::models::{DateRange, Listing};

/// Outcome of an availability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Nights that are blocked or missing from the calendar
    Unavailable(BTreeSet<NaiveDate>),
}

/// Nights occupied by a range: `[start_date, end_date)`.
pub fn occupied_nights(range: &DateRange) -> impl Iterator<Item = NaiveDate> {
    let end = range.end_date;
    range.start_date.iter_days().take_while(move |day| *day < end)
}

/// Check every night of `range` against the listing's calendar.
///
/// Fails with `InvalidRange` for an empty or reversed range and with
/// `OutOfRange` when any night falls outside the published window. Gaps
/// inside the window count as conflicts, same as days marked unavailable.
pub fn check_availability(listing: &Listing, range: &DateRange) -> Result<Availability, QuoteError> {
    if compute_nights(range) < 1 || range.end_date < range.start_date {
        return Err(QuoteError::InvalidRange {
            start_date: range.start_date,
            end_date: range.end_date,
        });
    }

    let out_of_range = || QuoteError::OutOfRange {
        start_date: range.start_date,
        end_date: range.end_date,
        window: listing.window(),
    };

    let (first, last) = listing.window().ok_or_else(out_of_range)?;

    let mut conflicts = BTreeSet::new();
    for night in occupied_nights(range) {
        if night < first || night > last {
            return Err(out_of_range());
        }
        if listing.is_available_on(night) != Some(true) {
            conflicts.insert(night);
        }
    }

    if conflicts.is_empty() {
        Ok(Availability::Available)
    } else {
        Ok(Availability::Unavailable(conflicts))
    }
}
