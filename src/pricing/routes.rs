//! Pricing API route handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::availability::check_availability;
use super::calculators::{compute_nights, compute_quote};
use super::requests::{DateRangeRequest, QuoteRequest};
use super::responses::{
    AvailabilityResponse, MoneyResponse, NightsResponse, QuoteResponse, SuggestedPriceResponse,
};
use super::services;

/// Pricing routes, mounted at the application root
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/nights", post(nights))
        .route("/api/pricing/availability", post(availability))
        .route("/api/pricing/quote", post(quote))
        .route("/api/products/:id/quote", get(product_quote))
        .route("/api/products/:id/suggested-price", get(suggested_price))
}

/// Count nights for a date range
async fn nights(
    payload: std::result::Result<Json<DateRangeRequest>, JsonRejection>,
) -> Result<Json<NightsResponse>> {
    let Json(req) = payload?;
    Ok(Json(NightsResponse {
        start_date: req.start_date,
        end_date: req.end_date,
        nights: compute_nights(&req.into()),
    }))
}

/// Check an inline listing's calendar for a date range
async fn availability(
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<AvailabilityResponse>> {
    let Json(req) = payload?;
    let range = req.range();
    let listing = req.listing.into_listing()?;
    let result = check_availability(&listing, &range)?;
    Ok(Json(result.into()))
}

/// Quote an inline listing
async fn quote(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(req) = payload?;
    let range = req.range();
    let listing = req.listing.into_listing()?;
    let quote = compute_quote(&listing, &range, &state.config.fees)?;

    Ok(Json(QuoteResponse::new(
        &range,
        listing.daily_price(),
        &quote,
        &state.config.currency,
    )))
}

/// Quote a catalog product
async fn product_quote(
    State(state): State<AppState>,
    id: std::result::Result<Path<u32>, PathRejection>,
    query: std::result::Result<Query<DateRangeRequest>, QueryRejection>,
) -> Result<Json<QuoteResponse>> {
    let Path(id) = id?;
    let Query(req) = query?;
    let range = req.into();
    let result = services::quote_product(
        &state.catalog,
        &state.cache,
        &state.config.fees,
        id,
        range,
    )
    .await?;

    Ok(Json(QuoteResponse::new(
        &range,
        result.daily_price,
        &result.quote,
        &state.config.currency,
    )))
}

/// Suggested daily price for a catalog product
async fn suggested_price(
    State(state): State<AppState>,
    id: std::result::Result<Path<u32>, PathRejection>,
) -> Result<Json<SuggestedPriceResponse>> {
    let Path(id) = id?;
    let amount = services::suggest_product_price(&state.catalog, state.oracle.as_ref(), id).await?;

    Ok(Json(SuggestedPriceResponse {
        product_id: id,
        suggested_price: MoneyResponse::new(amount, &state.config.currency),
    }))
}
