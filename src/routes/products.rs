//! Product catalog route handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::pricing::requests::{BrowseQuery, UpdateAvailabilityRequest};
use crate::pricing::responses::{MoneyResponse, ProductResponse};
use crate::AppState;

fn to_response(product: &Product, currency: &str) -> ProductResponse {
    ProductResponse {
        id: product.id,
        name: product.name.clone(),
        category: product.category.clone(),
        location: product.location.clone(),
        rating: product.rating,
        reviews: product.reviews,
        owner: product.owner.clone(),
        daily_price: MoneyResponse::new(product.listing.daily_price(), currency),
        availability: product.listing.entries(),
    }
}

/// Browse listing
pub async fn list(
    State(state): State<AppState>,
    query: std::result::Result<Query<BrowseQuery>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>> {
    let Query(query) = query?;
    let catalog = state.catalog.read().await;
    let products = catalog
        .browse(&query)
        .into_iter()
        .map(|p| to_response(p, &state.config.currency))
        .collect();
    Ok(Json(products))
}

/// Product detail
pub async fn detail(
    State(state): State<AppState>,
    id: std::result::Result<Path<u32>, PathRejection>,
) -> Result<Json<ProductResponse>> {
    let Path(id) = id?;
    let catalog = state.catalog.read().await;
    let product = catalog.get(id).ok_or(AppError::NotFound)?;
    Ok(Json(to_response(product, &state.config.currency)))
}

/// Owner calendar update: upsert days, returns the updated product
pub async fn update_availability(
    State(state): State<AppState>,
    id: std::result::Result<Path<u32>, PathRejection>,
    payload: std::result::Result<Json<UpdateAvailabilityRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let mut catalog = state.catalog.write().await;
    let product = catalog
        .update_availability(id, req.entries)
        .ok_or(AppError::NotFound)?;
    Ok(Json(to_response(product, &state.config.currency)))
}
