use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::SearchEngine;
use crate::models::{
    ErrorResponse, Facets, HealthResponse, ListingFacetsResponse, PriceRange,
    SearchListingsRequest, SearchListingsResponse,
};
use crate::services::ListingsProvider;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<ListingsProvider>,
    pub engine: SearchEngine,
    pub price_defaults: PriceRange,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/listings/search", web::get().to(search_listings))
        .route("/listings/facets", web::get().to(listing_facets))
        .route("/listings/{id}", web::get().to(get_listing));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Listing search endpoint
///
/// GET /api/v1/listings/search
///
/// Query parameters: `listing_type` (all|sale|rent), `city`, `propertyType`,
/// `minPrice`, `maxPrice`, `minBedrooms`, `minBathrooms`, `features`
/// (comma-joined), `page`, `maxVisible`.
async fn search_listings(
    state: web::Data<AppState>,
    query: web::Query<SearchListingsRequest>,
) -> impl Responder {
    let request = query.into_inner();

    if let Err(errors) = request.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let criteria = match request.to_criteria(state.price_defaults) {
        Ok(criteria) => criteria,
        Err(message) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid filter".to_string(),
                message,
                status_code: 400,
            });
        }
    };

    let snapshot = match state.provider.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to fetch listings snapshot: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = match request.max_visible {
        Some(max_visible) => {
            state
                .engine
                .search_with_visibility(&snapshot, &criteria, request.page, max_visible)
        }
        None => state.engine.search(&snapshot, &criteria, request.page),
    };

    tracing::info!(
        "Search matched {} of {} listings (page {} of {})",
        result.total_matches,
        snapshot.len(),
        result.page,
        result.total_pages
    );

    HttpResponse::Ok().json(SearchListingsResponse::from(result))
}

/// Single listing lookup
///
/// GET /api/v1/listings/{id}
async fn get_listing(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    let snapshot = match state.provider.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to fetch listings snapshot: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    match snapshot.into_iter().find(|listing| listing.id == id) {
        Some(listing) => HttpResponse::Ok().json(listing),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: format!("No listing with id {}", id),
            status_code: 404,
        }),
    }
}

/// Facet values for the filter sidebar
///
/// GET /api/v1/listings/facets
async fn listing_facets(state: web::Data<AppState>) -> impl Responder {
    let snapshot = match state.provider.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to fetch listings snapshot: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch listings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let facets = Facets::collect(&snapshot);
    HttpResponse::Ok().json(ListingFacetsResponse {
        facets,
        total_listings: snapshot.len(),
    })
}
