//! Products API routes

use axum::Router;
use domain_waters::{handlers, CatalogService};

use crate::state::AppState;

/// Create the catalog router backed by the in-memory catalog
pub fn router(state: &AppState) -> Router {
    let service = CatalogService::new(state.catalog.clone());
    handlers::router(service)
}
