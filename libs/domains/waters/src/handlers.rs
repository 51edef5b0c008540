//! HTTP handlers for the mineral water catalog API.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{Composition, Product};
use crate::profiles::{HealthProfile, ProfileDescriptor, ProfileList};
use crate::query::{Pagination, ProductPage, ProductQuery, SortDir, SortEcho};
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product, list_profiles),
    components(
        schemas(
            Product, Composition, ProductPage, Pagination, SortEcho, SortDir,
            HealthProfile, ProfileList, ProfileDescriptor, ErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Mineral water catalog endpoints"),
        (name = "Profiles", description = "Health profile presets")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router(service: CatalogService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/profiles", get(list_profiles))
        .with_state(shared_service)
}

/// List products with search, range filters, profile presets, sorting and
/// pagination
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of matching products", body = ProductPage),
        (status = 400, description = "Inverted range or disallowed parameter value", body = ErrorResponse)
    )
)]
async fn list_products(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<ProductQuery>,
) -> CatalogResult<Json<ProductPage>> {
    let page = service.list_products(query)?;
    Ok(Json(page))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this ID", body = ErrorResponse)
    )
)]
async fn get_product(
    State(service): State<Arc<CatalogService>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(&id)?;
    Ok(Json(product))
}

/// List health profile presets with their thresholds
#[utoipa::path(
    get,
    path = "/profiles",
    tag = "Profiles",
    responses(
        (status = 200, description = "All profile presets", body = ProfileList)
    )
)]
async fn list_profiles(State(service): State<Arc<CatalogService>>) -> Json<ProfileList> {
    Json(service.profiles())
}
