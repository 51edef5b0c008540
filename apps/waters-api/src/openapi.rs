//! OpenAPI documentation configuration

// The braced empty nest path below trips unused_braces in the derive expansion.
#![allow(unused_braces)]

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Waters API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Waters API",
        version = "0.1.0",
        description = "Catalog-query API for bottled mineral water products",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        // Braced so the macro sees an expression: a literal "" is rejected,
        // but an empty prefix is intended (routes are mounted at the root).
        (path = { "" }, api = domain_waters::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Mineral water catalog endpoints"),
        (name = "Profiles", description = "Health profile presets")
    )
)]
pub struct ApiDoc;
