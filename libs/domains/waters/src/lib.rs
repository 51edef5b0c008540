//! Mineral Waters Domain
//!
//! Catalog-query domain for bottled mineral water products: a fixed
//! in-memory catalog with free-text search, per-attribute composition range
//! filters, named health-profile presets, sorting and pagination.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Query orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Query    │  ← Resolve, filter, sort, paginate
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Catalog   │  ← Static product data
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use domain_waters::{handlers, Catalog, CatalogService};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::seed());
//! let service = CatalogService::new(catalog);
//! let router = handlers::router(service);
//! ```

pub mod catalog;
pub mod error;
pub mod handlers;
pub mod models;
pub mod profiles;
pub mod query;
pub mod service;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{Attribute, Composition, Product};
pub use profiles::{HealthProfile, ProfileDescriptor, ProfileList};
pub use query::{FilterSpec, ProductPage, ProductQuery, SortDir, SortKey};
pub use service::CatalogService;
