//! Catalog service - the read-only query surface over the static catalog.

use std::sync::Arc;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;
use crate::profiles::{profile_list, ProfileList};
use crate::query::{FilterSpec, ProductPage, ProductQuery};

/// Serves listing, lookup and profile queries. The catalog is immutable
/// after startup, so the service is freely shareable across requests.
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the full filter/sort/paginate pipeline for one request.
    #[instrument(skip(self, query), fields(profile = ?query.profile, sort_by = %query.sort_by))]
    pub fn list_products(&self, query: ProductQuery) -> CatalogResult<ProductPage> {
        let spec = FilterSpec::resolve(query)?;
        Ok(spec.execute(&self.catalog))
    }

    /// Exact id lookup.
    #[instrument(skip(self))]
    pub fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Static listing of health-profile presets.
    pub fn profiles(&self) -> ProfileList {
        profile_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(Catalog::seed()))
    }

    #[test]
    fn test_get_product_by_id() {
        let product = service().get_product("uludag-200-6").unwrap();
        assert_eq!(product.brand, "Uludağ");
    }

    #[test]
    fn test_get_product_unknown_id() {
        let err = service().get_product("unknown-id").unwrap_err();
        assert_eq!(err, CatalogError::NotFound);
    }

    #[test]
    fn test_list_products_default_query_returns_whole_catalog() {
        let page = service().list_products(ProductQuery::default()).unwrap();
        assert_eq!(page.pagination.total_items, 5);
        let brands: Vec<_> = page.items.iter().map(|p| p.brand.as_str()).collect();
        assert_eq!(brands, vec!["Akmina", "Beypazarı", "Kızılay", "Sırma", "Uludağ"]);
    }
}
