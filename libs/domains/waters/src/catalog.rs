//! The static product catalog.
//!
//! The catalog is built once at startup and shared read-only across all
//! requests, so no locking is needed.

use std::collections::HashSet;

use crate::models::{Composition, Product};

/// Ordered, immutable collection of all known products.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from seed data.
    ///
    /// Panics on duplicate product ids: a corrupt seed is a programming
    /// defect, not a runtime-recoverable error.
    pub fn new(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        for product in &products {
            assert!(
                seen.insert(product.id.as_str()),
                "duplicate product id in catalog seed: {}",
                product.id
            );
        }
        Self { products }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Exact id lookup, no case folding. O(n) is fine at this catalog size.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The built-in demo catalog of Turkish mineral waters.
    ///
    /// Compositions are label values in mg/L (pH unitless); they are demo
    /// data, to be replaced with verified label readings.
    pub fn seed() -> Self {
        Self::new(vec![
            Product {
                id: "beypazari-200-6".into(),
                name: "Doğal Maden Suyu 200ml (6'lı)".into(),
                brand: "Beypazarı".into(),
                source: Some("Beypazarı / Ankara".into()),
                volume_ml: Some(200),
                pack_size: Some(6),
                carbonated: true,
                composition: Composition {
                    na: Some(350.0),
                    k: Some(30.0),
                    ca: Some(100.0),
                    mg: Some(60.0),
                    hco3: Some(1800.0),
                    so4: Some(120.0),
                    cl: Some(80.0),
                    no3: Some(2.0),
                    f: Some(0.8),
                    tds: Some(2300.0),
                    ph: Some(6.3),
                },
                image_url: None,
                is_active: true,
                created_at: "2025-09-24T10:00:00Z".into(),
                updated_at: "2025-09-27T18:00:00Z".into(),
            },
            Product {
                id: "akmina-200-6".into(),
                name: "Doğal Maden Suyu 200ml (6'lı)".into(),
                brand: "Akmina".into(),
                source: Some("Afyon".into()),
                volume_ml: Some(200),
                pack_size: Some(6),
                carbonated: true,
                composition: Composition {
                    na: Some(20.0),
                    k: Some(5.0),
                    ca: Some(60.0),
                    mg: Some(25.0),
                    hco3: Some(450.0),
                    so4: Some(40.0),
                    cl: Some(15.0),
                    no3: Some(1.0),
                    f: Some(0.2),
                    tds: Some(700.0),
                    ph: Some(7.2),
                },
                image_url: None,
                is_active: true,
                created_at: "2025-09-23T09:00:00Z".into(),
                updated_at: "2025-09-27T18:00:00Z".into(),
            },
            Product {
                id: "kizilay-erzincan-200-6".into(),
                name: "Erzincan Doğal Maden Suyu 200ml (6'lı)".into(),
                brand: "Kızılay".into(),
                source: Some("Erzincan".into()),
                volume_ml: Some(200),
                pack_size: Some(6),
                carbonated: true,
                composition: Composition {
                    na: Some(10.0),
                    k: Some(2.0),
                    ca: Some(220.0),
                    mg: Some(65.0),
                    hco3: Some(1800.0),
                    so4: Some(35.0),
                    cl: Some(10.0),
                    no3: Some(0.5),
                    f: Some(0.1),
                    tds: Some(2200.0),
                    ph: Some(6.5),
                },
                image_url: None,
                is_active: true,
                created_at: "2025-09-20T12:00:00Z".into(),
                updated_at: "2025-09-26T15:45:10Z".into(),
            },
            Product {
                id: "uludag-200-6".into(),
                name: "Uludağ Doğal Maden Suyu 200ml (6'lı)".into(),
                brand: "Uludağ".into(),
                source: Some("Bursa".into()),
                volume_ml: Some(200),
                pack_size: Some(6),
                carbonated: true,
                composition: Composition {
                    na: Some(30.0),
                    k: Some(4.0),
                    ca: Some(80.0),
                    mg: Some(35.0),
                    hco3: Some(600.0),
                    so4: Some(50.0),
                    cl: Some(20.0),
                    no3: Some(1.0),
                    f: Some(0.3),
                    tds: Some(900.0),
                    ph: Some(6.9),
                },
                image_url: None,
                is_active: true,
                created_at: "2025-09-22T10:00:00Z".into(),
                updated_at: "2025-09-22T10:00:00Z".into(),
            },
            Product {
                id: "sirma-200-6".into(),
                name: "Sırma Doğal Maden Suyu 200ml (6'lı)".into(),
                brand: "Sırma".into(),
                source: Some("Sakarya".into()),
                volume_ml: Some(200),
                pack_size: Some(6),
                carbonated: true,
                composition: Composition {
                    na: Some(8.0),
                    k: Some(1.5),
                    ca: Some(50.0),
                    mg: Some(20.0),
                    hco3: Some(400.0),
                    so4: Some(20.0),
                    cl: Some(8.0),
                    no3: Some(0.8),
                    f: Some(0.1),
                    tds: Some(600.0),
                    ph: Some(7.4),
                },
                image_url: None,
                is_active: true,
                created_at: "2025-09-10T08:00:00Z".into(),
                updated_at: "2025-09-20T08:00:00Z".into(),
            },
        ])
    }
}
