//! The product listing query pipeline.
//!
//! One request flows through four stages:
//!
//! ```text
//! ProductQuery            raw query parameters
//!       │  resolve()      preset merge + range/sort/page validation
//!       ▼
//! FilterSpec              fully resolved constraints
//!       │  execute()      filter → stable sort → paginate
//!       ▼
//! ProductPage             items + pagination + sort/filter echo
//! ```
//!
//! The pipeline is pure: identical parameters against an unchanged catalog
//! always produce an identical envelope.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Attribute, Product};
use crate::profiles::{BoundSide, HealthProfile};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Allow-listed `sortBy` values, kept lexicographically sorted so the
/// rejection message can join them directly.
pub const ALLOWED_SORT: [&str; 8] = [
    "brand",
    "composition.ca",
    "composition.hco3",
    "composition.mg",
    "composition.na",
    "composition.ph",
    "composition.tds",
    "name",
];

/// Raw query parameters for `GET /products`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// 1-based page number
    pub page: i64,
    /// Items per page, 1-100
    pub page_size: i64,
    /// Case-insensitive substring search over name, brand and source
    pub q: Option<String>,
    /// Exact brand match, case-insensitive
    pub brand: Option<String>,
    /// Exact source match, case-insensitive
    pub source: Option<String>,
    pub carbonated: Option<bool>,

    // Composition bounds (mg/L, pH unitless)
    pub min_na: Option<f64>,
    pub max_na: Option<f64>,
    pub min_k: Option<f64>,
    pub max_k: Option<f64>,
    pub min_ca: Option<f64>,
    pub max_ca: Option<f64>,
    pub min_mg: Option<f64>,
    pub max_mg: Option<f64>,
    #[serde(rename = "minHCO3")]
    pub min_hco3: Option<f64>,
    #[serde(rename = "maxHCO3")]
    pub max_hco3: Option<f64>,
    #[serde(rename = "minSO4")]
    pub min_so4: Option<f64>,
    #[serde(rename = "maxSO4")]
    pub max_so4: Option<f64>,
    #[serde(rename = "minCL")]
    pub min_cl: Option<f64>,
    #[serde(rename = "maxCL")]
    pub max_cl: Option<f64>,
    #[serde(rename = "minNO3")]
    pub min_no3: Option<f64>,
    #[serde(rename = "maxNO3")]
    pub max_no3: Option<f64>,
    pub min_f: Option<f64>,
    pub max_f: Option<f64>,
    #[serde(rename = "minTDS")]
    pub min_tds: Option<f64>,
    #[serde(rename = "maxTDS")]
    pub max_tds: Option<f64>,
    #[serde(rename = "minPH")]
    pub min_ph: Option<f64>,
    #[serde(rename = "maxPH")]
    pub max_ph: Option<f64>,

    /// Health profile preset; explicit bounds override its thresholds
    pub profile: Option<HealthProfile>,
    pub sort_by: String,
    pub sort_dir: SortDir,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            q: None,
            brand: None,
            source: None,
            carbonated: None,
            min_na: None,
            max_na: None,
            min_k: None,
            max_k: None,
            min_ca: None,
            max_ca: None,
            min_mg: None,
            max_mg: None,
            min_hco3: None,
            max_hco3: None,
            min_so4: None,
            max_so4: None,
            min_cl: None,
            max_cl: None,
            min_no3: None,
            max_no3: None,
            min_f: None,
            max_f: None,
            min_tds: None,
            max_tds: None,
            min_ph: None,
            max_ph: None,
            profile: None,
            sort_by: "brand".to_string(),
            sort_dir: SortDir::default(),
        }
    }
}

impl ProductQuery {
    fn ranges(&self) -> CompositionRanges {
        CompositionRanges {
            na: RangeBound::new(self.min_na, self.max_na),
            k: RangeBound::new(self.min_k, self.max_k),
            ca: RangeBound::new(self.min_ca, self.max_ca),
            mg: RangeBound::new(self.min_mg, self.max_mg),
            hco3: RangeBound::new(self.min_hco3, self.max_hco3),
            so4: RangeBound::new(self.min_so4, self.max_so4),
            cl: RangeBound::new(self.min_cl, self.max_cl),
            no3: RangeBound::new(self.min_no3, self.max_no3),
            f: RangeBound::new(self.min_f, self.max_f),
            tds: RangeBound::new(self.min_tds, self.max_tds),
            ph: RangeBound::new(self.min_ph, self.max_ph),
        }
    }
}

/// Sort direction. Absent composition values sort last either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }
}

/// Resolved sort key. The dotted `composition.*` accessors dispatch to a
/// typed attribute instead of reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Brand,
    Name,
    Composition(Attribute),
}

impl SortKey {
    pub fn parse(raw: &str) -> CatalogResult<SortKey> {
        let key = match raw {
            "brand" => SortKey::Brand,
            "name" => SortKey::Name,
            "composition.na" => SortKey::Composition(Attribute::Na),
            "composition.mg" => SortKey::Composition(Attribute::Mg),
            "composition.ca" => SortKey::Composition(Attribute::Ca),
            "composition.hco3" => SortKey::Composition(Attribute::Hco3),
            "composition.tds" => SortKey::Composition(Attribute::Tds),
            "composition.ph" => SortKey::Composition(Attribute::Ph),
            _ => {
                return Err(CatalogError::InvalidParam {
                    field: "sortBy",
                    message: format!("sortBy must be one of: {}", ALLOWED_SORT.join(", ")),
                })
            }
        };
        Ok(key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Brand => "brand",
            SortKey::Name => "name",
            SortKey::Composition(Attribute::Na) => "composition.na",
            SortKey::Composition(Attribute::K) => "composition.k",
            SortKey::Composition(Attribute::Ca) => "composition.ca",
            SortKey::Composition(Attribute::Mg) => "composition.mg",
            SortKey::Composition(Attribute::Hco3) => "composition.hco3",
            SortKey::Composition(Attribute::So4) => "composition.so4",
            SortKey::Composition(Attribute::Cl) => "composition.cl",
            SortKey::Composition(Attribute::No3) => "composition.no3",
            SortKey::Composition(Attribute::F) => "composition.f",
            SortKey::Composition(Attribute::Tds) => "composition.tds",
            SortKey::Composition(Attribute::Ph) => "composition.ph",
        }
    }
}

/// An optional `[min, max]` constraint over one composition attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeBound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeBound {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Whether a measurement satisfies this bound. An inactive bound admits
    /// everything; an active bound is never satisfied by a missing
    /// measurement - unknown data cannot back a health-relevant filter.
    pub fn admits(&self, value: Option<f64>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        if self.min.is_some_and(|lo| value < lo) {
            return false;
        }
        if self.max.is_some_and(|hi| value > hi) {
            return false;
        }
        true
    }
}

/// Per-attribute range bounds for all eleven composition attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositionRanges {
    pub na: RangeBound,
    pub k: RangeBound,
    pub ca: RangeBound,
    pub mg: RangeBound,
    pub hco3: RangeBound,
    pub so4: RangeBound,
    pub cl: RangeBound,
    pub no3: RangeBound,
    pub f: RangeBound,
    pub tds: RangeBound,
    pub ph: RangeBound,
}

impl CompositionRanges {
    pub fn bound(&self, attribute: Attribute) -> RangeBound {
        match attribute {
            Attribute::Na => self.na,
            Attribute::K => self.k,
            Attribute::Ca => self.ca,
            Attribute::Mg => self.mg,
            Attribute::Hco3 => self.hco3,
            Attribute::So4 => self.so4,
            Attribute::Cl => self.cl,
            Attribute::No3 => self.no3,
            Attribute::F => self.f,
            Attribute::Tds => self.tds,
            Attribute::Ph => self.ph,
        }
    }

    pub fn bound_mut(&mut self, attribute: Attribute) -> &mut RangeBound {
        match attribute {
            Attribute::Na => &mut self.na,
            Attribute::K => &mut self.k,
            Attribute::Ca => &mut self.ca,
            Attribute::Mg => &mut self.mg,
            Attribute::Hco3 => &mut self.hco3,
            Attribute::So4 => &mut self.so4,
            Attribute::Cl => &mut self.cl,
            Attribute::No3 => &mut self.no3,
            Attribute::F => &mut self.f,
            Attribute::Tds => &mut self.tds,
            Attribute::Ph => &mut self.ph,
        }
    }

    pub fn any_active(&self) -> bool {
        Attribute::ALL.iter().any(|&a| self.bound(a).is_active())
    }
}

/// An empty string parameter is no filter at all.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Merge a profile's default thresholds into caller-supplied bounds.
///
/// An explicit caller bound always wins over the preset value - this is an
/// override relationship, not an intersection.
pub fn merge_preset(mut ranges: CompositionRanges, profile: HealthProfile) -> CompositionRanges {
    for &(attribute, side, value) in profile.preset() {
        let bound = ranges.bound_mut(attribute);
        let slot = match side {
            BoundSide::Min => &mut bound.min,
            BoundSide::Max => &mut bound.max,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
    ranges
}

/// Fully resolved constraints for one request: presets merged in, ranges
/// validated, sort key resolved. This is what runs against the catalog.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub q: Option<String>,
    pub brand: Option<String>,
    pub source: Option<String>,
    pub carbonated: Option<bool>,
    pub ranges: CompositionRanges,
    pub profile: Option<HealthProfile>,
    pub sort_by: SortKey,
    pub sort_dir: SortDir,
    pub page: u64,
    pub page_size: u64,
}

impl FilterSpec {
    /// Validate raw parameters and merge profile presets.
    ///
    /// The range consistency check runs after the merge, so a preset-supplied
    /// bound participates in the same check as a user-supplied one.
    pub fn resolve(query: ProductQuery) -> CatalogResult<FilterSpec> {
        if query.page < 1 {
            return Err(CatalogError::InvalidParam {
                field: "page",
                message: "page must be greater than or equal to 1".to_string(),
            });
        }
        if !(1..=MAX_PAGE_SIZE).contains(&query.page_size) {
            return Err(CatalogError::InvalidParam {
                field: "pageSize",
                message: format!("pageSize must be between 1 and {}", MAX_PAGE_SIZE),
            });
        }

        let mut ranges = query.ranges();
        if let Some(profile) = query.profile {
            ranges = merge_preset(ranges, profile);
        }

        for attribute in Attribute::ALL {
            let bound = ranges.bound(attribute);
            if let (Some(lo), Some(hi)) = (bound.min, bound.max) {
                if lo > hi {
                    return Err(CatalogError::InvalidRange(attribute));
                }
            }
        }

        let sort_by = SortKey::parse(&query.sort_by)?;

        Ok(FilterSpec {
            q: non_empty(query.q),
            brand: non_empty(query.brand),
            source: non_empty(query.source),
            carbonated: query.carbonated,
            ranges,
            profile: query.profile,
            sort_by,
            sort_dir: query.sort_dir,
            page: query.page as u64,
            page_size: query.page_size as u64,
        })
    }

    /// Selecting a profile triggers range filtering even when every one of
    /// its thresholds was overridden by the caller.
    fn ranges_triggered(&self) -> bool {
        self.profile.is_some() || self.ranges.any_active()
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(q) = &self.q {
            let needle = q.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.brand.to_lowercase().contains(&needle)
                || product
                    .source
                    .as_deref()
                    .is_some_and(|s| s.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if product.brand.to_lowercase() != brand.to_lowercase() {
                return false;
            }
        }

        if let Some(source) = &self.source {
            // A product without a source never matches a source filter.
            match product.source.as_deref() {
                Some(s) if s.to_lowercase() == source.to_lowercase() => {}
                _ => return false,
            }
        }

        if let Some(carbonated) = self.carbonated {
            if product.carbonated != carbonated {
                return false;
            }
        }

        if self.ranges_triggered() {
            for attribute in Attribute::ALL {
                if !self
                    .ranges
                    .bound(attribute)
                    .admits(product.composition.value(attribute))
                {
                    return false;
                }
            }
        }

        true
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self.sort_by {
            SortKey::Brand => self.sort_dir.apply(a.brand.cmp(&b.brand)),
            SortKey::Name => self.sort_dir.apply(a.name.cmp(&b.name)),
            SortKey::Composition(attribute) => {
                let left = a.composition.value(attribute);
                let right = b.composition.value(attribute);
                // Absent values stay last regardless of direction; only the
                // present-vs-present comparison follows sortDir.
                match (left, right) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(x), Some(y)) => self.sort_dir.apply(x.total_cmp(&y)),
                }
            }
        }
    }

    /// Filter, stable-sort and paginate the catalog into one page.
    pub fn execute(&self, catalog: &Catalog) -> ProductPage {
        let mut matched: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| self.matches(p))
            .collect();
        // Vec::sort_by is stable: equal keys keep catalog order.
        matched.sort_by(|a, b| self.compare(a, b));

        let total_items = matched.len() as u64;
        let total_pages = total_items.div_ceil(self.page_size);
        // Saturate: a page number past the catalog must yield an empty
        // slice, not overflow.
        let start = (self.page - 1).saturating_mul(self.page_size);
        let start = usize::try_from(start).unwrap_or(usize::MAX);
        let items: Vec<Product> = matched
            .into_iter()
            .skip(start)
            .take(self.page_size as usize)
            .cloned()
            .collect();

        ProductPage {
            items,
            pagination: Pagination {
                page: self.page,
                page_size: self.page_size,
                total_items,
                total_pages,
            },
            sort: SortEcho {
                by: self.sort_by.as_str().to_string(),
                dir: self.sort_dir,
            },
            filters: self.filters_echo(),
        }
    }

    /// Echo of every filter value actually used, after preset merging, so
    /// the caller can reproduce the exact query that produced a page.
    fn filters_echo(&self) -> Value {
        let mut map = Map::new();
        map.insert("q".to_string(), json!(self.q));
        map.insert("brand".to_string(), json!(self.brand));
        map.insert("source".to_string(), json!(self.source));
        map.insert("carbonated".to_string(), json!(self.carbonated));
        map.insert("profile".to_string(), json!(self.profile));
        for attribute in Attribute::ALL {
            let bound = self.ranges.bound(attribute);
            map.insert(BoundSide::Min.param_name(attribute), json!(bound.min));
            map.insert(BoundSide::Max.param_name(attribute), json!(bound.max));
        }
        Value::Object(map)
    }
}

/// One page of products plus everything needed to reproduce the query.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub pagination: Pagination,
    pub sort: SortEcho,
    /// Resolved filter echo, post profile merge
    #[schema(value_type = Object)]
    pub filters: Value,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SortEcho {
    pub by: String,
    pub dir: SortDir,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Composition;

    fn water(id: &str, brand: &str, na: Option<f64>, mg: Option<f64>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("{} Maden Suyu", brand),
            brand: brand.to_string(),
            source: None,
            volume_ml: Some(200),
            pack_size: Some(6),
            carbonated: true,
            composition: Composition {
                na,
                mg,
                ..Composition::default()
            },
            image_url: None,
            is_active: true,
            created_at: "2025-09-01T00:00:00Z".into(),
            updated_at: "2025-09-01T00:00:00Z".into(),
        }
    }

    fn seed_ids(page: &ProductPage) -> Vec<&str> {
        page.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_inverted_range_fails_with_attribute_name() {
        let query = ProductQuery {
            min_na: Some(50.0),
            max_na: Some(20.0),
            ..ProductQuery::default()
        };
        let err = FilterSpec::resolve(query).unwrap_err();
        assert_eq!(err, CatalogError::InvalidRange(Attribute::Na));
    }

    #[test]
    fn test_range_check_runs_after_preset_merge() {
        // sodiumRestricted contributes maxNa=20; an explicit minNa=100
        // makes the merged pair inconsistent.
        let query = ProductQuery {
            profile: Some(HealthProfile::SodiumRestricted),
            min_na: Some(100.0),
            ..ProductQuery::default()
        };
        let err = FilterSpec::resolve(query).unwrap_err();
        assert_eq!(err, CatalogError::InvalidRange(Attribute::Na));
    }

    #[test]
    fn test_explicit_bound_overrides_preset() {
        let query = ProductQuery {
            profile: Some(HealthProfile::SodiumRestricted),
            max_na: Some(5.0),
            ..ProductQuery::default()
        };
        let spec = FilterSpec::resolve(query).unwrap();
        assert_eq!(spec.ranges.na.max, Some(5.0));
    }

    #[test]
    fn test_preset_fills_unset_bound() {
        let query = ProductQuery {
            profile: Some(HealthProfile::BicarbonateRich),
            ..ProductQuery::default()
        };
        let spec = FilterSpec::resolve(query).unwrap();
        assert_eq!(spec.ranges.hco3.min, Some(600.0));
    }

    #[test]
    fn test_page_and_page_size_are_rejected_not_clamped() {
        let query = ProductQuery {
            page: 0,
            ..ProductQuery::default()
        };
        let err = FilterSpec::resolve(query).unwrap_err();
        assert_eq!(err.code(), "INVALID_PARAM");

        for page_size in [0, 101] {
            let query = ProductQuery {
                page_size,
                ..ProductQuery::default()
            };
            let err = FilterSpec::resolve(query).unwrap_err();
            assert!(matches!(
                err,
                CatalogError::InvalidParam {
                    field: "pageSize",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_unknown_sort_key_lists_allowed_values() {
        let query = ProductQuery {
            sort_by: "bogus".to_string(),
            ..ProductQuery::default()
        };
        let err = FilterSpec::resolve(query).unwrap_err();
        match err {
            CatalogError::InvalidParam { field, message } => {
                assert_eq!(field, "sortBy");
                assert_eq!(
                    message,
                    "sortBy must be one of: brand, composition.ca, composition.hco3, \
                     composition.mg, composition.na, composition.ph, composition.tds, name"
                );
            }
            other => panic!("expected InvalidParam, got {:?}", other),
        }
    }

    #[test]
    fn test_bound_admits() {
        let inactive = RangeBound::default();
        assert!(inactive.admits(None));
        assert!(inactive.admits(Some(1.0)));

        let bound = RangeBound::new(Some(10.0), Some(20.0));
        assert!(bound.admits(Some(10.0)));
        assert!(bound.admits(Some(20.0)));
        assert!(!bound.admits(Some(9.9)));
        assert!(!bound.admits(Some(20.1)));
        // A missing measurement never satisfies an active bound.
        assert!(!bound.admits(None));

        let open_ended = RangeBound::new(Some(10.0), None);
        assert!(open_ended.admits(Some(1e9)));
        assert!(!open_ended.admits(None));
    }

    #[test]
    fn test_range_filter_bounds_products() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            max_na: Some(20.0),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);

        assert_eq!(page.pagination.total_items, 3);
        // Default sort: brand ascending.
        assert_eq!(
            seed_ids(&page),
            vec!["akmina-200-6", "kizilay-erzincan-200-6", "sirma-200-6"]
        );
        for product in &page.items {
            assert!(product.composition.na.unwrap() <= 20.0);
        }
    }

    #[test]
    fn test_profile_alone_triggers_filtering_even_when_fully_overridden() {
        let catalog = Catalog::new(vec![
            water("measured", "A", Some(15.0), None),
            water("unmeasured", "B", None, None),
        ]);
        // The override pushes maxNa to 1000, admitting every measured value,
        // but the profile still forces range filtering: the product with an
        // unmeasured Na is excluded.
        let query = ProductQuery {
            profile: Some(HealthProfile::SodiumRestricted),
            max_na: Some(1000.0),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(seed_ids(&page), vec!["measured"]);
    }

    #[test]
    fn test_unbounded_attributes_do_not_require_presence() {
        // mg is unmeasured, but only na carries a bound.
        let catalog = Catalog::new(vec![water("w", "A", Some(15.0), None)]);
        let query = ProductQuery {
            max_na: Some(20.0),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(page.pagination.total_items, 1);
    }

    #[test]
    fn test_search_matches_name_brand_and_source() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            q: Some("erzincan".to_string()),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(seed_ids(&page), vec!["kizilay-erzincan-200-6"]);
    }

    #[test]
    fn test_equality_filters_are_case_insensitive() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            brand: Some("akmina".to_string()),
            source: Some("AFYON".to_string()),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(seed_ids(&page), vec!["akmina-200-6"]);
    }

    #[test]
    fn test_source_filter_excludes_products_without_source() {
        let mut sourceless = water("no-source", "A", Some(1.0), None);
        sourceless.source = None;
        let catalog = Catalog::new(vec![sourceless]);
        let query = ProductQuery {
            source: Some("Afyon".to_string()),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(page.pagination.total_items, 0);
    }

    #[test]
    fn test_absent_sort_values_go_last_in_both_directions() {
        let catalog = Catalog::new(vec![
            water("high", "A", None, Some(65.0)),
            water("none", "B", None, None),
            water("low", "C", None, Some(20.0)),
        ]);

        let asc = ProductQuery {
            sort_by: "composition.mg".to_string(),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(asc).unwrap().execute(&catalog);
        assert_eq!(seed_ids(&page), vec!["low", "high", "none"]);

        let desc = ProductQuery {
            sort_by: "composition.mg".to_string(),
            sort_dir: SortDir::Desc,
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(desc).unwrap().execute(&catalog);
        assert_eq!(seed_ids(&page), vec!["high", "low", "none"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let catalog = Catalog::new(vec![
            water("first", "Same", Some(1.0), None),
            water("second", "Same", Some(2.0), None),
            water("third", "Same", Some(3.0), None),
        ]);
        let query = ProductQuery::default(); // brand asc, all equal
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(seed_ids(&page), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_string_sort_is_case_sensitive() {
        let catalog = Catalog::new(vec![
            water("lower", "abc", None, None),
            water("upper", "Zbc", None, None),
        ]);
        let query = ProductQuery::default();
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        // Ordinal comparison: 'Z' (0x5A) < 'a' (0x61).
        assert_eq!(seed_ids(&page), vec!["upper", "lower"]);
    }

    #[test]
    fn test_pagination_arithmetic() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            page: 3,
            page_size: 2,
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total_items, 5);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_an_error() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            page: 9,
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_items, 5);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_huge_page_number_yields_empty_page() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            page: i64::MAX,
            page_size: 100,
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_items, 5);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_empty_equality_filters_are_ignored() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            q: Some(String::new()),
            brand: Some(String::new()),
            source: Some(String::new()),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(page.pagination.total_items, 5);
        assert!(page.filters["brand"].is_null());
        assert!(page.filters["source"].is_null());
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            carbonated: Some(false),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(page.pagination.total_items, 0);
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn test_filters_echo_carries_merged_values() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            profile: Some(HealthProfile::SodiumRestricted),
            max_na: Some(5.0),
            min_mg: Some(10.0),
            ..ProductQuery::default()
        };
        let page = FilterSpec::resolve(query).unwrap().execute(&catalog);

        assert_eq!(page.filters["profile"], "sodiumRestricted");
        // The explicit override, not the preset value.
        assert_eq!(page.filters["maxNa"], 5.0);
        assert_eq!(page.filters["minMg"], 10.0);
        assert!(page.filters["minNa"].is_null());
        assert!(page.filters["q"].is_null());
        assert_eq!(page.sort.by, "brand");
    }

    #[test]
    fn test_identical_queries_yield_identical_envelopes() {
        let catalog = Catalog::seed();
        let query = ProductQuery {
            max_na: Some(20.0),
            sort_by: "composition.na".to_string(),
            ..ProductQuery::default()
        };
        let first = FilterSpec::resolve(query.clone()).unwrap().execute(&catalog);
        let second = FilterSpec::resolve(query).unwrap().execute(&catalog);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
