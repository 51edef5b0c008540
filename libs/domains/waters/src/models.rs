use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

/// Chemical composition of one bottled water, as printed on the label.
///
/// All concentrations are mg/L; `ph` is unitless. Every field is
/// independently optional: `None` means the label does not report that
/// measurement, which is distinct from a measured zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Composition {
    /// Sodium
    pub na: Option<f64>,
    /// Potassium
    pub k: Option<f64>,
    /// Calcium
    pub ca: Option<f64>,
    /// Magnesium
    pub mg: Option<f64>,
    /// Bicarbonate
    pub hco3: Option<f64>,
    /// Sulfate
    pub so4: Option<f64>,
    /// Chloride
    pub cl: Option<f64>,
    /// Nitrate
    pub no3: Option<f64>,
    /// Fluoride
    pub f: Option<f64>,
    /// Total dissolved solids
    pub tds: Option<f64>,
    /// pH (conventionally 0-14, not enforced)
    pub ph: Option<f64>,
}

/// The eleven measured attributes a range filter or sort key can target.
///
/// `Display` yields the label used in query parameter names and error
/// fields (`Na`, `HCO3`, `CL`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Attribute {
    Na,
    K,
    Ca,
    Mg,
    #[strum(serialize = "HCO3")]
    Hco3,
    #[strum(serialize = "SO4")]
    So4,
    #[strum(serialize = "CL")]
    Cl,
    #[strum(serialize = "NO3")]
    No3,
    F,
    #[strum(serialize = "TDS")]
    Tds,
    #[strum(serialize = "PH")]
    Ph,
}

impl Attribute {
    pub const ALL: [Attribute; 11] = [
        Attribute::Na,
        Attribute::K,
        Attribute::Ca,
        Attribute::Mg,
        Attribute::Hco3,
        Attribute::So4,
        Attribute::Cl,
        Attribute::No3,
        Attribute::F,
        Attribute::Tds,
        Attribute::Ph,
    ];

    /// Lowercase field name as it appears in the wire representation
    /// (`composition.na`, `composition.hco3`, ...).
    pub fn field_name(self) -> &'static str {
        match self {
            Attribute::Na => "na",
            Attribute::K => "k",
            Attribute::Ca => "ca",
            Attribute::Mg => "mg",
            Attribute::Hco3 => "hco3",
            Attribute::So4 => "so4",
            Attribute::Cl => "cl",
            Attribute::No3 => "no3",
            Attribute::F => "f",
            Attribute::Tds => "tds",
            Attribute::Ph => "ph",
        }
    }
}

impl Composition {
    /// Value of one attribute, `None` when unmeasured.
    pub fn value(&self, attribute: Attribute) -> Option<f64> {
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
}

/// Product entity - one bottled mineral water as sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned at catalog creation, never regenerated
    pub id: String,
    /// Product name as printed on the label
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Spring / bottling location, when known
    pub source: Option<String>,
    /// Bottle volume in milliliters
    pub volume_ml: Option<i64>,
    /// Units per pack (e.g. 6)
    pub pack_size: Option<i32>,
    /// Naturally or artificially carbonated
    #[serde(default = "default_carbonated")]
    pub carbonated: bool,
    /// Label composition
    pub composition: Composition,
    pub image_url: Option<String>,
    pub is_active: bool,
    /// Creation timestamp (ISO-8601, UTC)
    pub created_at: String,
    /// Last update timestamp (ISO-8601, UTC)
    pub updated_at: String,
}

fn default_carbonated() -> bool {
    true
}
