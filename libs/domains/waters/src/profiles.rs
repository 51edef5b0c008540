//! Named health-profile presets.
//!
//! A profile is a static bundle of default range thresholds for a
//! health-oriented selection heuristic. Presets are configuration, never
//! derived from catalog contents, and they are not medical advice - the
//! listing notes say so explicitly.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use strum::Display;
use utoipa::ToSchema;

use crate::models::Attribute;

/// Which side of a range a preset threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Min,
    Max,
}

impl BoundSide {
    /// Query parameter name for a bound, e.g. `maxNa` or `minHCO3`.
    pub fn param_name(self, attribute: Attribute) -> String {
        let prefix = match self {
            BoundSide::Min => "min",
            BoundSide::Max => "max",
        };
        format!("{}{}", prefix, attribute)
    }
}

/// The closed set of recognized health profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum HealthProfile {
    SodiumRestricted,
    BicarbonateRich,
    MagnesiumRich,
    CalciumRich,
    LowNitrate,
}

impl HealthProfile {
    pub const ALL: [HealthProfile; 5] = [
        HealthProfile::SodiumRestricted,
        HealthProfile::BicarbonateRich,
        HealthProfile::MagnesiumRich,
        HealthProfile::CalciumRich,
        HealthProfile::LowNitrate,
    ];

    /// Default thresholds this profile contributes. Each lands in the
    /// filter only where the caller left that exact bound unset.
    pub fn preset(self) -> &'static [(Attribute, BoundSide, f64)] {
        match self {
            HealthProfile::SodiumRestricted => &[(Attribute::Na, BoundSide::Max, 20.0)],
            HealthProfile::BicarbonateRich => &[(Attribute::Hco3, BoundSide::Min, 600.0)],
            HealthProfile::MagnesiumRich => &[(Attribute::Mg, BoundSide::Min, 50.0)],
            HealthProfile::CalciumRich => &[(Attribute::Ca, BoundSide::Min, 150.0)],
            HealthProfile::LowNitrate => &[(Attribute::No3, BoundSide::Max, 10.0)],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthProfile::SodiumRestricted => "Low Sodium",
            HealthProfile::BicarbonateRich => "Bicarbonate Rich",
            HealthProfile::MagnesiumRich => "Magnesium Rich",
            HealthProfile::CalciumRich => "Calcium Rich",
            HealthProfile::LowNitrate => "Low Nitrate",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            HealthProfile::SodiumRestricted => {
                "Low sodium is preferred for hypertension and similar conditions. (Not medical advice.)"
            }
            HealthProfile::BicarbonateRich => {
                "May be preferred for digestion. (Not medical advice.)"
            }
            HealthProfile::MagnesiumRich => {
                "Selection focused on magnesium intake. (Not medical advice.)"
            }
            HealthProfile::CalciumRich => {
                "Selection focused on calcium intake. (Not medical advice.)"
            }
            HealthProfile::LowNitrate => {
                "Keeps the nitrate limit low. (Not medical advice.)"
            }
        }
    }
}

/// Entry in the `/profiles` listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileDescriptor {
    pub key: HealthProfile,
    pub label: String,
    /// Threshold map, e.g. `{"maxNa": 20.0}`
    #[schema(value_type = Object)]
    pub criteria: Value,
    pub note: String,
}

/// Response body for `GET /profiles`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileList {
    pub profiles: Vec<ProfileDescriptor>,
}

/// Fixed-shape listing of all profiles for frontend pickers.
pub fn profile_list() -> ProfileList {
    let profiles = HealthProfile::ALL
        .iter()
        .map(|&profile| {
            let mut criteria = Map::new();
            for &(attribute, side, value) in profile.preset() {
                criteria.insert(side.param_name(attribute), json!(value));
            }
            ProfileDescriptor {
                key: profile,
                label: profile.label().to_string(),
                criteria: Value::Object(criteria),
                note: profile.note().to_string(),
            }
        })
        .collect();

    ProfileList { profiles }
}
