//! Core data model types for ecokarma.
//!
//! These are the self-reported lifestyle inputs that the scoring engine
//! consumes. All numeric fields are validated by the profile layer before
//! a `UserInput` is ever constructed, so scoring treats them as trusted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One person's self-reported lifestyle for the year under audit.
///
/// Constructed once by the input-collection layer and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    /// Display name, shown on the intro slide and the share card.
    pub name: String,
    /// Whether a car is owned. `car_km` is meaningless otherwise.
    #[serde(default)]
    pub car_owner: bool,
    /// Daily car distance in kilometers.
    #[serde(default)]
    pub car_km: f64,
    /// Whether a motorbike is owned. `bike_km` is meaningless otherwise.
    #[serde(default)]
    pub bike_owner: bool,
    /// Daily motorbike distance in kilometers.
    #[serde(default)]
    pub bike_km: f64,
    /// Monthly electricity bill in currency units.
    #[serde(default)]
    pub electricity_bill: f64,
    /// Diet category.
    #[serde(default)]
    pub diet: Diet,
    /// Air conditioning used daily.
    #[serde(default)]
    pub ac_daily: bool,
    /// Single-use plastic items per day.
    #[serde(default)]
    pub plastic_items: u32,
}

/// Diet categories, in increasing order of emission weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Vegan,
    #[default]
    Vegetarian,
    NonVeg,
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diet::Vegan => write!(f, "vegan"),
            Diet::Vegetarian => write!(f, "vegetarian"),
            Diet::NonVeg => write!(f, "non-veg"),
        }
    }
}

impl FromStr for Diet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vegan" => Ok(Diet::Vegan),
            "vegetarian" | "veg" => Ok(Diet::Vegetarian),
            "non-veg" | "nonveg" | "non-vegetarian" => Ok(Diet::NonVeg),
            other => Err(format!("unknown diet: {other}")),
        }
    }
}
