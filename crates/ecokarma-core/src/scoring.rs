//! The karma scoring engine.
//!
//! A single pure operation converts a validated `UserInput` into a
//! `Verdict`. The operation is total over the documented input domain:
//! there is no failure path, and identical input yields an identical
//! verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{Diet, UserInput};

/// kg CO2e per km driven by car, per day.
const CAR_KG_PER_KM: f64 = 0.19;
/// kg CO2e per km ridden by motorbike, per day.
const BIKE_KG_PER_KM: f64 = 0.08;
/// kg CO2e per single-use plastic item, per day.
const PLASTIC_KG_PER_ITEM: f64 = 0.06;
/// kg CO2e per day of air conditioning.
const AC_KG_PER_DAY: f64 = 4.0;
/// kg CO2e absorbed by one tree in one year.
const KG_PER_TREE: f64 = 22.0;
const DAYS_PER_YEAR: f64 = 365.0;
/// Score below this is a DEFAULTER.
const SUSTAINABLE_THRESHOLD: u32 = 500;

/// The complete scoring output for one input set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Estimated annual emissions in kg CO2e.
    pub annual_co2: f64,
    /// Offset obligation: `annual_co2` divided by one tree's annual absorption.
    pub trees_owed: u32,
    /// Credit-style score in [300, 850].
    pub score: u32,
    /// Classification from the score threshold.
    pub status: KarmaStatus,
    /// The category contributing the most annualized emissions.
    pub heavyweight: Heavyweight,
}

/// Verdict classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KarmaStatus {
    Defaulter,
    Sustainable,
}

impl fmt::Display for KarmaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KarmaStatus::Defaulter => write!(f, "DEFAULTER"),
            KarmaStatus::Sustainable => write!(f, "SUSTAINABLE"),
        }
    }
}

/// Emission categories competing for "heaviest contributor".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Travel,
    Energy,
    Consumption,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Travel => write!(f, "Travel"),
            Category::Energy => write!(f, "Energy"),
            Category::Consumption => write!(f, "Consumption"),
        }
    }
}

/// The heaviest-contributing category, with its own impact figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heavyweight {
    pub category: Category,
    /// Annualized kg CO2e attributed to this category.
    pub impact: f64,
    /// Trees owed by this category alone.
    pub trees_from_category: u32,
    /// One-line description naming the dominant sub-source.
    pub description: String,
}

/// Compute the verdict for one lifestyle input.
pub fn compute_verdict(input: &UserInput) -> Verdict {
    // Daily per-source emissions in kg CO2e.
    let car = if input.car_owner {
        input.car_km * CAR_KG_PER_KM
    } else {
        0.0
    };
    let bike = if input.bike_owner {
        input.bike_km * BIKE_KG_PER_KM
    } else {
        0.0
    };
    let diet = match input.diet {
        Diet::NonVeg => 3.3,
        Diet::Vegetarian => 1.7,
        Diet::Vegan => 1.0,
    };
    let plastic = f64::from(input.plastic_items) * PLASTIC_KG_PER_ITEM;
    let ac = if input.ac_daily { AC_KG_PER_DAY } else { 0.0 };

    // Electricity is a fixed currency-to-energy-to-emissions conversion and
    // comes out annual directly, unlike the other sources.
    let electricity = (input.electricity_bill / 8.0) * 0.82 * 12.0;

    let daily_total = car + bike + diet + plastic + ac;
    let annual_co2 = daily_total * DAYS_PER_YEAR + electricity;

    let trees_owed = trees_for(annual_co2);
    let score = score_for(trees_owed);
    let status = if score >= SUSTAINABLE_THRESHOLD {
        KarmaStatus::Sustainable
    } else {
        KarmaStatus::Defaulter
    };

    // Annualized category impacts.
    let travel = (car + bike) * DAYS_PER_YEAR;
    let energy = electricity + ac * DAYS_PER_YEAR;
    let consumption = (diet + plastic) * DAYS_PER_YEAR;

    let heavyweight = match heaviest(travel, energy, consumption) {
        Category::Travel => {
            let trees = trees_for(travel);
            let source = if input.car_owner && car > bike {
                "car"
            } else {
                "bike"
            };
            Heavyweight {
                category: Category::Travel,
                impact: travel,
                trees_from_category: trees,
                description: describe(Category::Travel, source, trees),
            }
        }
        Category::Energy => {
            let trees = trees_for(energy);
            // Compares annualized AC against half the (already annual)
            // electricity figure; kept from the source formula.
            let source = if input.ac_daily && ac * DAYS_PER_YEAR > electricity / 2.0 {
                "AC"
            } else {
                "electricity"
            };
            Heavyweight {
                category: Category::Energy,
                impact: energy,
                trees_from_category: trees,
                description: describe(Category::Energy, source, trees),
            }
        }
        Category::Consumption => {
            let trees = trees_for(consumption);
            let source = if diet * DAYS_PER_YEAR > plastic * DAYS_PER_YEAR {
                "diet"
            } else {
                "plastic consumption"
            };
            Heavyweight {
                category: Category::Consumption,
                impact: consumption,
                trees_from_category: trees,
                description: describe(Category::Consumption, source, trees),
            }
        }
    };

    Verdict {
        annual_co2,
        trees_owed,
        score,
        status,
        heavyweight,
    }
}

/// Trees owed for a kg CO2e figure, rounded half-up.
fn trees_for(kg_co2: f64) -> u32 {
    (kg_co2 / KG_PER_TREE).round() as u32
}

/// Score drops 10 points per tree owed, floored at 300.
fn score_for(trees_owed: u32) -> u32 {
    (850i64 - i64::from(trees_owed) * 10).max(300) as u32
}

/// Select the heaviest category. Ties resolve Travel over Energy over
/// Consumption.
fn heaviest(travel: f64, energy: f64, consumption: f64) -> Category {
    if travel >= energy && travel >= consumption {
        Category::Travel
    } else if energy >= consumption {
        Category::Energy
    } else {
        Category::Consumption
    }
}

/// Build the heavyweight description line. The Consumption variant drops
/// the word "usage" after the source name.
fn describe(category: Category, source: &str, trees: u32) -> String {
    let noun = if trees == 1 { "tree" } else { "trees" };
    match category {
        Category::Consumption => format!("Your {source} alone destroyed {trees} {noun}."),
        _ => format!("Your {source} usage alone destroyed {trees} {noun}."),
    }
}

/// How many Earths would be needed if everyone lived on this footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetDemand {
    /// Display multiplier ("1", "2.5", or "4").
    pub earths: &'static str,
    /// Whether the multiplier is worth calling out (trees > 10).
    pub show_multiplier: bool,
    /// The reality-check message that goes with it.
    pub message: &'static str,
}

/// Planet-equivalent demand for a trees-owed figure.
pub fn planet_demand(trees_owed: u32) -> PlanetDemand {
    if trees_owed > 50 {
        PlanetDemand {
            earths: "4",
            show_multiplier: true,
            message: "Your lifestyle demands resources far beyond what our planet can \
                      regenerate. If 8 billion people lived like you, we would need four \
                      Earths to sustain humanity. The ecological overshoot is catastrophic.",
        }
    } else if trees_owed > 10 {
        PlanetDemand {
            earths: "2.5",
            show_multiplier: true,
            message: "Your consumption pattern exceeds Earth's regenerative capacity. If \
                      everyone adopted your lifestyle, humanity would need 2.5 planets to \
                      survive. We only have one.",
        }
    } else {
        PlanetDemand {
            earths: "1",
            show_multiplier: false,
            message: "Your lifestyle is relatively sustainable, but there's always room for \
                      improvement. Every small change contributes to a healthier planet.",
        }
    }
}
