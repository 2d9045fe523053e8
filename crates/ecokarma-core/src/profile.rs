//! TOML lifestyle-profile parser.
//!
//! Loads profiles from TOML files and directories, and validates them
//! before the scoring engine ever sees the values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ProfileError;
use crate::model::{Diet, UserInput};

/// The form sliders cap daily distances here; larger values are suspect.
const KM_FORM_MAX: f64 = 100.0;

/// Intermediate TOML structure for parsing profile files.
#[derive(Debug, Deserialize)]
struct TomlProfileFile {
    profile: TomlProfile,
}

#[derive(Debug, Deserialize)]
struct TomlProfile {
    name: String,
    #[serde(default)]
    car_owner: bool,
    #[serde(default)]
    car_km: f64,
    #[serde(default)]
    bike_owner: bool,
    #[serde(default)]
    bike_km: f64,
    #[serde(default)]
    electricity_bill: f64,
    #[serde(default = "default_diet")]
    diet: String,
    #[serde(default)]
    ac_daily: bool,
    #[serde(default)]
    plastic_items: i64,
}

fn default_diet() -> String {
    "vegetarian".to_string()
}

/// Parse a single TOML file into a `UserInput`.
pub fn parse_profile(path: &Path) -> Result<UserInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile file: {}", path.display()))?;

    parse_profile_str(&content, path)
}

/// Parse a TOML string into a `UserInput` (useful for testing).
pub fn parse_profile_str(content: &str, source_path: &Path) -> Result<UserInput> {
    let parsed: TomlProfileFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    convert(parsed.profile)
        .with_context(|| format!("invalid profile: {}", source_path.display()))
}

fn convert(raw: TomlProfile) -> Result<UserInput, ProfileError> {
    if raw.name.trim().is_empty() {
        return Err(ProfileError::EmptyName);
    }

    let check = |field: &'static str, value: f64| -> Result<f64, ProfileError> {
        if value < 0.0 {
            Err(ProfileError::NegativeValue { field, value })
        } else {
            Ok(value)
        }
    };

    let car_km = check("car_km", raw.car_km)?;
    let bike_km = check("bike_km", raw.bike_km)?;
    let electricity_bill = check("electricity_bill", raw.electricity_bill)?;

    if raw.plastic_items < 0 {
        return Err(ProfileError::NegativeValue {
            field: "plastic_items",
            value: raw.plastic_items as f64,
        });
    }

    let diet: Diet = raw.diet.parse().map_err(ProfileError::UnknownDiet)?;

    Ok(UserInput {
        name: raw.name.trim().to_string(),
        car_owner: raw.car_owner,
        car_km,
        bike_owner: raw.bike_owner,
        bike_km,
        electricity_bill,
        diet,
        ac_daily: raw.ac_daily,
        plastic_items: raw.plastic_items as u32,
    })
}

/// Recursively load all `.toml` profile files from a directory.
///
/// Unparseable files are skipped with a warning rather than failing the
/// whole batch.
pub fn load_profile_directory(dir: &Path) -> Result<Vec<UserInput>> {
    let mut profiles = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            profiles.extend(load_profile_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_profile(&path) {
                Ok(profile) => profiles.push(profile),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(profiles)
}

/// A warning from profile validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The field the warning refers to (if applicable).
    pub field: Option<&'static str>,
    /// Warning message.
    pub message: String,
}

/// Validate a profile for common issues that parse fine but look wrong.
pub fn validate_profile(input: &UserInput) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Distances set on vehicles that aren't owned are silently ignored by
    // the scoring engine.
    if !input.car_owner && input.car_km > 0.0 {
        warnings.push(ValidationWarning {
            field: Some("car_km"),
            message: "car_km is set but car_owner is false; the value is ignored".into(),
        });
    }
    if !input.bike_owner && input.bike_km > 0.0 {
        warnings.push(ValidationWarning {
            field: Some("bike_km"),
            message: "bike_km is set but bike_owner is false; the value is ignored".into(),
        });
    }

    if input.car_km > KM_FORM_MAX {
        warnings.push(ValidationWarning {
            field: Some("car_km"),
            message: format!("car_km {} exceeds the form range (0-{KM_FORM_MAX})", input.car_km),
        });
    }
    if input.bike_km > KM_FORM_MAX {
        warnings.push(ValidationWarning {
            field: Some("bike_km"),
            message: format!(
                "bike_km {} exceeds the form range (0-{KM_FORM_MAX})",
                input.bike_km
            ),
        });
    }

    let zero_profile = !input.car_owner
        && !input.bike_owner
        && !input.ac_daily
        && input.electricity_bill == 0.0
        && input.plastic_items == 0;
    if zero_profile {
        warnings.push(ValidationWarning {
            field: None,
            message: "every emission source except diet is zero; is this profile filled in?"
                .into(),
        });
    }

    warnings
}
