//! The `ecokarma score` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use ecokarma_core::profile;
use ecokarma_core::scoring::{compute_verdict, planet_demand};

pub fn execute(profile_path: PathBuf, json: bool) -> Result<()> {
    let input = profile::parse_profile(&profile_path)?;
    for warning in profile::validate_profile(&input) {
        eprintln!("  WARNING: {}", warning.message);
    }

    let verdict = compute_verdict(&input);

    if json {
        let out = serde_json::json!({
            "name": input.name,
            "verdict": verdict,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let demand = planet_demand(verdict.trees_owed);

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Name".to_string(), input.name]);
    table.add_row(vec![
        "Annual CO2 (kg)".to_string(),
        format!("{:.1}", verdict.annual_co2),
    ]);
    table.add_row(vec!["Trees owed".to_string(), verdict.trees_owed.to_string()]);
    table.add_row(vec![
        "Score".to_string(),
        format!("{} / 850", verdict.score),
    ]);
    table.add_row(vec!["Status".to_string(), verdict.status.to_string()]);
    table.add_row(vec![
        "Heavyweight".to_string(),
        format!(
            "{} ({:.1} kg)",
            verdict.heavyweight.category, verdict.heavyweight.impact
        ),
    ]);
    table.add_row(vec![
        "".to_string(),
        verdict.heavyweight.description.clone(),
    ]);
    table.add_row(vec!["Earths needed".to_string(), demand.earths.to_string()]);

    println!("{table}");
    Ok(())
}
