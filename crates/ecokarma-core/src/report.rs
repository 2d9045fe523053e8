//! The shareable karma report record, with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::Verdict;

/// Everything the share card needs from one finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KarmaReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Whose year this was.
    pub name: String,
    /// The full verdict.
    pub verdict: Verdict,
    /// Whether the tree-planting pledge was taken.
    pub pledged: bool,
}

impl KarmaReport {
    pub fn new(name: impl Into<String>, verdict: Verdict, pledged: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: name.into(),
            verdict,
            pledged,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: KarmaReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Diet, UserInput};
    use crate::scoring::compute_verdict;

    fn make_report() -> KarmaReport {
        let input = UserInput {
            name: "Asha".into(),
            car_owner: true,
            car_km: 20.0,
            bike_owner: false,
            bike_km: 0.0,
            electricity_bill: 2000.0,
            diet: Diet::Vegetarian,
            ac_daily: false,
            plastic_items: 3,
        };
        KarmaReport::new(input.name.clone(), compute_verdict(&input), true)
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = KarmaReport::load_json(&path).unwrap();

        assert_eq!(loaded, report);
        assert_eq!(loaded.verdict.trees_owed, 206);
        assert!(loaded.pledged);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/report.json");

        report.save_json(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_missing_file_fails() {
        let err = KarmaReport::load_json(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }
}
