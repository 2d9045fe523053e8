//! The `ecokarma render` command.

use std::path::PathBuf;

use anyhow::Result;

use ecokarma_core::report::KarmaReport;

pub fn execute(report_path: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    let report = KarmaReport::load_json(&report_path)?;

    match format.as_str() {
        "html" => {
            let path = output.unwrap_or_else(|| PathBuf::from("karma-card.html"));
            ecokarma_report::card::write_card(&report, &path)?;
            println!("Wrote {}", path.display());
        }
        "text" => {
            let card = ecokarma_report::text::render_text_card(&report);
            match output {
                Some(path) => {
                    std::fs::write(&path, card)?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{card}"),
            }
        }
        other => anyhow::bail!("unknown format: '{other}' (expected text or html)"),
    }

    Ok(())
}
