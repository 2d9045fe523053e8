//! The `ecokarma validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(profile_path: PathBuf) -> Result<()> {
    let profiles = if profile_path.is_dir() {
        ecokarma_core::profile::load_profile_directory(&profile_path)?
    } else {
        vec![ecokarma_core::profile::parse_profile(&profile_path)?]
    };

    let mut total_warnings = 0;

    for profile in &profiles {
        println!("Profile: {}", profile.name);

        let warnings = ecokarma_core::profile::validate_profile(profile);
        for w in &warnings {
            let prefix = w
                .field
                .map(|f| format!("  [{f}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All profiles valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
