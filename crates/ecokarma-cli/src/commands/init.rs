//! The `ecokarma init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("profile.toml").exists() {
        println!("profile.toml already exists, skipping.");
    } else {
        std::fs::write("profile.toml", STARTER_PROFILE)?;
        println!("Created profile.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit profile.toml with your year's honest answers");
    println!("  2. Run: ecokarma validate --profile profile.toml");
    println!("  3. Run: ecokarma run --profile profile.toml");

    Ok(())
}

const STARTER_PROFILE: &str = r#"# ecokarma lifestyle profile
#
# Answer honestly. The Earth is watching.

[profile]
name = "Your Name"

# Transport: daily distances in km. Distances on vehicles you don't own
# are ignored.
car_owner = false
car_km = 20.0
bike_owner = false
bike_km = 10.0

# Home: monthly electricity bill (currency units) and daily AC use.
electricity_bill = 2000.0
ac_daily = false

# Consumption: diet is one of "vegan", "vegetarian", "non-veg";
# plastic_items counts single-use items per day.
diet = "vegetarian"
plastic_items = 3
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_profile_parses_cleanly() {
        let input = ecokarma_core::profile::parse_profile_str(
            STARTER_PROFILE,
            "profile.toml".as_ref(),
        )
        .unwrap();
        assert_eq!(input.name, "Your Name");
        assert!(!input.car_owner);
    }
}
