//! Plain-text share card for terminals.

use ecokarma_core::report::KarmaReport;

const WIDTH: usize = 44;

fn line(out: &mut String, content: &str) {
    out.push_str(&format!("| {content:^width$} |\n", width = WIDTH - 4));
}

fn rule(out: &mut String) {
    out.push('+');
    out.push_str(&"-".repeat(WIDTH - 2));
    out.push_str("+\n");
}

/// Render the report as a fixed-width text card.
pub fn render_text_card(report: &KarmaReport) -> String {
    let verdict = &report.verdict;
    let mut out = String::new();

    rule(&mut out);
    line(&mut out, "ECO KARMA REPORT");
    line(&mut out, &report.name);
    line(
        &mut out,
        &report.created_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    rule(&mut out);
    line(&mut out, &format!("Score   {} / 850", verdict.score));
    line(&mut out, &format!("Status  {}", verdict.status));
    line(&mut out, &format!("Trees owed  {}", verdict.trees_owed));
    if report.pledged {
        line(&mut out, "[x] Pledge Committed");
    }
    rule(&mut out);
    line(&mut out, "Carbon Heavyweight");
    line(&mut out, &verdict.heavyweight.category.to_string());
    for chunk in wrap(&verdict.heavyweight.description, WIDTH - 4) {
        line(&mut out, &chunk);
    }
    rule(&mut out);
    line(&mut out, "SANKHYA: Eco Karma Wrapped");
    rule(&mut out);

    out
}

/// Greedy word wrap to a column budget.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecokarma_core::model::{Diet, UserInput};
    use ecokarma_core::scoring::compute_verdict;

    fn make_report(pledged: bool) -> KarmaReport {
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
        KarmaReport::new(input.name.clone(), compute_verdict(&input), pledged)
    }

    #[test]
    fn text_card_contains_verdict() {
        let card = render_text_card(&make_report(true));
        assert!(card.contains("ECO KARMA REPORT"));
        assert!(card.contains("Asha"));
        assert!(card.contains("300 / 850"));
        assert!(card.contains("DEFAULTER"));
        assert!(card.contains("Trees owed  206"));
        assert!(card.contains("Pledge Committed"));
        assert!(card.contains("Energy"));
    }

    #[test]
    fn unpledged_card_omits_badge() {
        let card = render_text_card(&make_report(false));
        assert!(!card.contains("Pledge Committed"));
    }

    #[test]
    fn wrap_respects_width() {
        let wrapped = wrap("one two three four five six seven eight nine ten", 12);
        assert!(wrapped.iter().all(|l| l.len() <= 12));
        assert_eq!(wrapped.join(" "), "one two three four five six seven eight nine ten");
    }
}
