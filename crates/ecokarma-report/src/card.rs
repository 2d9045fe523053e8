//! HTML share-card generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use ecokarma_core::report::KarmaReport;
use ecokarma_core::scoring::KarmaStatus;

/// Top of the score gauge.
const SCORE_CEILING: f64 = 850.0;
/// Arc length of the semicircular gauge path.
const GAUGE_DASH: f64 = 283.0;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the HTML share card for a report.
pub fn generate_card(report: &KarmaReport) -> String {
    let verdict = &report.verdict;
    let is_defaulter = verdict.status == KarmaStatus::Defaulter;
    let accent = if is_defaulter { "#ff4d4d" } else { "#00ff9d" };
    let percentage = (f64::from(verdict.score) / SCORE_CEILING) * 100.0;
    let dash_offset = GAUGE_DASH - (GAUGE_DASH * percentage) / 100.0;

    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Eco Karma Report — {}</title>\n",
        html_escape(&report.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<main class=\"card\">\n");
    html.push_str("<h1>ECO KARMA REPORT</h1>\n");
    html.push_str(&format!("<p class=\"name\">{}</p>\n", html_escape(&report.name)));
    html.push_str(&format!(
        "<p class=\"meta\">{}</p>\n",
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    // Semicircular score gauge.
    html.push_str("<div class=\"gauge\">\n");
    html.push_str("<svg viewBox=\"0 0 200 100\">\n");
    html.push_str(
        "  <path d=\"M 10 90 A 90 90 0 0 1 190 90\" fill=\"none\" \
         stroke=\"rgba(255,255,255,0.1)\" stroke-width=\"20\" stroke-linecap=\"round\"/>\n",
    );
    html.push_str(&format!(
        "  <path d=\"M 10 90 A 90 90 0 0 1 190 90\" fill=\"none\" stroke=\"{accent}\" \
         stroke-width=\"20\" stroke-linecap=\"round\" stroke-dasharray=\"{GAUGE_DASH}\" \
         stroke-dashoffset=\"{dash_offset:.1}\"/>\n",
    ));
    html.push_str("</svg>\n");
    html.push_str(&format!(
        "<div class=\"score\" style=\"color:{accent}\">{}</div>\n<div class=\"ceiling\">/ 850</div>\n",
        verdict.score
    ));
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<p class=\"status\" style=\"color:{accent};border-color:{accent}\">{}</p>\n",
        verdict.status
    ));

    html.push_str("<section>\n");
    html.push_str("<p class=\"label\">Trees Owed</p>\n");
    html.push_str(&format!("<p class=\"trees\">{}</p>\n", verdict.trees_owed));
    html.push_str("</section>\n");

    if report.pledged {
        html.push_str("<p class=\"pledge\">&#10003; Pledge Committed</p>\n");
    }

    html.push_str("<section>\n");
    html.push_str("<p class=\"label\">Carbon Heavyweight</p>\n");
    html.push_str(&format!(
        "<p class=\"heavyweight\">{}</p>\n",
        verdict.heavyweight.category
    ));
    html.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        html_escape(&verdict.heavyweight.description)
    ));
    html.push_str("</section>\n");

    html.push_str("<footer>\n");
    html.push_str("<p>SANKHYA: Eco Karma Wrapped</p>\n");
    html.push_str("<p>Department of Statistics, NLU</p>\n");
    html.push_str("</footer>\n");
    html.push_str("</main>\n");

    // Raw JSON for machine consumers.
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n</details>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write the HTML card to a file.
pub fn write_card(report: &KarmaReport, path: &Path) -> Result<()> {
    let html = generate_card(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: #0a0a0a; color: #fff; display: flex; flex-direction: column; align-items: center; }
.card { max-width: 420px; width: 100%; border: 2px solid #00ff9d; border-radius: 16px; padding: 2rem; text-align: center; }
h1 { color: #d4af37; font-size: 1.5rem; letter-spacing: 0.1em; }
.name { font-size: 1.2rem; }
.meta { color: #6b7280; font-size: 0.8rem; }
.gauge { position: relative; margin: 1rem auto; max-width: 260px; }
.score { font-size: 3rem; font-weight: bold; margin-top: -3.5rem; }
.ceiling { color: #999; font-size: 0.9rem; }
.status { display: inline-block; border: 2px solid; border-radius: 12px; padding: 0.5rem 1.5rem; font-size: 1.4rem; font-weight: bold; letter-spacing: 0.1em; }
.label { color: #9ca3af; font-size: 0.85rem; margin-bottom: 0.2rem; }
.trees { color: #ff4d4d; font-size: 2.5rem; font-weight: bold; margin: 0; }
.pledge { color: #00ff9d; font-weight: 600; }
.heavyweight { color: #d4af37; font-weight: 600; margin: 0; }
.description { color: #d1d5db; font-size: 0.9rem; }
footer { margin-top: 1.5rem; color: #666; font-size: 0.75rem; }
footer p:first-child { color: #d4af37; }
details { margin: 1rem 0; max-width: 420px; width: 100%; }
summary { cursor: pointer; color: #6b7280; }
pre { overflow-x: auto; padding: 1rem; background: #111827; border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.8rem; }
"#;
