//! The `ecokarma run` command: the terminal rendition of the wrapped
//! presentation.
//!
//! One handler per slide variant; gestures come in as stdin lines (empty
//! line advances, `m` mutes, `p` pledges, `r` resets on the final slide,
//! `q` quits).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use ecokarma_core::profile;
use ecokarma_core::report::KarmaReport;
use ecokarma_core::scoring;
use ecokarma_wrapped::forest::{grid_columns, GridLayout};
use ecokarma_wrapped::sequencer::{SequencerTiming, SessionSnapshot, WrappedSession};
use ecokarma_wrapped::slide::Slide;
use ecokarma_wrapped::ui::{present, Gesture, Outcome, WrappedUi};

/// The loading-transition pause before the verdict appears.
const LOADING_DELAY: Duration = Duration::from_millis(1500);

pub async fn execute(
    profile_path: PathBuf,
    cues_kind: String,
    muted: bool,
    report_out: Option<PathBuf>,
    fast: bool,
) -> Result<()> {
    let input = profile::parse_profile(&profile_path)?;
    for warning in profile::validate_profile(&input) {
        tracing::warn!("{}", warning.message);
    }

    println!("Calculating your karma...");
    if !fast {
        tokio::time::sleep(LOADING_DELAY).await;
    }
    let verdict = scoring::compute_verdict(&input);

    let cues = ecokarma_cues::create_cues(&cues_kind)?;
    let timing = if fast {
        SequencerTiming::fast()
    } else {
        SequencerTiming::default()
    };
    let name = input.name.clone();
    let session = WrappedSession::with_timing(input, verdict, cues, timing);
    if muted {
        session.toggle_mute();
    }

    let mut ui = TerminalUi::new();
    let (outcome, last) = present(&session, &mut ui).await?;

    if let Some(dir) = report_out {
        if last.slide.is_terminal() {
            if let Some(verdict) = last.verdict {
                let report = KarmaReport::new(name, verdict, last.pledged);
                let json_path = dir.join("karma-report.json");
                let card_path = dir.join("karma-card.html");
                report.save_json(&json_path)?;
                ecokarma_report::card::write_card(&report, &card_path)?;
                println!("Wrote {}", json_path.display());
                println!("Wrote {}", card_path.display());
            }
        } else {
            tracing::warn!("presentation ended before the share slide; no report written");
        }
    }

    match outcome {
        Outcome::Reset => println!("Session reset. Run again to audit another person."),
        Outcome::Quit => {}
    }

    Ok(())
}

/// Terminal renderer over buffered stdin lines.
struct TerminalUi {
    lines: Lines<BufReader<Stdin>>,
    viewport_width: u32,
}

impl TerminalUi {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            viewport_width: terminal_viewport_width(),
        }
    }
}

/// Map terminal character columns onto the layout breakpoints.
fn terminal_viewport_width() -> u32 {
    let cols: u32 = std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(80);
    if cols >= 100 {
        768
    } else if cols >= 72 {
        640
    } else {
        480
    }
}

/// Map one input line to a gesture. Unknown input is ignored.
fn parse_gesture(line: &str) -> Option<Gesture> {
    match line.trim() {
        "" => Some(Gesture::Advance),
        "m" => Some(Gesture::ToggleMute),
        "p" => Some(Gesture::Pledge),
        "r" => Some(Gesture::Reset),
        "q" => Some(Gesture::Quit),
        _ => None,
    }
}

#[async_trait]
impl WrappedUi for TerminalUi {
    async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
        print!("{}", render_slide(snapshot, self.viewport_width));
        Ok(())
    }

    async fn next_gesture(&mut self) -> Result<Gesture> {
        loop {
            match self.lines.next_line().await? {
                Some(line) => {
                    if let Some(gesture) = parse_gesture(&line) {
                        return Ok(gesture);
                    }
                }
                // Stdin closed: treat as walking away.
                None => return Ok(Gesture::Quit),
            }
        }
    }
}

/// Progress strip across the top, one cell per slide.
fn progress_strip(slide: Slide) -> String {
    let done = slide.index() + 1;
    format!(
        "[{}{}]",
        "#".repeat(done),
        ".".repeat(Slide::COUNT - done)
    )
}

/// Render one snapshot to a text block. Dispatches over the closed slide
/// set, one arm per stage.
fn render_slide(snapshot: &SessionSnapshot, viewport_width: u32) -> String {
    let mut out = String::new();
    out.push_str("\n----------------------------------------\n");
    out.push_str(&format!(
        "{} {}{}\n",
        progress_strip(snapshot.slide),
        if snapshot.muted { "[muted] " } else { "" },
        if snapshot.transitioning { "..." } else { "" },
    ));

    let Some(verdict) = &snapshot.verdict else {
        out.push_str("(session over)\n");
        return out;
    };
    let name = snapshot.name.as_deref().unwrap_or("");

    match snapshot.slide {
        Slide::Intro => {
            out.push_str(&format!("Hi {name}...\n\n"));
            out.push_str(&format!(
                "{}\n{}\n",
                snapshot.slide.headline(),
                snapshot.slide.tagline()
            ));
        }
        Slide::Culprit => {
            out.push_str(&format!("{}\n\n", snapshot.slide.headline()));
            out.push_str(&format!(
                "  {}\n\n",
                verdict.heavyweight.category.to_string().to_uppercase()
            ));
            out.push_str(&format!("{}\n", verdict.heavyweight.description));
        }
        Slide::ForestLoss => {
            out.push_str(&format!("{}\n\n", snapshot.slide.headline()));
            if let Some(forest) = &snapshot.forest {
                let cols = grid_columns(viewport_width);
                let grid = GridLayout::new(forest.display_count as usize, cols);
                for row in 0..grid.rows {
                    out.push_str("  ");
                    for col in 0..grid.cols {
                        let index = (row * grid.cols + col) as u32;
                        if index >= forest.display_count {
                            break;
                        }
                        let glyph = if forest.current == Some(index) {
                            '*'
                        } else if forest.completed.contains(&index) {
                            'x'
                        } else {
                            'T'
                        };
                        out.push(glyph);
                        out.push(' ');
                    }
                    out.push('\n');
                }
                if let Some((left, top)) = forest
                    .current
                    .and_then(|i| grid.cell_center(i as usize))
                {
                    out.push_str(&format!("  axe at {left:.0}%, {top:.0}%\n"));
                }
                if let Some(total) = forest.overflow {
                    out.push_str(&format!("\n  {total}\n"));
                }
            }
            out.push_str(&format!(
                "\nYour lifestyle indirectly chopped down {} trees this year.\n",
                verdict.trees_owed
            ));
        }
        Slide::RealityCheck => {
            out.push_str(&format!("{}\n\n", snapshot.slide.headline()));
            let demand = scoring::planet_demand(verdict.trees_owed);
            if demand.show_multiplier {
                out.push_str(&format!("  Earth x {}\n\n", demand.earths));
            } else {
                out.push_str("  Earth\n\n");
            }
            out.push_str(&format!("{}\n", demand.message));
        }
        Slide::Verdict => {
            out.push_str(&format!("{}\n\n", snapshot.slide.headline()));
            out.push_str(&format!("{}\n\n", snapshot.slide.tagline()));
            out.push_str("  ECOLOGICAL DEBT\n");
        }
        Slide::Redemption => {
            out.push_str(&format!(
                "  Score {} / 850  [{}]\n\n",
                verdict.score, verdict.status
            ));
            out.push_str(&format!("  Plant {} Trees\n\n", verdict.trees_owed));
            out.push_str(&format!("{}\n\n", snapshot.slide.tagline()));
            let mark = if snapshot.pledged { "x" } else { " " };
            out.push_str(&format!(
                "  [{mark}] I pledge to plant these trees within 30 days  (press p)\n"
            ));
        }
        Slide::ActionAwakening => {
            out.push_str(&format!("{}\n\n", snapshot.slide.headline()));
            out.push_str(&format!("{}\n", snapshot.slide.tagline()));
        }
        Slide::ShareRedemption => {
            out.push_str(&format!("{}\n\n", snapshot.slide.headline()));
            out.push_str(&format!("  Score       {} / 850\n", verdict.score));
            out.push_str(&format!("  Status      {}\n", verdict.status));
            out.push_str(&format!("  Trees owed  {}\n", verdict.trees_owed));
            out.push_str(&format!(
                "  Heavyweight {}\n",
                verdict.heavyweight.category
            ));
            if snapshot.pledged {
                out.push_str("  [x] Pledge Committed\n");
            }
            out.push_str(&format!("\n{}\n", snapshot.slide.tagline()));
            out.push_str("\n(r = audit another person, q = quit)\n");
        }
    }

    if !snapshot.slide.is_terminal() {
        out.push_str("\n(Enter to continue)\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecokarma_core::model::{Diet, UserInput};
    use ecokarma_core::scoring::compute_verdict;
    use std::collections::BTreeSet;

    fn make_snapshot(slide: Slide) -> SessionSnapshot {
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
        SessionSnapshot {
            slide,
            transitioning: false,
            muted: false,
            pledged: false,
            name: Some(input.name.clone()),
            verdict: Some(compute_verdict(&input)),
            forest: None,
        }
    }

    #[test]
    fn gesture_parsing() {
        assert_eq!(parse_gesture(""), Some(Gesture::Advance));
        assert_eq!(parse_gesture("  "), Some(Gesture::Advance));
        assert_eq!(parse_gesture("m"), Some(Gesture::ToggleMute));
        assert_eq!(parse_gesture("p"), Some(Gesture::Pledge));
        assert_eq!(parse_gesture("r"), Some(Gesture::Reset));
        assert_eq!(parse_gesture("q"), Some(Gesture::Quit));
        assert_eq!(parse_gesture("zzz"), None);
    }

    #[test]
    fn intro_greets_by_name() {
        let text = render_slide(&make_snapshot(Slide::Intro), 768);
        assert!(text.contains("Hi Asha..."));
        assert!(text.contains("We analyzed your year."));
    }

    #[test]
    fn culprit_names_the_category() {
        let text = render_slide(&make_snapshot(Slide::Culprit), 768);
        assert!(text.contains("ENERGY"));
        assert!(text.contains("electricity usage alone destroyed"));
    }

    #[test]
    fn forest_grid_marks_progress() {
        let mut snapshot = make_snapshot(Slide::ForestLoss);
        snapshot.forest = Some(ecokarma_wrapped::forest::ForestSnapshot {
            display_count: 12,
            overflow: None,
            current: Some(2),
            completed: BTreeSet::from([0, 1, 2]),
            finished: false,
        });
        let text = render_slide(&snapshot, 768);
        assert!(text.contains("x x *"));
        assert!(text.contains("axe at"));
        assert!(text.contains("chopped down 206 trees"));
    }

    #[test]
    fn forest_overflow_is_displayed() {
        let mut snapshot = make_snapshot(Slide::ForestLoss);
        snapshot.forest = Some(ecokarma_wrapped::forest::ForestSnapshot {
            display_count: 100,
            overflow: Some(206),
            current: None,
            completed: BTreeSet::new(),
            finished: false,
        });
        let text = render_slide(&snapshot, 768);
        assert!(text.contains("  206\n"));
    }

    #[test]
    fn reality_check_shows_multiplier() {
        let text = render_slide(&make_snapshot(Slide::RealityCheck), 768);
        assert!(text.contains("Earth x 4"));
    }

    #[test]
    fn redemption_shows_pledge_checkbox() {
        let mut snapshot = make_snapshot(Slide::Redemption);
        let text = render_slide(&snapshot, 768);
        assert!(text.contains("[ ] I pledge"));
        snapshot.pledged = true;
        let text = render_slide(&snapshot, 768);
        assert!(text.contains("[x] I pledge"));
    }

    #[test]
    fn terminal_slide_offers_reset() {
        let text = render_slide(&make_snapshot(Slide::ShareRedemption), 768);
        assert!(text.contains("r = audit another person"));
        assert!(!text.contains("(Enter to continue)"));
    }

    #[test]
    fn reset_session_renders_placeholder() {
        let mut snapshot = make_snapshot(Slide::Intro);
        snapshot.verdict = None;
        snapshot.name = None;
        let text = render_slide(&snapshot, 768);
        assert!(text.contains("(session over)"));
    }
}
