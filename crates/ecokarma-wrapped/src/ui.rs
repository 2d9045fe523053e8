//! The rendering seam and the presentation driver loop.
//!
//! The sequencer never draws anything itself: a `WrappedUi` renders
//! snapshots and surfaces viewer gestures, and [`present`] wires the two
//! together until the viewer quits or resets from the final slide.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::sequencer::{SessionSnapshot, WrappedSession};

/// A tap/keypress-level gesture from the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Advance,
    ToggleMute,
    Pledge,
    Reset,
    Quit,
}

/// Renders snapshots and surfaces viewer gestures.
///
/// `next_gesture` must be cancellation-safe: the driver races it against
/// animation repaints.
#[async_trait]
pub trait WrappedUi: Send {
    async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<()>;

    async fn next_gesture(&mut self) -> Result<Gesture>;
}

/// Why [`present`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The viewer quit partway (or at the end) without resetting.
    Quit,
    /// The terminal slide's reset fired; collection should restart.
    Reset,
}

/// Repaint at least this often while an animation is live, so a lost
/// wakeup never freezes the view.
const LIVE_REPAINT: Duration = Duration::from_millis(200);

/// Drive a session against a UI until the viewer quits or resets.
///
/// Returns the outcome together with the last snapshot taken before the
/// terminating gesture, which still carries the verdict and pledge flag.
pub async fn present(
    session: &WrappedSession,
    ui: &mut dyn WrappedUi,
) -> Result<(Outcome, SessionSnapshot)> {
    loop {
        let snapshot = session.snapshot();
        ui.render(&snapshot).await?;

        let gesture = if snapshot.is_live() {
            tokio::select! {
                gesture = ui.next_gesture() => gesture?,
                _ = session.changed() => continue,
                _ = tokio::time::sleep(LIVE_REPAINT) => continue,
            }
        } else {
            tokio::select! {
                gesture = ui.next_gesture() => gesture?,
                _ = session.changed() => continue,
            }
        };

        match gesture {
            Gesture::Advance => {
                if session.advance() {
                    session.settled().await;
                }
            }
            Gesture::ToggleMute => {
                session.toggle_mute();
            }
            Gesture::Pledge => {
                let pledged = session.snapshot().pledged;
                session.set_pledged(!pledged);
            }
            Gesture::Reset => {
                let last = session.snapshot();
                if session.reset() {
                    return Ok((Outcome::Reset, last));
                }
            }
            Gesture::Quit => {
                return Ok((Outcome::Quit, session.snapshot()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::SequencerTiming;
    use crate::slide::Slide;
    use ecokarma_core::model::{Diet, UserInput};
    use ecokarma_core::scoring::compute_verdict;
    use ecokarma_core::traits::NullCues;
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Plays back a fixed gesture script and records the slides it saw.
    struct ScriptedUi {
        gestures: VecDeque<Gesture>,
        slides_seen: Vec<Slide>,
    }

    #[async_trait]
    impl WrappedUi for ScriptedUi {
        async fn render(&mut self, snapshot: &SessionSnapshot) -> Result<()> {
            if self.slides_seen.last() != Some(&snapshot.slide) {
                self.slides_seen.push(snapshot.slide);
            }
            Ok(())
        }

        async fn next_gesture(&mut self) -> Result<Gesture> {
            Ok(self.gestures.pop_front().unwrap_or(Gesture::Quit))
        }
    }

    fn make_session() -> WrappedSession {
        let input = UserInput {
            name: "Asha".into(),
            car_owner: false,
            car_km: 0.0,
            bike_owner: false,
            bike_km: 0.0,
            electricity_bill: 0.0,
            diet: Diet::Vegan,
            ac_daily: false,
            plastic_items: 0,
        };
        let verdict = compute_verdict(&input);
        WrappedSession::with_timing(input, verdict, Arc::new(NullCues), SequencerTiming::fast())
    }

    #[tokio::test(start_paused = true)]
    async fn scripted_walk_reaches_every_slide() {
        let session = make_session();
        let mut ui = ScriptedUi {
            gestures: [
                Gesture::Advance,
                Gesture::Advance,
                Gesture::Advance,
                Gesture::Advance,
                Gesture::Advance,
                Gesture::Pledge,
                Gesture::Advance,
                Gesture::Advance,
                Gesture::Quit,
            ]
            .into_iter()
            .collect(),
            slides_seen: Vec::new(),
        };

        let (outcome, last) = present(&session, &mut ui).await.unwrap();
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(last.slide, Slide::ShareRedemption);
        assert!(last.pledged);
        assert!(last.verdict.is_some());
        for slide in Slide::ALL {
            assert!(ui.slides_seen.contains(&slide), "missed {slide:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn reset_outcome_keeps_final_snapshot() {
        let session = make_session();
        let mut ui = ScriptedUi {
            gestures: std::iter::repeat(Gesture::Advance)
                .take(7)
                .chain([Gesture::Reset])
                .collect(),
            slides_seen: Vec::new(),
        };

        let (outcome, last) = present(&session, &mut ui).await.unwrap();
        assert_eq!(outcome, Outcome::Reset);
        assert_eq!(last.slide, Slide::ShareRedemption);
        assert!(last.verdict.is_some());
        // The session itself is back to its pre-slide condition.
        assert!(session.snapshot().verdict.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_before_terminal_is_ignored() {
        let session = make_session();
        let mut ui = ScriptedUi {
            gestures: [Gesture::Advance, Gesture::Reset, Gesture::Quit]
                .into_iter()
                .collect(),
            slides_seen: Vec::new(),
        };

        let (outcome, last) = present(&session, &mut ui).await.unwrap();
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(last.slide, Slide::Culprit);
        assert!(session.snapshot().verdict.is_some());
    }
}
