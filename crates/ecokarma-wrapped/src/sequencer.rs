//! The presentation state machine.
//!
//! One `WrappedSession` drives a single viewing of the eight-slide walk.
//! All suspension goes through tokio timers spawned as tasks, and every
//! externally triggered mutation passes through the session's single
//! mutex, one event at a time. The `transitioning` flag and the
//! once-per-visit forest guard stand in for locks against re-entrant
//! triggers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use ecokarma_core::model::UserInput;
use ecokarma_core::scoring::Verdict;
use ecokarma_core::traits::AudioCues;

use crate::forest::{ForestSnapshot, ForestState};
use crate::slide::Slide;

/// Timer intervals driving the presentation.
#[derive(Debug, Clone, Copy)]
pub struct SequencerTiming {
    /// Settle delay between an advance gesture and the slide switch.
    pub transition: Duration,
    /// Delay before the forest animation begins after slide entry.
    pub forest_start: Duration,
    /// Gap between parking the indicator on an item and firing its cue.
    pub cue_lead: Duration,
    /// Dwell on each felled item before moving to the next.
    pub dwell: Duration,
}

impl Default for SequencerTiming {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(300),
            forest_start: Duration::from_millis(50),
            cue_lead: Duration::from_millis(10),
            dwell: Duration::from_millis(500),
        }
    }
}

impl SequencerTiming {
    /// Near-instant timing for non-interactive runs.
    pub fn fast() -> Self {
        Self {
            transition: Duration::from_millis(1),
            forest_start: Duration::from_millis(1),
            cue_lead: Duration::from_millis(1),
            dwell: Duration::from_millis(1),
        }
    }
}

struct SessionData {
    input: UserInput,
    verdict: Verdict,
}

struct State {
    slide: Slide,
    transitioning: bool,
    muted: bool,
    pledged: bool,
    forest: Option<ForestState>,
    data: Option<SessionData>,
    transition_task: Option<JoinHandle<()>>,
}

struct Shared {
    state: Mutex<State>,
    changed: Notify,
    cues: Arc<dyn AudioCues>,
    timing: SequencerTiming,
}

/// One viewing session over a computed verdict.
///
/// Must live inside a tokio runtime; `advance` spawns timer tasks.
/// Dropping the session aborts every outstanding timer.
pub struct WrappedSession {
    shared: Arc<Shared>,
}

/// Read-only view of the whole presentation for renderers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub slide: Slide,
    pub transitioning: bool,
    pub muted: bool,
    pub pledged: bool,
    /// Whose session this is; `None` after reset.
    pub name: Option<String>,
    /// The verdict being presented; `None` after reset.
    pub verdict: Option<Verdict>,
    /// Forest animation view, present only while on the forest slide.
    pub forest: Option<ForestSnapshot>,
}

impl SessionSnapshot {
    /// Whether a timer is about to repaint this view without user input.
    pub fn is_live(&self) -> bool {
        self.transitioning || self.forest.as_ref().is_some_and(|f| !f.finished)
    }
}

impl WrappedSession {
    pub fn new(input: UserInput, verdict: Verdict, cues: Arc<dyn AudioCues>) -> Self {
        Self::with_timing(input, verdict, cues, SequencerTiming::default())
    }

    pub fn with_timing(
        input: UserInput,
        verdict: Verdict,
        cues: Arc<dyn AudioCues>,
        timing: SequencerTiming,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    slide: Slide::Intro,
                    transitioning: false,
                    muted: false,
                    pledged: false,
                    forest: None,
                    data: Some(SessionData { input, verdict }),
                    transition_task: None,
                }),
                changed: Notify::new(),
                cues,
                timing,
            }),
        }
    }

    /// Begin moving to the next slide.
    ///
    /// Returns `false` without effect while a transition is in flight, on
    /// the terminal slide, or after reset — the debounce policy, not an
    /// error.
    pub fn advance(&self) -> bool {
        {
            let mut st = self.shared.state.lock().unwrap();
            if st.data.is_none() || st.transitioning || st.slide.is_terminal() {
                return false;
            }
            st.transitioning = true;

            let shared = Arc::clone(&self.shared);
            st.transition_task = Some(tokio::spawn(async move {
                tokio::time::sleep(shared.timing.transition).await;
                shared.complete_transition();
            }));
        }
        self.shared.changed.notify_waiters();
        true
    }

    /// Flip the mute flag. Never changes the slide; suppression applies to
    /// every cue fired afterwards.
    pub fn toggle_mute(&self) -> bool {
        let muted = {
            let mut st = self.shared.state.lock().unwrap();
            st.muted = !st.muted;
            st.muted
        };
        self.shared.changed.notify_waiters();
        muted
    }

    /// Set the pledge flag. Honored only on the redemption slide; a
    /// false-to-true flip fires the celebration cue once.
    pub fn set_pledged(&self, pledged: bool) -> bool {
        let fire = {
            let mut st = self.shared.state.lock().unwrap();
            if st.data.is_none() || st.slide != Slide::Redemption {
                return false;
            }
            let fire = pledged && !st.pledged && !st.muted;
            st.pledged = pledged;
            fire
        };
        if fire {
            self.shared.cues.celebration();
        }
        self.shared.changed.notify_waiters();
        true
    }

    /// Tear the session back down to its pre-slide condition.
    ///
    /// Honored only on the terminal slide. Cancels every pending timer,
    /// discards the stored input and verdict, and signals the caller to
    /// restart collection.
    pub fn reset(&self) -> bool {
        {
            let mut st = self.shared.state.lock().unwrap();
            if st.data.is_none() || !st.slide.is_terminal() {
                return false;
            }
            if let Some(task) = st.transition_task.take() {
                task.abort();
            }
            st.forest = None;
            st.data = None;
            st.slide = Slide::Intro;
            st.transitioning = false;
            st.muted = false;
            st.pledged = false;
        }
        self.shared.changed.notify_waiters();
        true
    }

    /// Current view of the presentation.
    pub fn snapshot(&self) -> SessionSnapshot {
        let st = self.shared.state.lock().unwrap();
        SessionSnapshot {
            slide: st.slide,
            transitioning: st.transitioning,
            muted: st.muted,
            pledged: st.pledged,
            name: st.data.as_ref().map(|d| d.input.name.clone()),
            verdict: st.data.as_ref().map(|d| d.verdict.clone()),
            forest: st.forest.as_ref().map(|f| f.snapshot()),
        }
    }

    /// Wait for the next state change notification.
    ///
    /// Wakeups can race with snapshots; callers that must not stall pair
    /// this with a timeout (see [`settled`](Self::settled)).
    pub async fn changed(&self) {
        self.shared.changed.notified().await;
    }

    /// Wait until no transition is in flight.
    pub async fn settled(&self) {
        loop {
            if !self.snapshot().transitioning {
                return;
            }
            let _ = tokio::time::timeout(Duration::from_millis(25), self.changed()).await;
        }
    }
}

impl Drop for WrappedSession {
    fn drop(&mut self) {
        let mut st = self.shared.state.lock().unwrap();
        if let Some(task) = st.transition_task.take() {
            task.abort();
        }
        // ForestState aborts its own task on drop.
        st.forest = None;
    }
}

impl Shared {
    /// Second half of an advance: runs in the transition task after the
    /// settle delay.
    fn complete_transition(self: Arc<Self>) {
        {
            let mut st = self.state.lock().unwrap();
            if !st.transitioning {
                return;
            }
            let Some(next) = st.slide.next() else {
                st.transitioning = false;
                return;
            };

            // Leaving the forest slide tears down its timers and state.
            if st.slide == Slide::ForestLoss {
                st.forest = None;
            }

            st.slide = next;
            st.transitioning = false;
            st.transition_task = None;
            tracing::debug!(slide = ?next, "transition settled");

            // First entry to the forest slide starts the animation, at most
            // once per visit.
            if next == Slide::ForestLoss && st.forest.is_none() {
                let trees_owed = st.data.as_ref().map(|d| d.verdict.trees_owed).unwrap_or(0);
                let mut forest = ForestState::new(trees_owed);
                let display_count = forest.display_count;
                let shared = Arc::clone(&self);
                forest.task = Some(tokio::spawn(async move {
                    shared.run_forest(display_count).await;
                }));
                st.forest = Some(forest);
            }
        }
        self.changed.notify_waiters();
    }

    /// Drive the forest animation: strictly ascending item order, cue
    /// before each completed mark, fixed dwell between items. Bails out as
    /// soon as the visit state is gone.
    async fn run_forest(self: Arc<Self>, display_count: u32) {
        tokio::time::sleep(self.timing.forest_start).await;

        for index in 0..display_count {
            {
                let mut st = self.state.lock().unwrap();
                let Some(forest) = st.forest.as_mut() else {
                    return;
                };
                forest.current = Some(index);
            }
            self.changed.notify_waiters();

            tokio::time::sleep(self.timing.cue_lead).await;

            {
                let mut st = self.state.lock().unwrap();
                let muted = st.muted;
                let Some(forest) = st.forest.as_mut() else {
                    return;
                };
                if !muted {
                    self.cues.short_cue();
                }
                forest.completed.insert(index);
            }
            self.changed.notify_waiters();

            tokio::time::sleep(self.timing.dwell).await;
        }

        {
            let mut st = self.state.lock().unwrap();
            if let Some(forest) = st.forest.as_mut() {
                forest.current = None;
                forest.finished = true;
            }
        }
        self.changed.notify_waiters();
    }
}
