//! ecokarma-wrapped — The slide sequencer.
//!
//! Owns the presentation state for one viewing session: the forward-only
//! eight-slide walk, its transition timer, the forest-loss sub-animation,
//! and the mute/pledge flags. Audio cues and the rendering surface are
//! injected from the outside, so the state machine itself stays
//! deterministic and testable under a paused clock.

pub mod forest;
pub mod sequencer;
pub mod slide;
pub mod ui;
