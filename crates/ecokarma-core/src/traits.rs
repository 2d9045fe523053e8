//! Capability boundaries consumed by the presentation layer.
//!
//! Audio is an external effectful capability: the sequencer only ever
//! asks for "a short cue" or "the celebration", and implementations live
//! in the `ecokarma-cues` crate.

/// Short audio effects tied to discrete presentation events.
///
/// Implementations must never fail loudly. An unavailable audio subsystem
/// is swallowed (and at most logged) so that slide progression and scoring
/// are wholly unaffected.
pub trait AudioCues: Send + Sync {
    /// One short percussive cue — a felled item in the forest animation.
    fn short_cue(&self);

    /// The celebratory cue for a freshly taken pledge.
    fn celebration(&self);
}

/// Cue implementation that produces no sound at all.
pub struct NullCues;

impl AudioCues for NullCues {
    fn short_cue(&self) {}
    fn celebration(&self) {}
}
