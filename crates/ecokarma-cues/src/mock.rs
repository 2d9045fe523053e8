//! Recording cue mock for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use ecokarma_core::traits::AudioCues;

/// Counts cue invocations without producing any sound.
#[derive(Debug, Default)]
pub struct RecordingCues {
    short: AtomicU32,
    celebration: AtomicU32,
}

impl RecordingCues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of short percussive cues fired so far.
    pub fn short_count(&self) -> u32 {
        self.short.load(Ordering::Relaxed)
    }

    /// Number of celebration cues fired so far.
    pub fn celebration_count(&self) -> u32 {
        self.celebration.load(Ordering::Relaxed)
    }
}

impl AudioCues for RecordingCues {
    fn short_cue(&self) {
        self.short.fetch_add(1, Ordering::Relaxed);
    }

    fn celebration(&self) {
        self.celebration.fetch_add(1, Ordering::Relaxed);
    }
}
