//! ecokarma-cues — Audio-cue implementations.
//!
//! Implements the `AudioCues` capability from `ecokarma-core`: a small
//! in-memory synthesizer over a pluggable sample sink, plus a recording
//! mock for tests. No particular audio backend is assumed; anything that
//! can take a PCM clip can be a sink.

pub mod error;
pub mod mock;
pub mod synth;

use std::sync::Arc;

use anyhow::Result;

use ecokarma_core::traits::{AudioCues, NullCues};

use crate::error::CueError;

/// Sample rate of every rendered clip.
pub const SAMPLE_RATE: u32 = 44_100;

/// A mono f32 PCM clip at [`SAMPLE_RATE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub samples: Vec<f32>,
}

impl Clip {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(SAMPLE_RATE)
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }
}

/// Where rendered clips go. Implementations own the output device, if any.
pub trait SampleSink: Send + Sync {
    fn play(&self, clip: &Clip) -> Result<(), CueError>;
}

/// Discards every clip.
pub struct NullSink;

impl SampleSink for NullSink {
    fn play(&self, _clip: &Clip) -> Result<(), CueError> {
        Ok(())
    }
}

/// Logs clip stats at debug level, then discards the samples.
pub struct TraceSink;

impl SampleSink for TraceSink {
    fn play(&self, clip: &Clip) -> Result<(), CueError> {
        tracing::debug!(
            samples = clip.samples.len(),
            secs = clip.duration_secs(),
            peak = clip.peak(),
            "cue clip"
        );
        Ok(())
    }
}

/// Build a cue implementation by backend name.
///
/// `"synth"` renders clips through a [`TraceSink`]; `"null"` produces no
/// sound at all.
pub fn create_cues(kind: &str) -> Result<Arc<dyn AudioCues>> {
    match kind {
        "synth" => Ok(Arc::new(synth::SynthCues::new(Arc::new(TraceSink)))),
        "null" => Ok(Arc::new(NullCues)),
        other => anyhow::bail!("unknown cue backend: '{other}' (expected synth or null)"),
    }
}
