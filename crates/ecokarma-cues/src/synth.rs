//! Oscillator-based cue synthesis.
//!
//! The tree-cut cue is a short sawtooth burst with a randomized pitch
//! offset so overlapping cuts don't phase into one drone; the celebration
//! is a rising triad. Both render to plain PCM and go wherever the sink
//! points.

use std::sync::Arc;

use ecokarma_core::traits::AudioCues;

use crate::{Clip, SampleSink, SAMPLE_RATE};

/// Base frequency of the percussive cut cue, before pitch jitter.
const CUT_BASE_HZ: f64 = 80.0;
/// Cut cue length in seconds.
const CUT_SECS: f64 = 0.3;
/// Start and floor of the exponential gain envelope.
const GAIN_START: f64 = 0.3;
const GAIN_FLOOR: f64 = 0.01;
/// C5, E5, G5 — the celebration triad.
const TRIAD_HZ: [f64; 3] = [523.25, 659.25, 784.0];
const TRIAD_NOTE_SECS: f64 = 0.12;

/// Cue implementation that synthesizes clips and hands them to a sink.
pub struct SynthCues {
    sink: Arc<dyn SampleSink>,
}

impl SynthCues {
    pub fn new(sink: Arc<dyn SampleSink>) -> Self {
        Self { sink }
    }

    fn deliver(&self, what: &str, clip: Clip) {
        if let Err(e) = self.sink.play(&clip) {
            tracing::warn!("{what} cue playback failed: {e}");
        }
    }
}

impl AudioCues for SynthCues {
    fn short_cue(&self) {
        self.deliver("cut", render_cut_clip());
    }

    fn celebration(&self) {
        self.deliver("celebration", render_celebration_clip());
    }
}

/// Uniform pitch factor in [0.95, 1.05].
fn pitch_jitter() -> f64 {
    0.95 + fastrand::f64() * 0.1
}

/// Render a sawtooth burst with an exponentially decaying envelope.
fn render_burst(freq_hz: f64, secs: f64) -> Clip {
    let n = (secs * f64::from(SAMPLE_RATE)) as usize;
    let decay = (GAIN_FLOOR / GAIN_START).powf(1.0 / n.max(1) as f64);
    let mut samples = Vec::with_capacity(n);
    let mut gain = GAIN_START;
    for i in 0..n {
        let t = i as f64 / f64::from(SAMPLE_RATE);
        let phase = (t * freq_hz).fract();
        let saw = 2.0 * phase - 1.0;
        samples.push((saw * gain) as f32);
        gain *= decay;
    }
    Clip { samples }
}

/// The percussive tree-cut clip, freshly jittered on every call.
pub fn render_cut_clip() -> Clip {
    render_burst(CUT_BASE_HZ * pitch_jitter(), CUT_SECS)
}

/// The rising-triad celebration clip.
pub fn render_celebration_clip() -> Clip {
    let mut samples = Vec::new();
    for freq in TRIAD_HZ {
        samples.extend(render_burst(freq, TRIAD_NOTE_SECS).samples);
    }
    Clip { samples }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CueError;

    struct FailingSink;

    impl SampleSink for FailingSink {
        fn play(&self, _clip: &Clip) -> Result<(), CueError> {
            Err(CueError::SinkUnavailable("test sink is gone".into()))
        }
    }

    #[test]
    fn cut_clip_is_short_and_bounded() {
        let clip = render_cut_clip();
        assert!((clip.duration_secs() - CUT_SECS).abs() < 0.01);
        assert!(clip.peak() <= 1.0);
        assert!(clip.peak() > 0.0);
    }

    #[test]
    fn envelope_decays() {
        let clip = render_burst(CUT_BASE_HZ, CUT_SECS);
        let window = SAMPLE_RATE as usize / 20;
        let head = Clip {
            samples: clip.samples[..window].to_vec(),
        };
        let tail = Clip {
            samples: clip.samples[clip.samples.len() - window..].to_vec(),
        };
        assert!(head.peak() > tail.peak() * 3.0, "envelope should decay");
    }

    #[test]
    fn pitch_jitter_stays_within_five_percent() {
        for _ in 0..1000 {
            let factor = pitch_jitter();
            assert!((0.95..=1.05).contains(&factor), "factor {factor} out of range");
        }
    }

    #[test]
    fn celebration_has_three_notes() {
        let clip = render_celebration_clip();
        let expected = (TRIAD_NOTE_SECS * 3.0 * f64::from(SAMPLE_RATE)) as usize;
        assert_eq!(clip.samples.len(), expected);
    }

    #[test]
    fn sink_failure_is_swallowed() {
        let cues = SynthCues::new(Arc::new(FailingSink));
        // Neither call may panic or surface the error.
        cues.short_cue();
        cues.celebration();
    }
}
