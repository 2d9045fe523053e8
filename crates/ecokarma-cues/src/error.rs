//! Cue sink error types.
//!
//! Sinks can fail; cue implementations swallow these so the presentation
//! is never affected. The classifier exists so a caller that owns a sink
//! can stop handing clips to one that is gone for good.

use thiserror::Error;

/// Errors a sample sink can raise.
#[derive(Debug, Error)]
pub enum CueError {
    /// The backing output is gone and will not come back.
    #[error("audio sink unavailable: {0}")]
    SinkUnavailable(String),

    /// This clip was rejected but the next one may play.
    #[error("playback failed: {0}")]
    PlaybackFailed(String),
}

impl CueError {
    /// Returns `true` if this error is permanent.
    pub fn is_permanent(&self) -> bool {
        matches!(self, CueError::SinkUnavailable(_))
    }
}
