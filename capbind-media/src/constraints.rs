//! Capture request constraints

use crate::error::{MediaError, MediaResult};
use serde::{Deserialize, Serialize};

/// Which media kinds a capture request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaStreamConstraints {
    /// Request a video track
    pub video: bool,
    /// Request an audio track
    pub audio: bool,
}

impl Default for MediaStreamConstraints {
    fn default() -> Self {
        Self::video_only()
    }
}

impl MediaStreamConstraints {
    /// `{ video: true }`, the request the binder issues by default
    pub const fn video_only() -> Self {
        Self {
            video: true,
            audio: false,
        }
    }

    /// Validate constraints
    pub fn validate(&self) -> MediaResult<()> {
        if !self.video && !self.audio {
            return Err(MediaError::InvalidConstraints {
                message: "At least one of video or audio must be requested".to_string(),
            });
        }
        Ok(())
    }

    /// Track kinds a granted stream is expected to carry
    pub fn requested_kinds(&self) -> Vec<TrackKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.video {
            kinds.push(TrackKind::Video);
        }
        if self.audio {
            kinds.push(TrackKind::Audio);
        }
        kinds
    }
}

/// Kind of a track inside a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// Video track
    Video,
    /// Audio track
    Audio,
}
