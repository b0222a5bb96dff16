// SPDX-License-Identifier: MPL-2.0

//! Audio playback backend built on rodio

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::source::Source;
use rodio::{Decoder, OutputStream, OutputStreamHandle};
use tracing::warn;

use super::{ClipHandle, SoundBackend};
use crate::errors::SoundError;

/// Plays clips through the default audio output device.
///
/// Encoded clip bytes stay resident; each trigger decodes a fresh source
/// and hands it to the mixer, so overlapping triggers are fine.
pub struct RodioBackend {
    /// Keeps the output device open for the lifetime of the backend
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: Vec<Arc<[u8]>>,
}

impl RodioBackend {
    /// Open the default audio output device.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| SoundError::OutputUnavailable(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            clips: Vec::new(),
        })
    }
}

impl SoundBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<ClipHandle, SoundError> {
        let bytes: Arc<[u8]> = std::fs::read(path)
            .map_err(|e| SoundError::LoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .into();

        // A corrupt clip should fail at load time, not at first trigger
        Decoder::new(Cursor::new(bytes.clone())).map_err(|e| SoundError::DecodeFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        self.clips.push(bytes);
        Ok(self.clips.len() - 1)
    }

    fn play(&mut self, clip: ClipHandle, volume: f32) {
        let Some(bytes) = self.clips.get(clip) else {
            warn!(clip, "Unknown clip handle");
            return;
        };

        let source = match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => source,
            Err(e) => {
                warn!(clip, error = %e, "Failed to decode sound clip");
                return;
            }
        };

        if let Err(e) = self.handle.play_raw(source.amplify(volume).convert_samples()) {
            warn!(clip, error = %e, "Failed to play sound clip");
        }
    }
}
