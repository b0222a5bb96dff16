// SPDX-License-Identifier: MPL-2.0

//! Sound effects for camera actions
//!
//! A fire-and-forget trigger pool: each camera action maps to one clip in
//! a theme directory, loaded on first use and kept resident for the
//! lifetime of the pool. Playback goes through the [`SoundBackend`] seam;
//! the shipped implementation lives in [`backend`].

pub mod backend;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::constants::sound::DEFAULT_VOLUME;
use crate::errors::SoundError;

/// Camera actions with an associated sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundAction {
    Shutter,
    FocusComplete,
    VideoStart,
    VideoPause,
    VideoStop,
    BurstStart,
    BurstLoop,
    BurstEnd,
    Panorama,
}

impl SoundAction {
    /// All actions, in clip-slot order
    pub const ALL: [SoundAction; 9] = [
        SoundAction::Shutter,
        SoundAction::FocusComplete,
        SoundAction::VideoStart,
        SoundAction::VideoPause,
        SoundAction::VideoStop,
        SoundAction::BurstStart,
        SoundAction::BurstLoop,
        SoundAction::BurstEnd,
        SoundAction::Panorama,
    ];

    /// Clip file name inside the sound theme directory
    pub fn clip_file(&self) -> &'static str {
        match self {
            SoundAction::Shutter => "camera_shutter.ogg",
            SoundAction::FocusComplete => "focus_complete.ogg",
            SoundAction::VideoStart => "video_start.ogg",
            SoundAction::VideoPause => "video_pause.ogg",
            SoundAction::VideoStop => "video_stop.ogg",
            SoundAction::BurstStart => "camera_burst_start.ogg",
            SoundAction::BurstLoop => "camera_burst_loop.ogg",
            SoundAction::BurstEnd => "camera_burst_end.ogg",
            SoundAction::Panorama => "panorama_shutter.ogg",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Handle to a clip registered with a backend.
pub type ClipHandle = usize;

/// Playback seam keeping the pool logic host-independent.
pub trait SoundBackend {
    /// Read and register a clip for later playback.
    fn load(&mut self, path: &Path) -> Result<ClipHandle, SoundError>;

    /// Fire-and-forget playback of a loaded clip.
    fn play(&mut self, clip: ClipHandle, volume: f32);
}

/// Per-action clip slot. A failed load leaves the slot unloaded so the
/// next trigger retries.
#[derive(Debug, Clone, Copy, Default)]
enum ClipSlot {
    #[default]
    NotLoaded,
    Ready(ClipHandle),
}

/// Load-then-play pool of camera sound effects.
pub struct SoundPool<B> {
    backend: B,
    theme_dir: PathBuf,
    volume: f32,
    slots: [ClipSlot; SoundAction::ALL.len()],
}

impl<B: SoundBackend> SoundPool<B> {
    /// Create a pool reading clips from `theme_dir`.
    pub fn new(backend: B, theme_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            theme_dir: theme_dir.into(),
            volume: DEFAULT_VOLUME,
            slots: [ClipSlot::NotLoaded; SoundAction::ALL.len()],
        }
    }

    /// Load every clip up front so the first trigger is not delayed by
    /// disk I/O. Failures are logged; the affected action falls back to
    /// load-then-play on its first trigger.
    pub fn preload(&mut self) {
        for action in SoundAction::ALL {
            self.ensure_loaded(action);
        }
    }

    /// Set playback volume, clamped to [0.0, 1.0].
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Trigger the clip for `action`.
    ///
    /// Loads the clip first when it is not resident yet, then plays it.
    pub fn play(&mut self, action: SoundAction) {
        let Some(clip) = self.ensure_loaded(action) else {
            return;
        };
        debug!(?action, "playing sound clip");
        self.backend.play(clip, self.volume);
    }

    fn ensure_loaded(&mut self, action: SoundAction) -> Option<ClipHandle> {
        match self.slots[action.slot()] {
            ClipSlot::Ready(clip) => Some(clip),
            ClipSlot::NotLoaded => {
                let path = self.theme_dir.join(action.clip_file());
                match self.backend.load(&path) {
                    Ok(clip) => {
                        self.slots[action.slot()] = ClipSlot::Ready(clip);
                        Some(clip)
                    }
                    Err(e) => {
                        warn!(?action, error = %e, "Failed to load sound clip");
                        None
                    }
                }
            }
        }
    }
}
