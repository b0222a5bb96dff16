// SPDX-License-Identifier: MPL-2.0

//! On-screen controls for camera applications
//!
//! Host-toolkit-independent widgets for a camera's capture UI: an icon
//! that rotates to follow the device orientation with an animated
//! transition, a shutter button with press/click/long-press
//! notifications, and a sound pool for capture feedback effects.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`controls`]: the widgets and the rotation state machine
//! - [`sound`]: fire-and-forget sound effect pool
//! - [`config`]: user configuration handling
//! - [`terminal`]: interactive terminal demo
//!
//! The widgets own no event loop and spawn no threads. The host render
//! loop calls `tick` once per frame with a monotonic timestamp, draws
//! with the returned frame state, and keeps scheduling frames while the
//! widget asks for another tick.

pub mod config;
pub mod constants;
pub mod controls;
pub mod errors;
pub mod sound;
pub mod terminal;

// Re-export commonly used types
pub use config::Config;
pub use controls::{OrientationAnimator, Rotatable, RotateIcon, ShutterControl, ShutterListener};
pub use errors::{ControlsError, ControlsResult};
pub use sound::{SoundAction, SoundPool};
