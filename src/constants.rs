// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Angular speed of orientation transitions, in degrees per second.
///
/// A quarter turn takes 333 ms; the longest possible transition (half a
/// turn, since rotation always takes the shortest path) about 667 ms.
pub const ANIMATION_SPEED: i64 = 270;

/// Widget metrics and timing
pub mod ui {
    use std::time::Duration;

    /// Icon opacity while the owning control is disabled
    pub const DISABLED_ALPHA: f32 = 0.2;

    /// Icon opacity while the control is pressed (when pressed dimming is
    /// enabled on the icon)
    pub const PRESSED_ALPHA: f32 = 0.5;

    /// Icon opacity when enabled and not pressed
    pub const FULL_ALPHA: f32 = 1.0;

    /// Default hold duration before a shutter press counts as a long press
    pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

    /// Tick interval of the terminal demo's render loop (~60 fps)
    pub const DEMO_TICK_INTERVAL: Duration = Duration::from_millis(16);
}

/// Sound playback defaults
pub mod sound {
    /// Default playback volume (0.0 = silent, 1.0 = full)
    pub const DEFAULT_VOLUME: f32 = 1.0;
}
