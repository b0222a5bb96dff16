// SPDX-License-Identifier: MPL-2.0

//! On-screen control widgets
//!
//! The camera's capture controls as host-independent state machines:
//! - [`animator`]: rotation state machine driving orientation transitions
//! - [`icon`]: enabled/disabled and pressed visual state
//! - [`rotate_icon`]: icon widget that rotates with the device
//! - [`shutter`]: the shutter button
//! - [`surface`]: draw-transform computation for the render surface
//!
//! None of the widgets own an event loop or spawn threads. The host render
//! loop calls `tick` once per frame, draws with the returned frame state,
//! and keeps scheduling frames while the widget asks for another tick.

pub mod animator;
pub mod icon;
pub mod rotate_icon;
pub mod shutter;
pub mod surface;

// Re-export for convenience
pub use animator::{OrientationAnimator, Tick, normalize_degree};
pub use icon::TwoStateIcon;
pub use rotate_icon::{IconFrame, RotateIcon};
pub use shutter::{ShutterControl, ShutterListener};
pub use surface::{ContentFit, DrawTransform, Size, draw_transform};

/// Capability of widgets whose content rotates to follow the device
/// orientation.
pub trait Rotatable {
    /// Rotate the content to `degree`, optionally animating the
    /// transition. Angles outside [0, 359] are normalized.
    fn set_orientation(&mut self, degree: i32, animate: bool);

    /// Angle the content is currently drawn at.
    fn current_render_angle(&self) -> i32;
}
