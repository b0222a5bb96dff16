// SPDX-License-Identifier: MPL-2.0

//! Rotatable icon widget
//!
//! Combines the orientation animator with the two-state icon capability
//! into one widget. The host render loop calls [`RotateIcon::tick`] once
//! per frame; the returned [`IconFrame`] carries everything the render
//! surface needs to draw the icon.

use std::time::Instant;

use super::Rotatable;
use super::animator::OrientationAnimator;
use super::icon::TwoStateIcon;

/// Per-frame render state produced by [`RotateIcon::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconFrame {
    /// Rotation to draw at, in degrees within [0, 359]
    pub degree: i32,
    /// Opacity to draw with
    pub alpha: f32,
    /// The host must schedule another tick
    pub needs_tick: bool,
    /// An orientation transition settled on this tick
    pub settled: bool,
}

/// An icon whose content rotates to follow the device orientation.
pub struct RotateIcon {
    animator: OrientationAnimator,
    icon: TwoStateIcon,
    settle_hook: Option<Box<dyn FnMut()>>,
}

impl Default for RotateIcon {
    fn default() -> Self {
        Self::new()
    }
}

impl RotateIcon {
    pub fn new() -> Self {
        Self {
            animator: OrientationAnimator::new(),
            icon: TwoStateIcon::new(),
            settle_hook: None,
        }
    }

    /// Register a hook invoked once whenever an orientation transition
    /// settles. Dependent widgets use it to refresh state derived from the
    /// rendered angle and to force one extra redraw.
    pub fn on_settled(&mut self, hook: impl FnMut() + 'static) {
        self.settle_hook = Some(Box::new(hook));
    }

    pub fn icon(&self) -> &TwoStateIcon {
        &self.icon
    }

    pub fn icon_mut(&mut self) -> &mut TwoStateIcon {
        &mut self.icon
    }

    /// Enable or disable the control, dimming the icon accordingly.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.icon.set_enabled(enabled);
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Set the target orientation with an explicit timestamp.
    ///
    /// Returns true when the visual state changed and the host must
    /// request a redraw. [`Rotatable::set_orientation`] is the same
    /// operation stamped with `Instant::now()`.
    pub fn set_orientation_at(&mut self, degree: i32, animate: bool, now: Instant) -> bool {
        self.animator.set_orientation(degree, animate, now)
    }

    /// Advance animation state for this frame.
    pub fn tick(&mut self, now: Instant) -> IconFrame {
        let tick = self.animator.advance(now);
        if tick.settled
            && let Some(hook) = self.settle_hook.as_mut()
        {
            hook();
        }
        IconFrame {
            degree: tick.degree,
            alpha: self.icon.alpha(),
            needs_tick: tick.active,
            settled: tick.settled,
        }
    }
}

impl Rotatable for RotateIcon {
    fn set_orientation(&mut self, degree: i32, animate: bool) {
        self.set_orientation_at(degree, animate, Instant::now());
    }

    fn current_render_angle(&self) -> i32 {
        self.animator.current_degree()
    }
}
