// SPDX-License-Identifier: MPL-2.0

//! Two-state icon capability
//!
//! Enabled/disabled and pressed visual state for an icon control. The
//! state is expressed as an opacity (and an optional pressed background)
//! that the render surface applies when drawing; the icon itself draws
//! nothing.

use crate::constants::ui;

/// Visual state of an icon control.
#[derive(Debug, Clone)]
pub struct TwoStateIcon {
    enabled: bool,
    /// When false, disabling the control does not dim the icon
    filter_enabled: bool,
    /// Dim the icon to [`ui::PRESSED_ALPHA`] while pressed
    dim_when_pressed: bool,
    /// Show a highlight background while pressed
    show_pressed_background: bool,
    pressed: bool,
}

impl Default for TwoStateIcon {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoStateIcon {
    /// Create an enabled, unpressed icon.
    pub fn new() -> Self {
        Self {
            enabled: true,
            filter_enabled: true,
            dim_when_pressed: false,
            show_pressed_background: false,
            pressed: false,
        }
    }

    /// Enable or disable the owning control.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Opt in or out of dimming the icon while disabled.
    pub fn enable_filter(&mut self, enabled: bool) {
        self.filter_enabled = enabled;
    }

    /// Dim the icon while the control is pressed.
    pub fn set_dim_when_pressed(&mut self, dim: bool) {
        self.dim_when_pressed = dim;
    }

    /// Show a highlight background while the control is pressed.
    pub fn set_pressed_background(&mut self, show: bool) {
        self.show_pressed_background = show;
    }

    /// Update the pressed state. Returns true when the derived visual
    /// state changed and the icon needs a redraw.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        if self.pressed == pressed {
            return false;
        }
        self.pressed = pressed;
        self.dim_when_pressed || self.show_pressed_background
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Opacity the render surface applies when drawing the icon.
    pub fn alpha(&self) -> f32 {
        if !self.enabled && self.filter_enabled {
            ui::DISABLED_ALPHA
        } else if self.pressed && self.dim_when_pressed {
            ui::PRESSED_ALPHA
        } else {
            ui::FULL_ALPHA
        }
    }

    /// Whether the pressed background should be drawn behind the icon.
    pub fn background_visible(&self) -> bool {
        self.pressed && self.show_pressed_background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_icon_dims() {
        let mut icon = TwoStateIcon::new();
        assert_eq!(icon.alpha(), ui::FULL_ALPHA);

        icon.set_enabled(false);
        assert_eq!(icon.alpha(), ui::DISABLED_ALPHA);

        icon.set_enabled(true);
        assert_eq!(icon.alpha(), ui::FULL_ALPHA);
    }

    #[test]
    fn test_filter_opt_out() {
        let mut icon = TwoStateIcon::new();
        icon.enable_filter(false);
        icon.set_enabled(false);
        assert_eq!(icon.alpha(), ui::FULL_ALPHA);
    }

    #[test]
    fn test_pressed_dimming() {
        let mut icon = TwoStateIcon::new();

        // Without the flag, pressing changes nothing visually
        assert!(!icon.set_pressed(true));
        assert_eq!(icon.alpha(), ui::FULL_ALPHA);
        icon.set_pressed(false);

        icon.set_dim_when_pressed(true);
        assert!(icon.set_pressed(true));
        assert_eq!(icon.alpha(), ui::PRESSED_ALPHA);
        assert!(icon.set_pressed(false));
        assert_eq!(icon.alpha(), ui::FULL_ALPHA);
    }

    #[test]
    fn test_pressed_background() {
        let mut icon = TwoStateIcon::new();
        icon.set_pressed_background(true);
        assert!(!icon.background_visible());
        icon.set_pressed(true);
        assert!(icon.background_visible());
    }

    #[test]
    fn test_disabled_wins_over_pressed() {
        let mut icon = TwoStateIcon::new();
        icon.set_dim_when_pressed(true);
        icon.set_enabled(false);
        icon.set_pressed(true);
        assert_eq!(icon.alpha(), ui::DISABLED_ALPHA);
    }
}
