// SPDX-License-Identifier: MPL-2.0

//! On-screen shutter button
//!
//! A pressable surface composed with [`RotateIcon`]. Press-state changes,
//! clicks, and long presses are delivered to a [`ShutterListener`]. The
//! unpress notification is deferred to the end of the current UI tick so
//! that reacting to it cannot feed back into the gesture pass that
//! produced it; everything else fires synchronously.

use std::time::{Duration, Instant};

use tracing::debug;

use super::Rotatable;
use super::rotate_icon::{IconFrame, RotateIcon};
use crate::constants::ui;

/// Receives shutter button notifications.
pub trait ShutterListener {
    /// Pressed-state change. `pressed == true` fires synchronously from
    /// [`ShutterControl::press`]; `pressed == false` is dispatched from
    /// [`ShutterControl::end_tick`] after the UI pass that released the
    /// button.
    fn on_shutter_focus(&mut self, pressed: bool);

    /// A completed tap.
    fn on_shutter_click(&mut self);

    /// The button has been held past the long-press threshold.
    fn on_shutter_long_press(&mut self);
}

/// The on-screen shutter button control.
pub struct ShutterControl {
    icon: RotateIcon,
    listener: Option<Box<dyn ShutterListener>>,
    long_press_threshold: Duration,
    pressed_at: Option<Instant>,
    long_press_fired: bool,
    volume_key_down: bool,
    deferred_unpress: u32,
}

impl Default for ShutterControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutterControl {
    pub fn new() -> Self {
        Self {
            icon: RotateIcon::new(),
            listener: None,
            long_press_threshold: ui::LONG_PRESS_THRESHOLD,
            pressed_at: None,
            long_press_fired: false,
            volume_key_down: false,
            deferred_unpress: 0,
        }
    }

    pub fn set_listener(&mut self, listener: impl ShutterListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn set_long_press_threshold(&mut self, threshold: Duration) {
        self.long_press_threshold = threshold;
    }

    /// Suppress clicks while a hardware volume key drives the capture.
    pub fn set_volume_key_down(&mut self, down: bool) {
        self.volume_key_down = down;
    }

    pub fn is_volume_key_down(&self) -> bool {
        self.volume_key_down
    }

    pub fn icon(&self) -> &RotateIcon {
        &self.icon
    }

    pub fn icon_mut(&mut self) -> &mut RotateIcon {
        &mut self.icon
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.icon.set_enabled(enabled);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// The button went down. Fires the pressed notification synchronously.
    pub fn press(&mut self, now: Instant) {
        if self.pressed_at.is_some() {
            return;
        }
        debug!("shutter pressed");
        self.pressed_at = Some(now);
        self.long_press_fired = false;
        self.icon.icon_mut().set_pressed(true);
        if let Some(listener) = self.listener.as_mut() {
            listener.on_shutter_focus(true);
        }
    }

    /// The button came back up.
    ///
    /// The unpress notification is queued for [`Self::end_tick`]. A click
    /// fires now unless the gesture was consumed by a long press or a
    /// volume key is held.
    pub fn release(&mut self, _now: Instant) {
        if self.pressed_at.take().is_none() {
            return;
        }
        debug!(long_press = self.long_press_fired, "shutter released");
        self.icon.icon_mut().set_pressed(false);
        self.deferred_unpress += 1;
        if !self.long_press_fired
            && !self.volume_key_down
            && let Some(listener) = self.listener.as_mut()
        {
            listener.on_shutter_click();
        }
    }

    /// Advance animation and gesture state for this frame.
    ///
    /// Detects a held press crossing the long-press threshold. When the
    /// orientation transition settles, one extra frame is requested so the
    /// pressed styling is redrawn at the final angle.
    pub fn tick(&mut self, now: Instant) -> IconFrame {
        if let Some(pressed_at) = self.pressed_at
            && !self.long_press_fired
            && now.duration_since(pressed_at) >= self.long_press_threshold
        {
            self.long_press_fired = true;
            if let Some(listener) = self.listener.as_mut() {
                listener.on_shutter_long_press();
            }
        }

        let mut frame = self.icon.tick(now);
        if frame.settled {
            frame.needs_tick = true;
        }
        frame
    }

    /// Drain notifications deferred to the end of the UI tick.
    ///
    /// The host calls this after its draw pass, once per tick.
    pub fn end_tick(&mut self) {
        while self.deferred_unpress > 0 {
            self.deferred_unpress -= 1;
            if let Some(listener) = self.listener.as_mut() {
                listener.on_shutter_focus(false);
            }
        }
    }
}

impl Rotatable for ShutterControl {
    fn set_orientation(&mut self, degree: i32, animate: bool) {
        self.icon.set_orientation(degree, animate);
    }

    fn current_render_angle(&self) -> i32 {
        self.icon.current_render_angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Focus(bool),
        Click,
        LongPress,
    }

    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl ShutterListener for Recorder {
        fn on_shutter_focus(&mut self, pressed: bool) {
            self.events.borrow_mut().push(Event::Focus(pressed));
        }

        fn on_shutter_click(&mut self) {
            self.events.borrow_mut().push(Event::Click);
        }

        fn on_shutter_long_press(&mut self) {
            self.events.borrow_mut().push(Event::LongPress);
        }
    }

    fn recorded() -> (ShutterControl, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut control = ShutterControl::new();
        control.set_listener(Recorder {
            events: events.clone(),
        });
        (control, events)
    }

    #[test]
    fn test_tap_clicks_then_defers_unpress() {
        let (mut control, events) = recorded();
        let t0 = Instant::now();

        control.press(t0);
        assert_eq!(*events.borrow(), vec![Event::Focus(true)]);

        control.release(t0 + Duration::from_millis(80));
        // Click is synchronous, the unpress is not delivered yet
        assert_eq!(*events.borrow(), vec![Event::Focus(true), Event::Click]);

        control.end_tick();
        assert_eq!(
            *events.borrow(),
            vec![Event::Focus(true), Event::Click, Event::Focus(false)]
        );

        // Nothing left queued
        control.end_tick();
        assert_eq!(events.borrow().len(), 3);
    }

    #[test]
    fn test_long_press_consumes_click() {
        let (mut control, events) = recorded();
        let t0 = Instant::now();

        control.press(t0);
        control.tick(t0 + Duration::from_millis(100));
        assert!(!events.borrow().contains(&Event::LongPress));

        control.tick(t0 + Duration::from_millis(500));
        assert!(events.borrow().contains(&Event::LongPress));

        // Held further: no second long press
        control.tick(t0 + Duration::from_millis(700));
        let long_presses = events
            .borrow()
            .iter()
            .filter(|e| **e == Event::LongPress)
            .count();
        assert_eq!(long_presses, 1);

        control.release(t0 + Duration::from_millis(800));
        control.end_tick();
        assert!(!events.borrow().contains(&Event::Click));
    }

    #[test]
    fn test_volume_key_suppresses_click() {
        let (mut control, events) = recorded();
        let t0 = Instant::now();

        control.set_volume_key_down(true);
        control.press(t0);
        control.release(t0 + Duration::from_millis(50));
        control.end_tick();

        assert!(!events.borrow().contains(&Event::Click));
        assert_eq!(
            *events.borrow(),
            vec![Event::Focus(true), Event::Focus(false)]
        );
    }

    #[test]
    fn test_settling_requests_one_extra_frame() {
        let (mut control, _) = recorded();
        let t0 = Instant::now();
        control.icon_mut().set_orientation_at(90, true, t0);

        let settled = control.tick(t0 + Duration::from_millis(400));
        assert!(settled.settled);
        assert!(settled.needs_tick);

        let after = control.tick(t0 + Duration::from_millis(416));
        assert!(!after.settled);
        assert!(!after.needs_tick);
    }

    #[test]
    fn test_duplicate_press_ignored() {
        let (mut control, events) = recorded();
        let t0 = Instant::now();

        control.press(t0);
        control.press(t0 + Duration::from_millis(10));
        assert_eq!(events.borrow().len(), 1);

        control.release(t0 + Duration::from_millis(20));
        control.release(t0 + Duration::from_millis(30));
        control.end_tick();
        let unpresses = events
            .borrow()
            .iter()
            .filter(|e| **e == Event::Focus(false))
            .count();
        assert_eq!(unpresses, 1);
    }
}
