// SPDX-License-Identifier: MPL-2.0

//! Orientation animation state machine
//!
//! Rotates an on-screen control toward a target orientation at a constant
//! angular speed, always along the shortest path. The host render loop
//! calls [`OrientationAnimator::advance`] once per frame and keeps
//! scheduling frames for as long as the returned [`Tick`] reports the
//! transition active.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::constants::ANIMATION_SPEED;

/// Bring an angle into the [0, 359] range, preserving its value mod 360.
pub fn normalize_degree(degree: i32) -> i32 {
    degree.rem_euclid(360)
}

/// Result of advancing the animator by one render tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Angle to render this frame, in degrees within [0, 359]
    pub degree: i32,
    /// The transition is still in progress; the host must schedule
    /// another frame
    pub active: bool,
    /// The transition reached its target on this tick. Reported on
    /// exactly one tick per transition.
    pub settled: bool,
}

/// Interpolation window of an active transition
#[derive(Debug, Clone, Copy)]
struct Window {
    start: Instant,
    end: Instant,
}

/// Rotation state machine for a single widget.
///
/// All angles are integer degrees in [0, 359]. The animator is settled
/// whenever the current angle equals the target; arming a new target while
/// a transition is running restarts the interpolation from the live
/// current angle, so redirection never jumps.
#[derive(Debug)]
pub struct OrientationAnimator {
    current_degree: i32,
    start_degree: i32,
    target_degree: i32,
    clockwise: bool,
    animation_enabled: bool,
    window: Option<Window>,
}

impl Default for OrientationAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationAnimator {
    /// Create a settled animator at 0 degrees.
    pub fn new() -> Self {
        Self {
            current_degree: 0,
            start_degree: 0,
            target_degree: 0,
            clockwise: false,
            animation_enabled: true,
            window: None,
        }
    }

    /// Angle currently rendered, in degrees within [0, 359].
    pub fn current_degree(&self) -> i32 {
        self.current_degree
    }

    /// Angle the animator converges to.
    pub fn target_degree(&self) -> i32 {
        self.target_degree
    }

    /// Whether a transition is in progress.
    pub fn is_animating(&self) -> bool {
        self.current_degree != self.target_degree
    }

    /// Set a new target orientation.
    ///
    /// `degree` may be any integer; it is normalized into [0, 359].
    /// Requests matching the current target are absorbed without touching
    /// any state. Returns true when the visual state changed and the host
    /// must request a redraw.
    pub fn set_orientation(&mut self, degree: i32, animate: bool, now: Instant) -> bool {
        debug!(degree, animate, target = self.target_degree, "set orientation");
        self.animation_enabled = animate;
        let degree = normalize_degree(degree);
        if degree == self.target_degree {
            return false;
        }

        self.target_degree = degree;
        if self.animation_enabled {
            self.start_degree = self.current_degree;

            // Shortest signed distance in [-179, 180]. A distance of
            // exactly 180 stays positive, so ties rotate clockwise.
            let mut diff = self.target_degree - self.current_degree;
            if diff < 0 {
                diff += 360;
            }
            if diff > 180 {
                diff -= 360;
            }

            self.clockwise = diff >= 0;
            let duration_ms = diff.unsigned_abs() as u64 * 1000 / ANIMATION_SPEED as u64;
            self.window = Some(Window {
                start: now,
                end: now + Duration::from_millis(duration_ms),
            });
        } else {
            self.current_degree = self.target_degree;
            self.window = None;
        }

        true
    }

    /// Advance the transition to `now` and return the angle to render.
    ///
    /// Call once per frame. While the result reports itself `active` the
    /// host must schedule another frame; `settled` marks the single tick
    /// on which the target is reached.
    pub fn advance(&mut self, now: Instant) -> Tick {
        if self.current_degree == self.target_degree {
            return Tick {
                degree: self.current_degree,
                active: false,
                settled: false,
            };
        }

        if let Some(window) = self.window
            && now < window.end
        {
            let elapsed = now.duration_since(window.start).as_millis() as i64;
            let signed = if self.clockwise { elapsed } else { -elapsed };
            let travelled = ANIMATION_SPEED * signed / 1000;
            self.current_degree = normalize_degree(self.start_degree + travelled as i32);
            Tick {
                degree: self.current_degree,
                active: true,
                settled: false,
            }
        } else {
            self.current_degree = self.target_degree;
            self.window = None;
            Tick {
                degree: self.current_degree,
                active: false,
                settled: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degree_range() {
        for degree in -1080..=1080 {
            let normalized = normalize_degree(degree);
            assert!(
                (0..360).contains(&normalized),
                "normalize_degree({}) = {} out of range",
                degree,
                normalized
            );
            assert_eq!(
                (normalized - degree).rem_euclid(360),
                0,
                "normalize_degree({}) changed the angle",
                degree
            );
        }
    }

    #[test]
    fn test_repeated_target_is_absorbed() {
        let mut animator = OrientationAnimator::new();
        let t0 = Instant::now();

        assert!(animator.set_orientation(90, true, t0));
        let mid = animator.advance(t0 + Duration::from_millis(100));

        // Same normalized target again: no state change, no redraw request
        assert!(!animator.set_orientation(90, true, t0 + Duration::from_millis(100)));
        assert!(!animator.set_orientation(450, true, t0 + Duration::from_millis(100)));
        let again = animator.advance(t0 + Duration::from_millis(100));
        assert_eq!(mid, again);
    }

    #[test]
    fn test_immediate_mode_snaps() {
        let mut animator = OrientationAnimator::new();
        let t0 = Instant::now();

        assert!(animator.set_orientation(90, false, t0));
        assert_eq!(animator.current_degree(), 90);
        assert!(!animator.is_animating());

        // Never reports an active or settling tick
        let tick = animator.advance(t0);
        assert!(!tick.active);
        assert!(!tick.settled);
        assert_eq!(tick.degree, 90);
    }

    #[test]
    fn test_shortest_path_wraps_counter_clockwise() {
        // Raw difference of 190 means going back 170 degrees instead
        let mut animator = OrientationAnimator::new();
        let t0 = Instant::now();
        animator.set_orientation(190, true, t0);

        // Counter-clockwise: shortly after the start the angle is just
        // below 360, not just above 0
        let early = animator.advance(t0 + Duration::from_millis(100));
        assert!(early.active);
        assert!(early.degree > 300, "degree = {}", early.degree);

        // 170 deg at 270 deg/s is 629 ms (integer milliseconds)
        let before = animator.advance(t0 + Duration::from_millis(628));
        assert!(before.active);
        let at_end = animator.advance(t0 + Duration::from_millis(629));
        assert!(at_end.settled);
        assert_eq!(at_end.degree, 190);
    }

    #[test]
    fn test_half_turn_breaks_tie_clockwise() {
        let mut animator = OrientationAnimator::new();
        let t0 = Instant::now();
        animator.set_orientation(180, true, t0);

        // Clockwise: the angle grows from 0 toward 180
        let early = animator.advance(t0 + Duration::from_millis(100));
        assert!(early.active);
        assert_eq!(early.degree, 27);
    }

    #[test]
    fn test_redirection_resumes_from_live_angle() {
        let mut animator = OrientationAnimator::new();
        let t0 = Instant::now();
        animator.set_orientation(270, true, t0);

        let mid = animator.advance(t0 + Duration::from_millis(100));
        assert_eq!(mid.degree, 333);

        // Retarget mid-flight: the very next frame still renders the live
        // angle, with no discontinuity
        let t1 = t0 + Duration::from_millis(100);
        assert!(animator.set_orientation(90, true, t1));
        let resumed = animator.advance(t1);
        assert!(resumed.active);
        assert_eq!(resumed.degree, 333);

        // New leg is clockwise (333 -> 90 is 117 degrees forward)
        let later = animator.advance(t1 + Duration::from_millis(100));
        assert_eq!(later.degree, 0);
        let done = animator.advance(t1 + Duration::from_millis(117 * 1000 / 270));
        assert!(done.settled);
        assert_eq!(done.degree, 90);
    }

    #[test]
    fn test_settling_is_monotonic() {
        let mut animator = OrientationAnimator::new();
        let t0 = Instant::now();
        animator.set_orientation(270, true, t0);

        // Counter-clockwise leg of 90 degrees; the travelled arc must only
        // grow and never pass the target
        let mut last_travelled = 0;
        let mut now = t0;
        loop {
            let tick = animator.advance(now);
            let travelled = normalize_degree(0 - tick.degree);
            assert!(travelled <= 90, "overshot: degree = {}", tick.degree);
            assert!(
                travelled >= last_travelled,
                "went backwards: {} after {}",
                travelled,
                last_travelled
            );
            last_travelled = travelled;
            if !tick.active {
                assert!(tick.settled);
                assert_eq!(tick.degree, 270);
                break;
            }
            now += Duration::from_millis(16);
        }
    }

    #[test]
    fn test_quarter_turn_duration() {
        // 0 -> 270 goes counter-clockwise for 90 degrees: 333 ms
        let mut animator = OrientationAnimator::new();
        let t0 = Instant::now();
        animator.set_orientation(270, true, t0);

        let before = animator.advance(t0 + Duration::from_millis(332));
        assert!(before.active);

        let at_end = animator.advance(t0 + Duration::from_millis(333));
        assert!(at_end.settled);
        assert!(!at_end.active);
        assert_eq!(at_end.degree, 270);

        // Settling is reported only once
        let after = animator.advance(t0 + Duration::from_millis(400));
        assert!(!after.settled);
        assert!(!after.active);
    }
}
