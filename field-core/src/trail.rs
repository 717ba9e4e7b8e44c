use crate::config::TrailTuning;
use glam::Vec2;

/// A first-order low-pass position tracker.
///
/// Each call to [`Follower::approach`] moves the current position a fixed
/// fraction of the remaining distance towards the target:
/// `current += (target - current) * smoothing`. The tracker is stable for
/// any smoothing in `(0, 1]` and converges exponentially while the target
/// is held still.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pub current: Vec2,
    pub smoothing: f32,
}

impl Follower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            current: Vec2::ZERO,
            smoothing,
        }
    }

    pub fn approach(&mut self, target: Vec2) {
        self.current += (target - self.current) * self.smoothing;
    }
}

/// The lagged cursor pair: a primary dot and a slower halo ring.
///
/// Both followers chase the same raw pointer position; the halo uses a
/// smaller smoothing factor and therefore trails behind the dot. The
/// `hover` flag mirrors whether the pointer currently sits on an
/// interactive element, so the view can swell the halo.
#[derive(Clone, Copy, Debug)]
pub struct CursorTrail {
    pub cursor: Follower,
    pub halo: Follower,
    pub hover: bool,
}

impl CursorTrail {
    pub fn new(tuning: &TrailTuning) -> Self {
        Self {
            cursor: Follower::new(tuning.cursor_smoothing),
            halo: Follower::new(tuning.halo_smoothing),
            hover: false,
        }
    }

    /// Steps both followers once towards the raw pointer position.
    pub fn advance(&mut self, target: Vec2) {
        self.cursor.approach(target);
        self.halo.approach(target);
    }

    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_converges_to_a_held_target() {
        let mut follower = Follower::new(0.15);
        let target = Vec2::new(500.0, -300.0);
        let initial_error = (target - follower.current).length();

        for _ in 0..50 {
            follower.approach(target);
        }

        // After 50 steps at 0.15 the residual is a tiny fraction of the
        // initial distance: (1 - 0.15)^50 ≈ 3e-4.
        let error = (target - follower.current).length();
        assert!(error < 0.001 * initial_error);
    }

    #[test]
    fn follower_with_full_smoothing_snaps_immediately() {
        let mut follower = Follower::new(1.0);
        let target = Vec2::new(10.0, 20.0);

        follower.approach(target);

        assert_eq!(follower.current, target);
    }

    #[test]
    fn each_step_reduces_the_remaining_distance() {
        let mut follower = Follower::new(0.2);
        let target = Vec2::new(100.0, 0.0);

        let mut last = (target - follower.current).length();
        for _ in 0..20 {
            follower.approach(target);
            let d = (target - follower.current).length();
            assert!(d < last);
            last = d;
        }
    }

    #[test]
    fn halo_lags_behind_the_primary_cursor() {
        let mut trail = CursorTrail::new(&TrailTuning::default());
        let target = Vec2::new(200.0, 80.0);

        for _ in 0..10 {
            trail.advance(target);
        }

        let cursor_error = (target - trail.cursor.current).length();
        let halo_error = (target - trail.halo.current).length();
        assert!(cursor_error < halo_error);
    }

    #[test]
    fn hover_flag_is_plain_state() {
        let mut trail = CursorTrail::new(&TrailTuning::default());
        assert!(!trail.hover);

        trail.set_hover(true);
        assert!(trail.hover);

        trail.set_hover(false);
        assert!(!trail.hover);
    }
}
