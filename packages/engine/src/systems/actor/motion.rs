//! Per-tick motion: acceleration, timed move-to, rotation, advance and
//! wall bounce.

use crate::geometry::{normalize_degrees, to_degrees, Point};

use super::body::{Actor, MoveTarget, TRAIL_LEN};
use super::bounce::{reflect_into, Surface};

impl Actor {
    pub fn set_speed(&mut self, speed: f32) -> &mut Self {
        self.vector.set_magnitude(speed);
        self
    }

    /// Point the heading (and so the velocity) at `degrees`.
    pub fn set_direction(&mut self, degrees: f32) -> &mut Self {
        self.vector.set_direction(degrees);
        self
    }

    /// Rotate the heading by `degrees`.
    pub fn turn(&mut self, degrees: f32) -> &mut Self {
        self.vector.rotate(degrees);
        self
    }

    /// Visual rotation only; the heading is untouched.
    pub fn set_rotation(&mut self, degrees: f32) -> &mut Self {
        if degrees.is_finite() {
            self.rotation = normalize_degrees(degrees);
        }
        self
    }

    pub fn rotate(&mut self, degrees: f32) -> &mut Self {
        if degrees.is_finite() {
            self.rotation = normalize_degrees(self.rotation + degrees);
        }
        self
    }

    /// Constant per-frame speed change with no end point.
    pub fn set_acceleration(&mut self, rate: f32) -> &mut Self {
        if rate.is_finite() {
            self.acceleration = rate;
            self.accelerate_target = None;
        }
        self
    }

    /// Reach `speed` over `frames` ticks. `frames == 0` sets it at once.
    pub fn accelerate_to(&mut self, speed: f32, frames: u32) -> &mut Self {
        if !speed.is_finite() {
            return self;
        }
        let speed = speed.max(0.0);
        if frames == 0 || speed == self.speed() {
            self.vector.set_magnitude(speed);
            self.acceleration = 0.0;
            self.accelerate_target = None;
            return self;
        }
        self.acceleration = (speed - self.speed()) / frames as f32;
        self.accelerate_target = Some(speed);
        self
    }

    /// Apply one step of `rate` to the speed and return the new speed.
    /// A pending `accelerate_to` target stops the change once reached.
    pub fn accelerate(&mut self, rate: f32) -> f32 {
        if rate == 0.0 || !rate.is_finite() {
            return self.speed();
        }
        let next = self.speed() + rate;
        match self.accelerate_target {
            Some(target) if (rate > 0.0 && next >= target) || (rate < 0.0 && next <= target) => {
                self.vector.set_magnitude(target);
                self.acceleration = 0.0;
                self.accelerate_target = None;
            }
            _ => {
                self.vector.set_magnitude(next);
            }
        }
        self.speed()
    }

    /// Shift the position; no bounce is applied.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        if dx.is_finite() && dy.is_finite() {
            self.pos = self.pos + Point::new(dx, dy);
        }
        self
    }

    /// Head for `(x, y)` and arrive after `frames` ticks.
    ///
    /// Jumps straight there (clearing any pending move) when `frames` is 0
    /// or the actor is not moving. Returns `false` for non-finite targets.
    pub fn move_to_frames(&mut self, x: f32, y: f32, frames: u32) -> bool {
        let target = Point::new(x, y);
        if !target.is_finite() {
            return false;
        }

        if frames == 0 || self.speed() == 0.0 {
            self.moving_to = None;
            self.jump_to(target);
            return true;
        }

        let delta = target - self.pos;
        let distance = self.pos.distance_to(target);
        if distance > 0.0 {
            self.vector.set_direction(to_degrees(delta.y.atan2(delta.x)));
        }
        self.vector.set_magnitude(distance / frames as f32);
        self.accelerate_target = None;
        self.acceleration = 0.0;
        self.moving_to = Some(MoveTarget { target, frames_remaining: frames });
        true
    }

    /// `move_to_frames` with the duration given in seconds at `fps`.
    pub fn move_to(&mut self, x: f32, y: f32, seconds: f32, fps: f32) -> bool {
        if !seconds.is_finite() {
            return false;
        }
        let frames = if seconds <= 0.0 {
            0
        } else {
            ((fps * seconds).round() as u32).max(1)
        };
        self.move_to_frames(x, y, frames)
    }

    /// Where the actor would be after `frames` ticks at its current
    /// velocity, ignoring walls.
    pub fn next_position(&self, frames: f32) -> Point {
        self.pos + self.vector.offset(frames)
    }

    /// Run one tick of motion. Without a surface the actor moves freely.
    pub fn advance(&mut self, surface: Option<&Surface>) {
        let rate = self.acceleration;
        self.accelerate(rate);

        if let Some(mut pending) = self.moving_to {
            pending.frames_remaining = pending.frames_remaining.saturating_sub(1);
            if pending.frames_remaining == 0 {
                self.moving_to = None;
                self.vector.set_magnitude(0.0);
                self.jump_to(pending.target);
            } else {
                self.moving_to = Some(pending);
            }
        }

        if self.spin != 0.0 {
            self.rotation = normalize_degrees(self.rotation + self.spin);
        }
        if self.turn_rate != 0.0 {
            self.vector.rotate(self.turn_rate);
        }

        if self.trail.len() == TRAIL_LEN {
            self.trail.pop_front();
        }
        self.trail.push_back(self.pos);

        let next = self.next_position(1.0);
        let next = match surface {
            Some(surface) => reflect_into(surface, next, self.width, self.height, &mut self.vector),
            None => next,
        };
        self.jump_to(next);
    }

    #[inline]
    fn jump_to(&mut self, p: Point) {
        self.pos = p;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActorConfig;
    use crate::systems::actor::ActorId;

    fn actor(config: ActorConfig) -> Actor {
        Actor::new(ActorId(1), &config, "black".into())
    }

    const EPS: f32 = 1e-3;

    #[test]
    fn advances_along_heading() {
        let mut a = actor(ActorConfig::default().at(10.0, 10.0).moving(2.0, 0.0));
        a.advance(None);
        assert!((a.x() - 12.0).abs() < EPS);
        assert!((a.y() - 10.0).abs() < EPS);
    }

    #[test]
    fn right_wall_bounce_stays_inside() {
        let surface = Surface::new(100.0, 100.0);
        let mut a = actor(ActorConfig::default().at(97.0, 10.0).sized(10.0, 10.0).moving(5.0, 0.0));
        a.advance(Some(&surface));
        assert!(a.x() >= 0.0 && a.x() <= 90.0, "x = {}", a.x());
        assert!(a.vector().x() < 0.0);
    }

    #[test]
    fn stays_in_bounds_over_many_ticks() {
        let surface = Surface::new(120.0, 80.0);
        let mut a = actor(ActorConfig::default().at(3.0, 4.0).sized(15.0, 12.0).moving(37.0, 33.0));
        for _ in 0..500 {
            a.advance(Some(&surface));
            assert!(a.x() >= 0.0 && a.x() <= 105.0);
            assert!(a.y() >= 0.0 && a.y() <= 68.0);
        }
    }

    #[test]
    fn move_to_with_zero_duration_jumps() {
        let mut a = actor(ActorConfig::default().moving(3.0, 0.0));
        assert!(a.move_to(40.0, 50.0, 0.0, 30.0));
        assert_eq!(a.position(), Point::new(40.0, 50.0));
        assert!(!a.is_moving_to_position());
    }

    #[test]
    fn move_to_when_stationary_jumps() {
        let mut a = actor(ActorConfig::default());
        assert!(a.move_to(40.0, 50.0, 2.0, 30.0));
        assert_eq!(a.position(), Point::new(40.0, 50.0));
        assert!(!a.is_moving_to_position());
    }

    #[test]
    fn move_to_counts_down_and_snaps() {
        let mut a = actor(ActorConfig::default().moving(1.0, 0.0));
        assert!(a.move_to(33.3, 17.7, 1.0, 30.0));
        assert_eq!(a.moving_to().map(|m| m.frames_remaining), Some(30));

        for remaining in (1..30).rev() {
            a.advance(None);
            assert_eq!(a.moving_to().map(|m| m.frames_remaining), Some(remaining));
        }
        a.advance(None);
        assert!(a.moving_to().is_none());
        assert_eq!(a.position(), Point::new(33.3, 17.7));
        assert_eq!(a.speed(), 0.0);
    }

    #[test]
    fn move_to_rejects_non_finite() {
        let mut a = actor(ActorConfig::default().moving(1.0, 0.0));
        assert!(!a.move_to(f32::NAN, 0.0, 1.0, 30.0));
        assert!(!a.move_to(0.0, 0.0, f32::INFINITY, 30.0));
        assert!(a.moving_to().is_none());
    }

    #[test]
    fn accelerate_to_clamps_at_target() {
        let mut a = actor(ActorConfig::default().moving(1.0, 0.0));
        a.accelerate_to(4.0, 3);
        for _ in 0..3 {
            a.advance(None);
        }
        assert!((a.speed() - 4.0).abs() < EPS);
        a.advance(None);
        assert!((a.speed() - 4.0).abs() < EPS);
        assert_eq!(a.acceleration(), 0.0);
    }

    #[test]
    fn deceleration_bottoms_out_at_zero() {
        let mut a = actor(ActorConfig::default().moving(1.0, 0.0));
        a.set_acceleration(-0.4);
        for _ in 0..5 {
            a.advance(None);
        }
        assert_eq!(a.speed(), 0.0);
    }

    #[test]
    fn turn_normalises_heading() {
        let mut a = actor(ActorConfig::default().moving(1.0, 350.0));
        a.turn(20.0);
        assert!((a.direction() - 10.0).abs() < EPS);
        a.turn(-30.0);
        assert!((a.direction() - 340.0).abs() < EPS);
    }

    #[test]
    fn turn_rate_drifts_heading_not_rotation() {
        let mut a = actor(ActorConfig { turn_rate: 90.0, ..ActorConfig::default().moving(2.0, 0.0) });
        a.advance(None);
        assert!((a.direction() - 90.0).abs() < EPS);
        assert_eq!(a.rotation(), 0.0);
        // heading turns before the move, so the first step already goes down
        assert!(a.x().abs() < EPS);
        assert!((a.y() - 2.0).abs() < EPS);

        for _ in 0..3 {
            a.advance(None);
        }
        assert!(a.direction().abs() < EPS);
        assert!(a.x().abs() < EPS && a.y().abs() < EPS);
    }

    #[test]
    fn spin_changes_rotation_not_heading() {
        let mut a = actor(ActorConfig { spin: 200.0, ..ActorConfig::default().moving(1.0, 90.0) });
        a.advance(None);
        a.advance(None);
        assert!((a.rotation() - 40.0).abs() < EPS);
        assert!((a.direction() - 90.0).abs() < EPS);
    }

    #[test]
    fn trail_is_capped() {
        let mut a = actor(ActorConfig::default().moving(1.0, 0.0));
        for _ in 0..(TRAIL_LEN + 5) {
            a.advance(None);
        }
        assert_eq!(a.trail().count(), TRAIL_LEN);
        assert_eq!(a.trail().next().map(|p| p.x.round()), Some(5.0));
    }
}
