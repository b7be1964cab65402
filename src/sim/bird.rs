//! The player-controlled bird
//!
//! Per-tick Euler integration under constant gravity, clamped to the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::approach;
use crate::tuning::Tuning;

/// Which vertical bound the bird is resting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Ceiling,
    Floor,
}

/// The bird entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Centre position (x never changes)
    pub pos: Vec2,
    /// Vertical velocity per tick (negative = up)
    pub vel: f32,
    pub radius: f32,
    /// Cosmetic tilt in degrees, no effect on physics
    pub rotation: f32,
    /// Ticks advanced, drives the wing animation
    pub wing_ticks: u32,
}

impl Bird {
    /// Fresh bird at the start position, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.field_height / 2.0),
            vel: 0.0,
            radius: tuning.bird_radius,
            rotation: 0.0,
            wing_ticks: 0,
        }
    }

    /// Apply the upward impulse. Overrides the current velocity.
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vel = tuning.flap_velocity;
        self.rotation = tuning.tilt_up;
    }

    /// Advance one tick
    pub fn advance(&mut self, tuning: &Tuning) {
        self.vel += tuning.gravity;
        self.pos.y += self.vel;

        let min_y = self.radius;
        let max_y = tuning.floor() - self.radius;
        if self.pos.y < min_y {
            self.pos.y = min_y;
            self.vel = 0.0;
        }
        if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel = 0.0;
        }

        let target = if self.vel < 0.0 {
            tuning.tilt_up
        } else {
            tuning.tilt_down
        };
        self.rotation = approach(self.rotation, target, tuning.tilt_step)
            .clamp(tuning.tilt_up, tuning.tilt_down);

        self.wing_ticks = self.wing_ticks.wrapping_add(1);
    }

    /// Collision box: square of side 2 * radius (not a circle)
    pub fn bounding_box(&self) -> Rect {
        Rect::centered_square(self.pos, self.radius)
    }

    /// Bound the bird has reached, if any
    pub fn at_boundary(&self, tuning: &Tuning) -> Option<Boundary> {
        if self.pos.y <= self.radius {
            Some(Boundary::Ceiling)
        } else if self.pos.y >= tuning.floor() - self.radius {
            Some(Boundary::Floor)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_bird_starts_mid_field_at_rest() {
        let tuning = Tuning::default();
        let bird = Bird::new(&tuning);
        assert_eq!(bird.pos, Vec2::new(80.0, 300.0));
        assert_eq!(bird.vel, 0.0);
        assert_eq!(bird.at_boundary(&tuning), None);
    }

    #[test]
    fn test_flap_sets_velocity_and_tilt() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.vel = 5.0;
        bird.flap(&tuning);
        assert_eq!(bird.vel, tuning.flap_velocity);
        assert_eq!(bird.rotation, tuning.tilt_up);
    }

    #[test]
    fn test_advance_integrates_gravity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.advance(&tuning);
        assert!((bird.vel - 0.3).abs() < 1e-6);
        assert!((bird.pos.y - 300.3).abs() < 1e-4);
        // Falling tilts the nose down
        assert_eq!(bird.rotation, tuning.tilt_step);
    }

    #[test]
    fn test_floor_clamp_zeroes_velocity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.pos.y = tuning.floor() - bird.radius;
        bird.vel = 6.0;
        bird.advance(&tuning);
        assert_eq!(bird.pos.y, 565.0);
        assert_eq!(bird.vel, 0.0);
        assert_eq!(bird.at_boundary(&tuning), Some(Boundary::Floor));
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        bird.pos.y = 20.0;
        bird.flap(&tuning);
        bird.advance(&tuning);
        assert_eq!(bird.pos.y, bird.radius);
        assert_eq!(bird.vel, 0.0);
        assert_eq!(bird.at_boundary(&tuning), Some(Boundary::Ceiling));
    }

    #[test]
    fn test_rotation_never_leaves_tilt_range() {
        let tuning = Tuning::default();
        let mut bird = Bird::new(&tuning);
        for _ in 0..100 {
            bird.advance(&tuning);
        }
        assert_eq!(bird.rotation, tuning.tilt_down);
        bird.flap(&tuning);
        bird.advance(&tuning);
        assert_eq!(bird.rotation, tuning.tilt_up);
    }

    #[test]
    fn test_bounding_box_is_square() {
        let tuning = Tuning::default();
        let bird = Bird::new(&tuning);
        let bbox = bird.bounding_box();
        assert_eq!(bbox.size, Vec2::splat(30.0));
        assert_eq!(bbox.min, Vec2::new(65.0, 285.0));
    }

    proptest! {
        #[test]
        fn prop_bird_stays_in_field(flaps in proptest::collection::vec(any::<bool>(), 1..400)) {
            let tuning = Tuning::default();
            let mut bird = Bird::new(&tuning);
            for flap in flaps {
                if flap {
                    bird.flap(&tuning);
                }
                let before = bird.vel + tuning.gravity;
                bird.advance(&tuning);
                prop_assert!(bird.pos.y >= bird.radius);
                prop_assert!(bird.pos.y <= tuning.floor() - bird.radius);
                prop_assert!(bird.rotation >= tuning.tilt_up && bird.rotation <= tuning.tilt_down);
                if bird.vel != before {
                    // Only a clamp changes velocity outside integration
                    prop_assert_eq!(bird.vel, 0.0);
                }
            }
        }
    }
}
