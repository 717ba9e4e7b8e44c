//! Per-tick simulation steps for the particle field.
//!
//! The typical update loop looks like:
//! 1. [`integration_step`] — each particle moves by its velocity and
//!    bounces off the viewport edges.
//! 2. [`repulsion_step`] — particles near the cursor receive an outward
//!    velocity impulse.
//!
//! Rendering happens after both steps, so circles and link lines always
//! reflect the positions finalized in the current tick.

use crate::{config::FieldTuning, particle::Particle};
use glam::Vec2;

/// Moves every particle by its velocity and bounces it off the edges.
///
/// For each particle:
///
/// 1. `pos += vel`.
/// 2. If the updated `x` is outside `[0, width]`, `vx` is negated; the
///    same check is applied to `y` against `[0, height]`.
///
/// The check runs on the already-updated position, so a particle crosses
/// the boundary first and turns around afterwards. Positions are never
/// clamped; a particle may sit outside the bounds for a tick, by at most
/// one tick's travel distance.
///
/// ### Parameters
/// - `particles` - All particles; positions and velocities are mutated.
/// - `bounds` - Current viewport size as `(width, height)`.
pub fn integration_step(particles: &mut [Particle], bounds: Vec2) {
    for p in particles.iter_mut() {
        p.pos += p.vel;

        if p.pos.x < 0.0 || p.pos.x > bounds.x {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y < 0.0 || p.pos.y > bounds.y {
            p.vel.y = -p.vel.y;
        }
    }
}

/// Pushes particles near the cursor away from it.
///
/// For each particle with distance `d` to the cursor below
/// `tuning.repel_radius`, a velocity impulse of magnitude
/// `(repel_radius - d) / repel_falloff` is applied along the direction
/// from the cursor to the particle.
///
/// The impulse fires on every tick the particle stays inside the radius,
/// so sustained proximity keeps accelerating it. With the default
/// `max_speed: None` that growth is unbounded; setting a cap clamps the
/// velocity magnitude after the impulse.
///
/// ### Parameters
/// - `particles` - All particles; only velocities are mutated.
/// - `cursor` - Last-known pointer position.
/// - `tuning` - Field tuning, providing radius, falloff and the optional cap.
pub fn repulsion_step(particles: &mut [Particle], cursor: Vec2, tuning: &FieldTuning) {
    for p in particles.iter_mut() {
        let away = p.pos - cursor;
        let d = away.length();

        if d < tuning.repel_radius {
            let force = (tuning.repel_radius - d) / tuning.repel_falloff;
            p.vel += away.normalize_or_zero() * force;
        }

        if let Some(cap) = tuning.max_speed {
            p.vel = p.vel.clamp_length_max(cap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn integration_moves_particles_by_their_velocity() {
        let mut particles = [Particle {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::new(0.5, -0.25),
        }];

        integration_step(&mut particles, Vec2::new(100.0, 100.0));

        assert_eq!(particles[0].pos, Vec2::new(10.5, 19.75));
        assert_eq!(particles[0].vel, Vec2::new(0.5, -0.25));
    }

    #[test]
    fn crossing_an_edge_inverts_the_violated_axis_only() {
        // Heading out of the right edge and moving down at the same time.
        let mut particles = [Particle {
            pos: Vec2::new(99.5, 50.0),
            vel: Vec2::new(1.0, 0.5),
        }];

        integration_step(&mut particles, Vec2::new(100.0, 100.0));

        // The particle is allowed past the edge for this tick...
        assert_eq!(particles[0].pos, Vec2::new(100.5, 50.5));
        // ...but vx has flipped while vy is untouched.
        assert_eq!(particles[0].vel, Vec2::new(-1.0, 0.5));
    }

    #[test]
    fn crossing_the_top_edge_inverts_vy() {
        let mut particles = [Particle {
            pos: Vec2::new(50.0, 0.5),
            vel: Vec2::new(0.0, -1.0),
        }];

        integration_step(&mut particles, Vec2::new(100.0, 100.0));

        assert_eq!(particles[0].pos, Vec2::new(50.0, -0.5));
        assert_eq!(particles[0].vel, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn repulsion_is_zero_at_the_radius_boundary() {
        let tuning = FieldTuning::default();

        // Exactly at distance 80: strictly outside the `d < 80` condition.
        let mut particles = [still_particle(80.0, 0.0)];
        repulsion_step(&mut particles, Vec2::ZERO, &tuning);

        assert_eq!(particles[0].vel, Vec2::ZERO);
    }

    #[test]
    fn repulsion_at_distance_forty_has_the_expected_magnitude() {
        let tuning = FieldTuning::default();

        let mut particles = [still_particle(40.0, 0.0)];
        repulsion_step(&mut particles, Vec2::ZERO, &tuning);

        // force = (80 - 40) / 50 = 0.8, directed away from the cursor.
        assert!((particles[0].vel.x - 0.8).abs() < 1e-6);
        assert_eq!(particles[0].vel.y, 0.0);
    }

    #[test]
    fn repulsion_pushes_along_the_cursor_to_particle_direction() {
        let tuning = FieldTuning::default();

        let mut particles = [still_particle(10.0, 10.0)];
        repulsion_step(&mut particles, Vec2::new(10.0, 40.0), &tuning);

        // The particle sits straight above the cursor, so the push is
        // straight up (negative y in screen coordinates).
        assert_eq!(particles[0].vel.x, 0.0);
        assert!(particles[0].vel.y < 0.0);
    }

    #[test]
    fn repulsion_accumulates_over_consecutive_ticks() {
        let tuning = FieldTuning::default();
        let mut particles = [still_particle(40.0, 0.0)];

        repulsion_step(&mut particles, Vec2::ZERO, &tuning);
        let after_one = particles[0].vel.x;
        repulsion_step(&mut particles, Vec2::ZERO, &tuning);

        // A second tick inside the radius keeps adding energy.
        assert!(particles[0].vel.x > after_one);
    }

    #[test]
    fn max_speed_caps_the_velocity_magnitude() {
        let tuning = FieldTuning {
            max_speed: Some(1.0),
            ..FieldTuning::default()
        };

        let mut particles = [still_particle(1.0, 0.0)];
        for _ in 0..100 {
            repulsion_step(&mut particles, Vec2::ZERO, &tuning);
        }

        assert!(particles[0].vel.length() <= 1.0 + 1e-6);
    }
}
