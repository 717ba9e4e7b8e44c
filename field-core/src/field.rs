use crate::{config::FieldTuning, particle::Particle, steps, types::ParticleId};
use glam::Vec2;
use rand::Rng;

/// The particle field: a fixed set of drifting particles, the viewport
/// they bounce around in, and the last-known cursor position.
///
/// The field owns no clock. The caller drives it by invoking
/// [`ParticleField::tick`] once per frame and feeding in pointer and
/// resize events as they arrive; [`ParticleField::stop`] freezes it so a
/// host view can tear the loop down deterministically.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    cursor: Vec2,
    running: bool,
    tuning: FieldTuning,
}

impl ParticleField {
    /// Creates a field with `tuning.particle_count` randomly placed
    /// particles inside `bounds`. The cursor starts at the origin until
    /// the first pointer event arrives, and the field starts running.
    pub fn new(tuning: FieldTuning, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let particles = (0..tuning.particle_count)
            .map(|_| Particle::spawn(bounds, tuning.max_spawn_speed, rng))
            .collect();

        Self {
            particles,
            bounds,
            cursor: Vec2::ZERO,
            running: true,
            tuning,
        }
    }

    /// Advances the simulation by one step, if the field is running.
    ///
    /// A step is:
    /// 1. [`steps::integration_step`] — move and bounce every particle.
    /// 2. [`steps::repulsion_step`] — apply the cursor impulse.
    ///
    /// Integration strictly precedes repulsion, so the impulse always
    /// acts on post-move positions.
    pub fn tick(&mut self) {
        if self.running {
            self.step();
        }
    }

    /// Advances the simulation by one step regardless of the running
    /// flag. Used for single-stepping a paused field.
    pub fn step(&mut self) {
        steps::integration_step(&mut self.particles, self.bounds);
        steps::repulsion_step(&mut self.particles, self.cursor, &self.tuning);
    }

    /// Records the latest pointer position. No staleness tracking: the
    /// last value keeps repelling until the next event replaces it.
    pub fn set_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
    }

    /// Updates the viewport size.
    ///
    /// Existing particles are left exactly where they are; there is no
    /// re-clamping. Particles outside the new bounds are subject to the
    /// same bounce rule as everything else on later ticks.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Freezes the field; subsequent [`ParticleField::tick`] calls do
    /// nothing until [`ParticleField::start`].
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replaces all particles with a freshly sampled set, keeping the
    /// tuning, bounds and cursor.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.particles = (0..self.tuning.particle_count)
            .map(|_| Particle::spawn(self.bounds, self.tuning.max_spawn_speed, rng))
            .collect();
    }

    /// Returns every unordered particle pair closer than the link
    /// distance, as index pairs with `i < j`.
    ///
    /// This is the O(N²) scan over all pairs (1770 at the default count
    /// of 60). The comparison is strict, so a pair at exactly the link
    /// distance is not connected.
    pub fn links(&self) -> impl Iterator<Item = (ParticleId, ParticleId)> + '_ {
        let max_d2 = self.tuning.link_distance * self.tuning.link_distance;
        let particles = &self.particles;

        (0..particles.len()).flat_map(move |i| {
            ((i + 1)..particles.len()).filter_map(move |j| {
                let d2 = (particles[i].pos - particles[j].pos).length_squared();
                (d2 < max_d2).then_some((i, j))
            })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn tuning(&self) -> &FieldTuning {
        &self.tuning
    }
}
