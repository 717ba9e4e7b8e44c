use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    /// Samples a fresh particle: position uniform over `[0, w) × [0, h)`,
    /// velocity uniform over `[-max_speed, max_speed)` per axis.
    pub fn spawn(bounds: Vec2, max_speed: f32, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..bounds.x),
            rng.random_range(0.0..bounds.y),
        );
        let vel = Vec2::new(
            rng.random_range(-max_speed..max_speed),
            rng.random_range(-max_speed..max_speed),
        );

        Self { pos, vel }
    }
}
