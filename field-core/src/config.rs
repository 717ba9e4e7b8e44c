use serde::{Deserialize, Serialize};

/// Tuning parameters for the particle field.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    pub particle_count: usize,
    pub particle_radius: f32,
    pub max_spawn_speed: f32,
    pub repel_radius: f32,
    pub repel_falloff: f32,
    pub link_distance: f32,
    /// Optional cap on velocity magnitude. `None` keeps the historical
    /// behavior where sustained cursor proximity accelerates a particle
    /// without bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<f32>,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            particle_count: 60,
            particle_radius: 2.0,
            max_spawn_speed: 0.15,
            repel_radius: 80.0,
            repel_falloff: 50.0,
            link_distance: 120.0,
            max_speed: None,
        }
    }
}

/// Smoothing factors for the lagged cursor dot and its halo.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailTuning {
    pub cursor_smoothing: f32,
    pub halo_smoothing: f32,
}

impl Default for TrailTuning {
    fn default() -> Self {
        Self {
            cursor_smoothing: 0.15,
            halo_smoothing: 0.08,
        }
    }
}

/// Visibility threshold for scroll-revealed sections.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTuning {
    /// Fraction of a section's area that must be on screen before it
    /// is revealed.
    pub visible_ratio: f32,
}

impl Default for RevealTuning {
    fn default() -> Self {
        Self { visible_ratio: 0.2 }
    }
}
