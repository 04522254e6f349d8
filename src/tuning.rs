//! Data-driven game balance
//!
//! Built-in defaults carry the shipped balance; a host can override them from a
//! JSON file. Parse failures log a warning and fall back to defaults so a
//! bad tuning file never takes the game down.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ship balance, including the per-weapon fire rates and shot spacing
/// carried by the ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Hit points at spawn.
    pub hp: i32,
    /// Movement speed in pixels per second.
    pub move_speed: f32,
    /// Rotation speed in degrees per second.
    pub rotation_speed: f32,
    /// Collision radius in pixels (stands in for the sprite half-height).
    pub radius: f32,
    /// Shots per second, beam weapon.
    pub fire_rate_beam: f32,
    /// Shots per second, slug weapon.
    pub fire_rate_slug: f32,
    /// Shots per second, static hazard.
    pub fire_rate_hazard: f32,
    /// Target pixel gap between consecutive beam shots.
    pub spacing_beam: f32,
    /// Target pixel gap for slug and hazard shots.
    pub spacing_slug: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            hp: 100,
            move_speed: 250.0,
            rotation_speed: 70.0,
            radius: 24.0,
            fire_rate_beam: 18.0,
            fire_rate_slug: 12.0,
            fire_rate_hazard: 2.0,
            spacing_beam: 40.0,
            spacing_slug: 20.0,
        }
    }
}

/// Spawn policy balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Randomized spawn interval bounds in seconds.
    pub interval_min: f32,
    pub interval_max: f32,
    /// Hard population ceiling; spawn requests over it are dropped.
    pub max_asteroids: usize,
    /// Initial speed bounds in pixels per second.
    pub speed_min: f32,
    pub speed_max: f32,
    /// Rotation speed bounds in degrees per second.
    pub rotation_speed_min: f32,
    pub rotation_speed_max: f32,
    /// Aim jitter as a fraction of the smaller screen dimension.
    pub center_jitter: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval_min: 0.5,
            interval_max: 3.0,
            max_asteroids: 150,
            speed_min: 125.0,
            speed_max: 250.0,
            rotation_speed_min: 50.0,
            rotation_speed_max: 240.0,
            center_jitter: 0.1,
        }
    }
}

/// Complete tuning table owned by the world state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ship: ShipTuning,
    pub spawn: SpawnTuning,
}

impl Tuning {
    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("bad tuning file {}: {} (using defaults)", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
