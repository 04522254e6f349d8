//! Asteroid Field - entity simulation core for an asteroids-style arcade game
//!
//! Core modules:
//! - `sim`: spawning, motion, weapon timing, collision resolution
//! - `tuning`: data-driven game balance
//!
//! Rendering, input polling, and asset loading are the host's problem:
//! the host folds key state into a [`sim::TickInput`] and calls
//! [`sim::tick`] once per frame with the elapsed seconds.

pub mod sim;
pub mod tuning;

pub use sim::{tick, TickInput, WorldState};
pub use tuning::Tuning;

use glam::Vec2;

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (std::f32::consts::PI / 180.0)
}

/// Unit vector along `angle` (radians).
#[inline]
pub fn vec_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
