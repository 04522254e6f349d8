//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! host-agnostic:
//! - Time arrives as per-frame elapsed seconds from the host
//! - Seeded RNG only
//! - No rendering, input polling, or asset dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod weapon;

pub use collision::{circles_overlap, resolve_projectiles, resolve_ship};
pub use spawn::{random_shape, spawn_asteroid, Spawner};
pub use state::{
    Asteroid, AsteroidShape, Projectile, ShapeMode, Ship, SizeClass, WeaponKind, WorldState,
    ASTEROID_CAPACITY, PROJECTILE_CAPACITY,
};
pub use tick::{tick, TickInput};
pub use weapon::WeaponTimer;
