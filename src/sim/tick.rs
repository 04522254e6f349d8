//! Per-frame simulation driver
//!
//! The host calls [`tick`] once per frame with the elapsed wall-time and
//! the folded key state. Phase order within a frame: spawn, weapon, move,
//! resolve, purge. Each phase is also public on [`WorldState`] for hosts
//! that want to interleave their own work.

use super::collision::{resolve_projectiles, resolve_ship};
use super::state::{ShapeMode, WorldState};

/// Key state for one frame. Held keys are level-triggered booleans;
/// `cycle_weapon`, `select_shape` and `restart` are edge events the host
/// must clear after the tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub rotate_ccw: bool,
    pub rotate_cw: bool,
    /// Fire trigger held this frame.
    pub fire: bool,
    /// Cycle to the next weapon kind (edge).
    pub cycle_weapon: bool,
    /// Switch the spawn shape mode (edge).
    pub select_shape: Option<ShapeMode>,
    /// Restart after death (edge, ignored while the ship lives).
    pub restart: bool,
}

/// Advance the world by one frame.
pub fn tick(state: &mut WorldState, input: &TickInput, dt: f32) {
    debug_assert!(dt.is_finite() && dt >= 0.0, "dt must be finite and non-negative");

    if input.restart && !state.ship.alive {
        state.restart();
    }
    if let Some(mode) = input.select_shape {
        state.shape_mode = mode;
    }
    if input.cycle_weapon {
        state.weapon.cycle();
        log::debug!("weapon switched to {}", state.weapon.current.as_str());
    }

    state.spawn_tick(dt);
    state.weapon_tick(dt, input.fire);
    state.move_all(dt, input);
    state.resolve_collisions();
    state.purge_expired();
}

impl WorldState {
    /// Spawner phase: at most one new asteroid this frame.
    pub fn spawn_tick(&mut self, dt: f32) {
        self.spawner.tick(
            dt,
            &mut self.rng,
            &mut self.asteroids,
            self.screen_w,
            self.screen_h,
            self.shape_mode,
            &self.tuning.spawn,
        );
    }

    /// Weapon phase: fold held-fire time into projectile emissions.
    pub fn weapon_tick(&mut self, dt: f32, firing: bool) {
        self.weapon.tick(dt, firing, &self.ship, &mut self.projectiles);
    }

    /// Motion phase: the ship by input deltas, everything else by its own
    /// velocity. A dead ship ignores input and drifts down out of frame.
    pub fn move_all(&mut self, dt: f32, input: &TickInput) {
        let ship = &mut self.ship;
        if ship.alive {
            let step = ship.move_speed * dt;
            if input.up {
                ship.pos.y -= step;
            }
            if input.down {
                ship.pos.y += step;
            }
            if input.left {
                ship.pos.x -= step;
            }
            if input.right {
                ship.pos.x += step;
            }
            if input.rotate_ccw {
                ship.rotation -= ship.rotation_speed * dt;
            }
            if input.rotate_cw {
                ship.rotation += ship.rotation_speed * dt;
            }
        } else {
            ship.pos.y += ship.move_speed * dt;
        }

        for asteroid in &mut self.asteroids {
            asteroid.advance(dt);
        }
        for projectile in &mut self.projectiles {
            projectile.advance(dt);
        }
    }

    /// Collision phase: projectile×asteroid then ship×asteroid, both with
    /// removal deferred past the scan.
    pub fn resolve_collisions(&mut self) {
        resolve_projectiles(&mut self.projectiles, &mut self.asteroids);
        resolve_ship(&mut self.ship, &mut self.asteroids);
    }

    /// Purge phase: expired or escaped projectiles, escaped or dead
    /// asteroids.
    pub fn purge_expired(&mut self) {
        let (w, h) = (self.screen_w, self.screen_h);
        self.projectiles.retain(|p| !p.expired() && p.in_bounds(w, h));
        self.asteroids.retain(|a| !a.is_dead() && a.in_bounds(w, h));
    }
}
