//! Collision detection and resolution
//!
//! Two independent O(n·m) sweeps per frame over the entity collections.
//! Removals are deferred past each scan so iteration never walks a
//! mutated collection.

use glam::Vec2;

use super::state::{Asteroid, Projectile, Ship};

/// Center-distance circle overlap test.
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Projectile × asteroid pass. Each projectile hits the first overlapping
/// asteroid in iteration order and is consumed; the asteroid takes the
/// projectile's damage and is flagged for removal at hp <= 0. Iteration
/// order deciding which of several overlapping asteroids is hit is
/// accepted nondeterminism.
pub fn resolve_projectiles(projectiles: &mut Vec<Projectile>, asteroids: &mut Vec<Asteroid>) {
    let mut asteroid_dead = vec![false; asteroids.len()];

    projectiles.retain(|p| {
        for (i, a) in asteroids.iter_mut().enumerate() {
            if asteroid_dead[i] {
                continue;
            }
            if circles_overlap(p.pos, p.radius(), a.pos, a.radius()) {
                a.take_damage(p.damage);
                if a.is_dead() {
                    asteroid_dead[i] = true;
                }
                // Consumed on first contact, never pierces.
                return false;
            }
        }
        true
    });

    let mut i = 0;
    asteroids.retain(|_| {
        let keep = !asteroid_dead[i];
        i += 1;
        keep
    });
}

/// Ship × asteroid pass. A living ship overlapping an asteroid takes its
/// contact damage; the asteroid is destroyed on contact regardless of the
/// ship's resulting HP. A dead ship collides with nothing.
pub fn resolve_ship(ship: &mut Ship, asteroids: &mut Vec<Asteroid>) {
    asteroids.retain(|a| {
        if ship.alive && circles_overlap(ship.pos, ship.radius, a.pos, a.radius()) {
            ship.take_damage(a.contact_damage());
            return false;
        }
        true
    });
}
