//! Weapon fire-rate timing
//!
//! Converts held-fire time into projectile emissions at a weapon-specific
//! cadence. The accumulator never drops held time: a large `dt` emits every
//! shot it warrants in one tick (catch-up), and releasing the trigger
//! clamps the timer phase instead of zeroing it, so mashing the fire key
//! cannot produce an instant volley.

use super::state::{Projectile, Ship, WeaponKind};
use crate::{deg_to_rad, vec_from_angle};

/// Shot accumulator plus the currently selected weapon. Survives weapon
/// cycling and session restarts untouched.
#[derive(Debug, Clone, Default)]
pub struct WeaponTimer {
    pub shot_timer: f32,
    pub current: WeaponKind,
}

impl WeaponTimer {
    /// Switch to the next weapon kind. Deliberately leaves the shot timer
    /// alone so switching mid-burst keeps the firing phase.
    pub fn cycle(&mut self) {
        self.current = self.current.next();
    }

    /// Advance the accumulator by `dt` and emit any shots that are due.
    /// Firing requires a living ship; a held trigger on a dead ship takes
    /// the release path like an open trigger.
    pub fn tick(&mut self, dt: f32, firing: bool, ship: &Ship, projectiles: &mut Vec<Projectile>) {
        let interval = 1.0 / ship.fire_rate(self.current);

        if firing && ship.alive {
            self.shot_timer += dt;
            // Spacing is a target pixel gap between successive shots;
            // speed = gap / interval = gap * rate.
            let speed = ship.spacing(self.current) * ship.fire_rate(self.current);

            while self.shot_timer >= interval {
                let rot = deg_to_rad(ship.rotation - 90.0);
                let nose = ship.pos + vec_from_angle(rot) * ship.radius;
                projectiles.push(Projectile::launch(self.current, nose, speed, rot));
                self.shot_timer -= interval;
            }
        } else if self.shot_timer > interval {
            // Keep the sub-interval phase, discard whole intervals.
            self.shot_timer %= interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::ShipTuning;
    use proptest::prelude::*;

    fn test_ship() -> Ship {
        Ship::new(800.0, 600.0, &ShipTuning::default())
    }

    #[test]
    fn test_held_fire_emits_floor_of_rate_times_time() {
        let ship = test_ship();
        let mut weapon = WeaponTimer::default();
        let mut projectiles = Vec::new();

        // Beam at 18 shots/sec held for 1 second in one frame.
        weapon.tick(1.0, true, &ship, &mut projectiles);
        assert_eq!(projectiles.len(), 18);
    }

    #[test]
    fn test_catch_up_over_many_small_frames() {
        let ship = test_ship();
        let mut weapon = WeaponTimer::default();
        let mut projectiles = Vec::new();

        // Same 1 second, delivered as 1000 frames of 1ms.
        for _ in 0..1000 {
            weapon.tick(0.001, true, &ship, &mut projectiles);
        }
        // Allow one shot of slack for float accumulation.
        assert!(
            (17..=18).contains(&projectiles.len()),
            "got {} shots",
            projectiles.len()
        );
    }

    #[test]
    fn test_release_clamps_phase_without_zeroing() {
        let ship = test_ship();
        let rate = ship.fire_rate(WeaponKind::Beam);
        let interval = 1.0 / rate;
        let mut weapon = WeaponTimer::default();
        let mut projectiles = Vec::new();

        // Accumulate 2.5 intervals without firing, then release.
        weapon.shot_timer = interval * 2.5;
        weapon.tick(0.0, false, &ship, &mut projectiles);
        assert!(projectiles.is_empty());
        assert!((weapon.shot_timer - interval * 0.5).abs() < 1e-5);

        // Re-trigger with a tiny dt: at most one shot, never a volley.
        weapon.tick(interval * 0.6, true, &ship, &mut projectiles);
        assert_eq!(projectiles.len(), 1);
    }

    #[test]
    fn test_dead_ship_cannot_fire() {
        let mut ship = test_ship();
        ship.hp = 1;
        ship.take_damage(5);
        assert!(!ship.alive);

        let mut weapon = WeaponTimer::default();
        let mut projectiles = Vec::new();
        weapon.tick(5.0, true, &ship, &mut projectiles);
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_cycle_keeps_shot_timer() {
        let mut weapon = WeaponTimer::default();
        weapon.shot_timer = 0.04;
        weapon.cycle();
        assert_eq!(weapon.current, WeaponKind::Slug);
        assert_eq!(weapon.shot_timer, 0.04);
    }

    #[test]
    fn test_projectiles_launch_from_ship_nose() {
        let mut ship = test_ship();
        ship.rotation = 90.0; // Nose points along +x.
        let mut weapon = WeaponTimer::default();
        let mut projectiles = Vec::new();

        weapon.tick(1.0 / ship.fire_rate(WeaponKind::Beam), true, &ship, &mut projectiles);
        assert_eq!(projectiles.len(), 1);
        let p = &projectiles[0];
        assert!((p.pos.x - (ship.pos.x + ship.radius)).abs() < 1e-3);
        assert!((p.pos.y - ship.pos.y).abs() < 1e-3);
        // Speed derived from spacing * rate.
        let expected = ship.spacing(WeaponKind::Beam) * ship.fire_rate(WeaponKind::Beam);
        assert!((p.vel.length() - expected).abs() < 1e-2);
    }

    proptest! {
        /// For any partition of a held-fire duration into frames, the
        /// number of emitted projectiles is floor(T * rate) give or take
        /// one shot of float slack.
        #[test]
        fn prop_accumulator_invariant_under_frame_partition(
            frames in prop::collection::vec(0.0001f32..0.1, 1..200)
        ) {
            let ship = test_ship();
            let rate = ship.fire_rate(WeaponKind::Beam);
            let mut weapon = WeaponTimer::default();
            let mut projectiles = Vec::new();

            let total: f32 = frames.iter().sum();
            for dt in &frames {
                weapon.tick(*dt, true, &ship, &mut projectiles);
            }

            let expected = (total as f64 * rate as f64).floor() as isize;
            let got = projectiles.len() as isize;
            prop_assert!(
                (got - expected).abs() <= 1,
                "expected ~{} shots for T={}, got {}",
                expected, total, got
            );
        }
    }
}
