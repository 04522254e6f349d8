//! Asteroid spawning
//!
//! Edge placement, the weighted random shape draw, and the timer-driven
//! spawn policy. All randomness goes through the world's seeded RNG so
//! spawn behavior is reproducible in tests.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Asteroid, AsteroidShape, ShapeMode};
use crate::tuning::SpawnTuning;

/// Draw a shape with the fixed weighted-categorical distribution:
/// 45% triangle, 30% square, 20% pentagon, 5% giga.
pub fn random_shape(rng: &mut Pcg32) -> AsteroidShape {
    let roll = rng.random_range(0..100);
    if roll < 45 {
        AsteroidShape::Triangle
    } else if roll < 75 {
        AsteroidShape::Square
    } else if roll < 95 {
        AsteroidShape::Pentagon
    } else {
        AsteroidShape::Giga
    }
}

/// Build one asteroid just outside a random screen edge, aimed at a
/// jittered point near the screen center.
pub fn spawn_asteroid(
    rng: &mut Pcg32,
    screen_w: f32,
    screen_h: f32,
    mode: ShapeMode,
    tuning: &SpawnTuning,
) -> Asteroid {
    let shape = match mode {
        ShapeMode::Fixed(shape) => shape,
        ShapeMode::Random => random_shape(rng),
    };
    let radius = shape.size_class().radius();

    // One of the four edges, offset outward by the asteroid's own radius.
    let pos = match rng.random_range(0..4) {
        0 => Vec2::new(rng.random_range(0.0..screen_w), -radius),
        1 => Vec2::new(screen_w + radius, rng.random_range(0.0..screen_h)),
        2 => Vec2::new(rng.random_range(0.0..screen_w), screen_h + radius),
        _ => Vec2::new(-radius, rng.random_range(0.0..screen_h)),
    };

    // Aim at the center, perturbed by polar jitter of up to
    // `center_jitter` of the smaller screen dimension.
    let max_off = screen_w.min(screen_h) * tuning.center_jitter;
    let ang = rng.random_range(0.0..std::f32::consts::TAU);
    let rad = rng.random_range(0.0..max_off);
    let target = Vec2::new(
        screen_w * 0.5 + ang.cos() * rad,
        screen_h * 0.5 + ang.sin() * rad,
    );

    let dir = (target - pos).normalize_or_zero();
    let speed = rng.random_range(tuning.speed_min..tuning.speed_max);

    Asteroid {
        pos,
        rotation: rng.random_range(0.0..360.0),
        vel: dir * speed,
        rotation_speed: rng.random_range(tuning.rotation_speed_min..tuning.rotation_speed_max),
        shape,
        hp: shape.size_class().max_hp(),
    }
}

/// Timer-driven spawn policy: one asteroid per elapsed interval while the
/// population is under the cap.
#[derive(Debug, Clone)]
pub struct Spawner {
    timer: f32,
    interval: f32,
}

impl Spawner {
    pub fn new(rng: &mut Pcg32, tuning: &SpawnTuning) -> Self {
        Self {
            timer: 0.0,
            interval: rng.random_range(tuning.interval_min..tuning.interval_max),
        }
    }

    /// Back to a fresh timer and interval (session restart).
    pub fn reset(&mut self, rng: &mut Pcg32, tuning: &SpawnTuning) {
        self.timer = 0.0;
        self.interval = rng.random_range(tuning.interval_min..tuning.interval_max);
    }

    /// Accumulate `dt` and spawn at most one asteroid when the interval
    /// elapses. The population cap is a hard ceiling: a request over the
    /// cap is dropped and the timer keeps running, so the next frame with
    /// capacity spawns immediately (reset-only-on-success).
    pub fn tick(
        &mut self,
        dt: f32,
        rng: &mut Pcg32,
        asteroids: &mut Vec<Asteroid>,
        screen_w: f32,
        screen_h: f32,
        mode: ShapeMode,
        tuning: &SpawnTuning,
    ) {
        self.timer += dt;
        if self.timer < self.interval {
            return;
        }
        if asteroids.len() >= tuning.max_asteroids {
            log::debug!("spawn suppressed: {} asteroids at cap", asteroids.len());
            return;
        }
        asteroids.push(spawn_asteroid(rng, screen_w, screen_h, mode, tuning));
        self.timer = 0.0;
        self.interval = rng.random_range(tuning.interval_min..tuning.interval_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const W: f32 = 1920.0;
    const H: f32 = 1080.0;

    #[test]
    fn test_shape_distribution_converges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut counts = [0u32; 4];
        let draws = 100_000;
        for _ in 0..draws {
            let idx = match random_shape(&mut rng) {
                AsteroidShape::Triangle => 0,
                AsteroidShape::Square => 1,
                AsteroidShape::Pentagon => 2,
                AsteroidShape::Giga => 3,
            };
            counts[idx] += 1;
        }
        let pct = |c: u32| c as f32 / draws as f32 * 100.0;
        assert!((pct(counts[0]) - 45.0).abs() < 1.0, "triangle {}", pct(counts[0]));
        assert!((pct(counts[1]) - 30.0).abs() < 1.0, "square {}", pct(counts[1]));
        assert!((pct(counts[2]) - 20.0).abs() < 1.0, "pentagon {}", pct(counts[2]));
        assert!((pct(counts[3]) - 5.0).abs() < 1.0, "giga {}", pct(counts[3]));
    }

    #[test]
    fn test_spawn_outside_an_edge() {
        let mut rng = Pcg32::seed_from_u64(11);
        let tuning = SpawnTuning::default();
        for _ in 0..200 {
            let a = spawn_asteroid(&mut rng, W, H, ShapeMode::Random, &tuning);
            let r = a.radius();
            let on_edge = a.pos.y == -r
                || a.pos.y == H + r
                || a.pos.x == -r
                || a.pos.x == W + r;
            assert!(on_edge, "asteroid not on an edge: {:?}", a.pos);
        }
    }

    #[test]
    fn test_spawn_trajectory_crosses_center_region() {
        let mut rng = Pcg32::seed_from_u64(23);
        let tuning = SpawnTuning::default();
        let center = Vec2::new(W * 0.5, H * 0.5);
        let disk = W.min(H) * tuning.center_jitter;

        for _ in 0..500 {
            let a = spawn_asteroid(&mut rng, W, H, ShapeMode::Random, &tuning);
            // Distance from the center to the spawn ray.
            let dir = a.vel.normalize_or_zero();
            let to_center = center - a.pos;
            let along = to_center.dot(dir);
            assert!(along > 0.0, "velocity points away from center");
            let closest = a.pos + dir * along;
            // Small epsilon over the disk radius for float error.
            assert!(
                closest.distance(center) <= disk + 1e-3,
                "trajectory misses center disk by {}",
                closest.distance(center) - disk
            );
        }
    }

    #[test]
    fn test_spawn_speed_and_rotation_ranges() {
        let mut rng = Pcg32::seed_from_u64(31);
        let tuning = SpawnTuning::default();
        for _ in 0..200 {
            let a = spawn_asteroid(&mut rng, W, H, ShapeMode::Random, &tuning);
            let speed = a.vel.length();
            assert!(speed >= tuning.speed_min - 0.01 && speed < tuning.speed_max + 0.01);
            assert!((tuning.rotation_speed_min..tuning.rotation_speed_max).contains(&a.rotation_speed));
            assert!((0.0..360.0).contains(&a.rotation));
            assert_eq!(a.hp, a.size_class().max_hp());
        }
    }

    #[test]
    fn test_fixed_mode_spawns_requested_shape() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = SpawnTuning::default();
        let a = spawn_asteroid(&mut rng, W, H, ShapeMode::Fixed(AsteroidShape::Giga), &tuning);
        assert_eq!(a.shape, AsteroidShape::Giga);
        assert_eq!(a.hp, 1_000);
    }

    #[test]
    fn test_spawner_respects_population_cap() {
        let mut rng = Pcg32::seed_from_u64(99);
        let tuning = SpawnTuning::default();
        let mut spawner = Spawner::new(&mut rng, &tuning);
        let mut asteroids = Vec::new();

        // Fill to the cap with dummies.
        for _ in 0..tuning.max_asteroids {
            asteroids.push(spawn_asteroid(&mut rng, W, H, ShapeMode::Random, &tuning));
        }

        // A tick well past any interval must not spawn.
        spawner.tick(10.0, &mut rng, &mut asteroids, W, H, ShapeMode::Random, &tuning);
        assert_eq!(asteroids.len(), tuning.max_asteroids);

        // Timer was not reset — one slot freeing up spawns immediately,
        // even with a tiny dt.
        asteroids.pop();
        spawner.tick(0.001, &mut rng, &mut asteroids, W, H, ShapeMode::Random, &tuning);
        assert_eq!(asteroids.len(), tuning.max_asteroids);
    }

    #[test]
    fn test_spawner_interval_policy() {
        let mut rng = Pcg32::seed_from_u64(42);
        let tuning = SpawnTuning::default();
        let mut spawner = Spawner::new(&mut rng, &tuning);
        let mut asteroids = Vec::new();

        // Shorter than the minimum interval: nothing spawns.
        spawner.tick(0.25, &mut rng, &mut asteroids, W, H, ShapeMode::Random, &tuning);
        assert!(asteroids.is_empty());

        // Past the maximum interval: exactly one spawns per tick.
        spawner.tick(3.5, &mut rng, &mut asteroids, W, H, ShapeMode::Random, &tuning);
        assert_eq!(asteroids.len(), 1);
    }
}
