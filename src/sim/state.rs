//! Entity types and world state
//!
//! Everything the simulation mutates lives here. Radius, hit points and
//! contact damage are derived from the size class on demand and never
//! stored alongside it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::Spawner;
use super::weapon::WeaponTimer;
use crate::tuning::{ShipTuning, Tuning};
use crate::vec_from_angle;

/// Expected upper bound on live asteroids (capacity reservation only,
/// the gameplay cap lives in [`crate::tuning::SpawnTuning`]).
pub const ASTEROID_CAPACITY: usize = 1_000;
/// Expected upper bound on live projectiles.
pub const PROJECTILE_CAPACITY: usize = 10_000;

/// Asteroid size class. The ordinal drives every derived attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Giga,
}

impl SizeClass {
    /// Ordinal scale factor (1/2/4/10).
    pub fn ordinal(self) -> i32 {
        match self {
            SizeClass::Small => 1,
            SizeClass::Medium => 2,
            SizeClass::Large => 4,
            SizeClass::Giga => 10,
        }
    }

    /// Collision radius in pixels.
    pub fn radius(self) -> f32 {
        16.0 * self.ordinal() as f32
    }

    /// Hit points at spawn.
    pub fn max_hp(self) -> i32 {
        match self {
            SizeClass::Small => 25,
            SizeClass::Medium => 100,
            SizeClass::Large => 300,
            SizeClass::Giga => 1_000,
        }
    }
}

/// Concrete asteroid shape variant. Shape fixes the size class and the
/// per-variant base damage; side count only matters to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidShape {
    Triangle,
    Square,
    Pentagon,
    Giga,
}

impl AsteroidShape {
    pub fn size_class(self) -> SizeClass {
        match self {
            AsteroidShape::Triangle => SizeClass::Small,
            AsteroidShape::Square => SizeClass::Medium,
            AsteroidShape::Pentagon => SizeClass::Large,
            AsteroidShape::Giga => SizeClass::Giga,
        }
    }

    /// Damage per ordinal unit on ship contact.
    pub fn base_damage(self) -> i32 {
        match self {
            AsteroidShape::Triangle => 5,
            AsteroidShape::Square => 10,
            AsteroidShape::Pentagon => 15,
            AsteroidShape::Giga => 10,
        }
    }

    /// Polygon side count for the host's draw call.
    pub fn sides(self) -> u32 {
        match self {
            AsteroidShape::Triangle => 3,
            AsteroidShape::Square => 4,
            AsteroidShape::Pentagon => 5,
            AsteroidShape::Giga => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AsteroidShape::Triangle => "TRIANGLE",
            AsteroidShape::Square => "SQUARE",
            AsteroidShape::Pentagon => "PENTAGON",
            AsteroidShape::Giga => "GIGA",
        }
    }
}

/// Spawn shape selection: a fixed variant or the weighted random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeMode {
    Fixed(AsteroidShape),
    #[default]
    Random,
}

impl ShapeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeMode::Fixed(shape) => shape.as_str(),
            ShapeMode::Random => "RANDOM",
        }
    }
}

/// Weapon kinds, cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Beam,
    Slug,
    StaticHazard,
}

impl WeaponKind {
    /// Damage applied to the first asteroid hit.
    pub fn damage(self) -> i32 {
        match self {
            WeaponKind::Beam => 17,
            WeaponKind::Slug => 25,
            WeaponKind::StaticHazard => 150,
        }
    }

    /// Collision radius in pixels.
    pub fn radius(self) -> f32 {
        match self {
            WeaponKind::Beam => 2.0,
            WeaponKind::Slug => 5.0,
            WeaponKind::StaticHazard => 10.0,
        }
    }

    /// Seconds before the projectile expires on its own.
    pub fn lifetime(self) -> f32 {
        10.0
    }

    /// Next kind in the cycle order.
    pub fn next(self) -> Self {
        match self {
            WeaponKind::Beam => WeaponKind::Slug,
            WeaponKind::Slug => WeaponKind::StaticHazard,
            WeaponKind::StaticHazard => WeaponKind::Beam,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponKind::Beam => "BEAM",
            WeaponKind::Slug => "SLUG",
            WeaponKind::StaticHazard => "HAZARD",
        }
    }
}

/// A destructible obstacle drifting across the screen.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Visual rotation in degrees.
    pub rotation: f32,
    pub vel: Vec2,
    /// Degrees per second.
    pub rotation_speed: f32,
    pub shape: AsteroidShape,
    pub hp: i32,
}

impl Asteroid {
    pub fn size_class(&self) -> SizeClass {
        self.shape.size_class()
    }

    pub fn radius(&self) -> f32 {
        self.size_class().radius()
    }

    /// Damage dealt to the ship on contact.
    pub fn contact_damage(&self) -> i32 {
        self.shape.base_damage() * self.size_class().ordinal()
    }

    pub fn take_damage(&mut self, dmg: i32) {
        self.hp -= dmg;
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.rotation += self.rotation_speed * dt;
    }

    /// True while inside the screen rectangle extended by the asteroid's
    /// own radius on every side.
    pub fn in_bounds(&self, screen_w: f32, screen_h: f32) -> bool {
        let r = self.radius();
        self.pos.x >= -r
            && self.pos.x <= screen_w + r
            && self.pos.y >= -r
            && self.pos.y <= screen_h + r
    }
}

/// A transient weapon effect.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    /// Heading in radians, kept for the renderer (beams draw oriented).
    pub rotation: f32,
    pub vel: Vec2,
    pub kind: WeaponKind,
    pub damage: i32,
    /// Remaining lifetime in seconds, strictly decreasing.
    pub life: f32,
}

impl Projectile {
    /// Build a projectile for `kind` launched from `pos` along `rotation`
    /// (radians) at `speed`. Static hazards ignore the speed and sit where
    /// they were dropped.
    pub fn launch(kind: WeaponKind, pos: Vec2, speed: f32, rotation: f32) -> Self {
        let vel = match kind {
            WeaponKind::StaticHazard => Vec2::ZERO,
            _ => vec_from_angle(rotation) * speed,
        };
        Self {
            pos,
            rotation,
            vel,
            kind,
            damage: kind.damage(),
            life: kind.lifetime(),
        }
    }

    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.life -= dt;
    }

    pub fn expired(&self) -> bool {
        self.life <= 0.0
    }

    /// Projectiles vanish exactly at the screen edges, no radius margin.
    pub fn in_bounds(&self, screen_w: f32, screen_h: f32) -> bool {
        self.pos.x >= 0.0 && self.pos.x <= screen_w && self.pos.y >= 0.0 && self.pos.y <= screen_h
    }
}

/// The player ship. Once `alive` goes false it never comes back; a
/// restart builds a fresh instance.
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in degrees; the nose points along `rotation - 90`.
    pub rotation: f32,
    pub hp: i32,
    pub alive: bool,
    pub move_speed: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    pub radius: f32,
    fire_rate_beam: f32,
    fire_rate_slug: f32,
    fire_rate_hazard: f32,
    spacing_beam: f32,
    spacing_slug: f32,
}

impl Ship {
    /// Spawn a ship centered on the screen.
    pub fn new(screen_w: f32, screen_h: f32, tuning: &ShipTuning) -> Self {
        Self {
            pos: Vec2::new(screen_w * 0.5, screen_h * 0.5),
            rotation: 0.0,
            hp: tuning.hp,
            alive: true,
            move_speed: tuning.move_speed,
            rotation_speed: tuning.rotation_speed,
            radius: tuning.radius,
            fire_rate_beam: tuning.fire_rate_beam,
            fire_rate_slug: tuning.fire_rate_slug,
            fire_rate_hazard: tuning.fire_rate_hazard,
            spacing_beam: tuning.spacing_beam,
            spacing_slug: tuning.spacing_slug,
        }
    }

    /// Shots per second for `kind`.
    pub fn fire_rate(&self, kind: WeaponKind) -> f32 {
        match kind {
            WeaponKind::Beam => self.fire_rate_beam,
            WeaponKind::Slug => self.fire_rate_slug,
            WeaponKind::StaticHazard => self.fire_rate_hazard,
        }
    }

    /// Target pixel gap between consecutive shots of `kind`.
    pub fn spacing(&self, kind: WeaponKind) -> f32 {
        match kind {
            WeaponKind::Beam => self.spacing_beam,
            _ => self.spacing_slug,
        }
    }

    /// A dead ship takes no further damage; the alive flag flips at most
    /// once per instance.
    pub fn take_damage(&mut self, dmg: i32) {
        if !self.alive {
            return;
        }
        self.hp -= dmg;
        if self.hp <= 0 {
            self.alive = false;
            log::info!("ship destroyed");
        }
    }
}

/// Complete simulation state, exclusively owned by the host loop.
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Run seed, kept for diagnostics.
    pub seed: u64,
    pub rng: Pcg32,
    pub screen_w: f32,
    pub screen_h: f32,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub projectiles: Vec<Projectile>,
    pub spawner: Spawner,
    pub weapon: WeaponTimer,
    pub shape_mode: ShapeMode,
    pub tuning: Tuning,
}

impl WorldState {
    pub fn new(seed: u64, screen_w: f32, screen_h: f32, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = Spawner::new(&mut rng, &tuning.spawn);
        Self {
            seed,
            rng,
            screen_w,
            screen_h,
            ship: Ship::new(screen_w, screen_h, &tuning.ship),
            asteroids: Vec::with_capacity(ASTEROID_CAPACITY),
            projectiles: Vec::with_capacity(PROJECTILE_CAPACITY),
            spawner,
            weapon: WeaponTimer::default(),
            shape_mode: ShapeMode::Random,
            tuning,
        }
    }

    /// Read-only view for the renderer.
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Read-only view for the renderer.
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Currently selected weapon, for HUD text.
    pub fn current_weapon(&self) -> WeaponKind {
        self.weapon.current
    }

    /// Currently selected spawn shape mode, for HUD text.
    pub fn shape_mode(&self) -> ShapeMode {
        self.shape_mode
    }

    /// Discard both collections and construct a fresh ship in one step.
    /// Weapon selection and shape mode survive; the RNG is not reseeded.
    pub fn restart(&mut self) {
        self.ship = Ship::new(self.screen_w, self.screen_h, &self.tuning.ship);
        self.asteroids.clear();
        self.projectiles.clear();
        self.spawner.reset(&mut self.rng, &self.tuning.spawn);
        log::info!("session restarted (seed {})", self.seed);
    }
}
