//! Headless demo driver
//!
//! Runs the simulation for a fixed number of scripted frames and prints
//! the HUD line the host would render. Useful for eyeballing balance and
//! for profiling the collision sweep without a window.

use std::path::Path;

use asteroid_field::sim::{tick, TickInput, WorldState};
use asteroid_field::Tuning;

const SCREEN_W: f32 = 1920.0;
const SCREEN_H: f32 = 1080.0;
const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 60 * 60; // one simulated minute

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xA57E_401D);
    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let mut state = WorldState::new(seed, SCREEN_W, SCREEN_H, tuning);

    log::info!("running {} frames at {}x{} (seed {})", FRAMES, SCREEN_W, SCREEN_H, seed);

    for frame in 0..FRAMES {
        // Scripted pilot: hold fire, sweep the aim, cycle weapons every
        // ten seconds, restart on death.
        let input = TickInput {
            fire: true,
            rotate_cw: (frame / 120) % 2 == 0,
            rotate_ccw: (frame / 120) % 2 == 1,
            cycle_weapon: frame % 600 == 599,
            restart: !state.ship().alive,
            ..Default::default()
        };
        tick(&mut state, &input, DT);

        if frame % 60 == 0 {
            let ship = state.ship();
            println!(
                "t={:>3}s  HP: {:<4} Weapon: {:<6} Mode: {:<8} asteroids={:<3} projectiles={}",
                frame / 60,
                ship.hp,
                state.current_weapon().as_str(),
                state.shape_mode().as_str(),
                state.asteroids().len(),
                state.projectiles().len(),
            );
        }
    }
}
