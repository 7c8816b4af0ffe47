//! Headless native driver
//!
//! Builds a world and walks it through a scripted input sequence, logging
//! positions along the way. Usage:
//!
//! ```text
//! wallwalk [seed] [tuning.json]
//! ```

use wallwalk::Tuning;
use wallwalk::sim::{InputState, World, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::load_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let mut world = World::new(seed, tuning);

    // Walk right, then sprint diagonally up-right into the wall field.
    let walk = InputState {
        right: true,
        ..Default::default()
    };
    let sprint = InputState {
        right: true,
        up: true,
        sprint: true,
        ..Default::default()
    };

    for frame in 0..240u32 {
        let input = if frame < 120 { &walk } else { &sprint };
        tick(&mut world, input);
        if (frame + 1) % 30 == 0 {
            log::info!(
                "tick {:3}: player at ({:+.3}, {:+.3})",
                world.time_ticks,
                world.player.pos.x,
                world.player.pos.y
            );
        }
    }

    println!(
        "seed {seed}: {} walls (of {} rolled), player ended at ({:+.3}, {:+.3})",
        world.walls.len(),
        world.tuning.wall_count,
        world.player.pos.x,
        world.player.pos.y
    );
}
