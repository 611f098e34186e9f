#[macro_use]
extern crate tracing;

use tumble::{
    logging::init_logging,
    input::KeyBindings,
    level::{Level, parse_level},
    roll::{Cube, RollOutcome},
    settings::{Settings, SETTINGS_FILE_NAME},
};
use std::{
    env::args,
    fs,
    time::Duration,
};


/// Desired duration of a demo step.
const TICK: Duration = Duration::from_millis(50);

const CLI_INTRO: &'static str = r#"Tumble, a cube that rolls across a grid.

It pivots about a bottom edge to roll, climbs over single blocks, and drops
down single ledges."#;

const CLI_HELP: &'static str = r#"
Examples:

    [this command]
    Roll the built-in move script through the built-in course.

    [this command] --level=course.txt --moves=dddw
    Roll a w/a/s/d move script through a level file.

Env var examples:
    RUST_LOG=tumble=trace
    Changes logging levels"#;

const BUILTIN_LEVEL: &'static str = "\
S12321
111.11
";

const BUILTIN_MOVES: &'static str = "dddddswaaaa";


fn main() {
    println!("{}", CLI_INTRO);
    init_logging();

    let args = args().collect::<Vec<_>>();
    if args.get(1).map(String::as_str) == Some("--help") {
        println!("{}", CLI_HELP);
    } else {
        run_demo_from_cli(&args);
    }
}

// parse CLI args and run the demo from that
fn run_demo_from_cli(args: &Vec<String>) {
    let level_text = args.iter()
        .filter_map(|arg| arg.strip_prefix("--level="))
        .next()
        .map(|path| fs::read_to_string(path).expect("unable to read level file"))
        .unwrap_or_else(|| BUILTIN_LEVEL.to_owned());
    let moves = args.iter()
        .filter_map(|arg| arg.strip_prefix("--moves="))
        .next()
        .unwrap_or(BUILTIN_MOVES);
    run_demo(&level_text, moves);
}

// roll the scripted moves through the level, or panic
fn run_demo(level_text: &str, moves: &str) {
    let settings = Settings::read(SETTINGS_FILE_NAME);
    debug!(?settings, "loaded settings");

    let Level { world, spawn } = parse_level(level_text).expect("error parsing level");
    let mut cube = Cube::new(
        spawn,
        settings.half_extents,
        settings.rotation_duration,
        settings.obstacle_mask,
    );
    let mut keys = KeyBindings::wasd();

    info!(?spawn, "starting demo");
    for key in moves.chars() {
        let direction = match keys.key_down(key) {
            Some(direction) => direction,
            None => {
                warn!(?key, "ignoring unbound key");
                keys.key_up(key);
                continue;
            }
        };
        match cube.try_roll(direction, &world) {
            RollOutcome::Started(kind) => {
                info!(?direction, ?kind, "rolling");
                while cube.advance(TICK.as_secs_f32()) {}
            }
            RollOutcome::Blocked => info!(?direction, "blocked"),
            RollOutcome::Busy => info!(?direction, "mid-roll, input dropped"),
        }
        keys.key_up(key);
    }
    info!(pos = ?cube.pos(), "demo finished");
}
