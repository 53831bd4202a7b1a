//! Disc Golf entry point
//!
//! Headless runner: generates a course from a seed, lets the autoplayer
//! play it at the fixed timestep and prints the final scorecard as JSON.
//!
//! Usage: `disc-golf [seed] [max_ticks]`

use disc_golf::consts::SIM_DT;
use disc_golf::sim::{GamePhase, GameState, TickInput, tick};
use disc_golf::{Scorecard, Settings};

const DEFAULT_SEED: u64 = 12345;
/// One simulated hour at 60 Hz
const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 60;

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {} {:?}", name, raw);
            default
        }),
        None => default,
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", DEFAULT_SEED);
    let max_ticks = parse_arg(args.next(), "tick limit", DEFAULT_MAX_TICKS);

    log::info!("Disc Golf (headless) starting with seed {}", seed);

    let settings = Settings::load();
    let mut state = GameState::new(seed, settings);
    let input = TickInput {
        autoplay: true,
        ..Default::default()
    };

    while state.phase == GamePhase::Playing && !state.quit_requested && state.time_ticks < max_ticks {
        tick(&mut state, &input, SIM_DT);
    }

    if state.phase == GamePhase::Playing {
        log::warn!("Stopped after {} ticks before finishing the course", state.time_ticks);
    }

    let card = Scorecard::from_course(&state.course);
    match serde_json::to_string_pretty(&card) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize scorecard: {}", e);
            std::process::exit(1);
        }
    }
}
