//! Island Bounce headless runner
//!
//! Drives a session at the nominal tick rate with the paddle on autopilot and
//! logs what a renderer would draw. Usage:
//!
//! ```text
//! island-bounce [config.json] [max_ticks]
//! ```

use std::time::{Duration, Instant};

use island_bounce::consts::*;
use island_bounce::sim::{GameEvent, SeededDirections};
use island_bounce::{Session, SimConfig, SimError, SimResult};

/// Ticks to run when no limit is given (one minute of play)
const DEFAULT_MAX_TICKS: u64 = 60 * TICK_RATE_HZ as u64;

fn main() {
    env_logger::init();
    log::info!("Island Bounce (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> SimResult<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let max_ticks = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .map_err(|e| SimError::InvalidConfig(format!("max_ticks: {e}")))?,
        None => DEFAULT_MAX_TICKS,
    };

    let mut directions = SeededDirections::new(config.seed);
    let mut session = Session::new(&config, &mut directions)?;
    session.set_autopilot(true);
    session.start();

    let period = Duration::from_secs_f32(TICK_MILLIS / 1000.0);
    let mut next_wake = Instant::now();

    for _ in 0..max_ticks {
        let snapshot = session.on_timer();
        for event in &snapshot.events {
            match event {
                GameEvent::IslandHit { score } => log::info!("Island hit! score={score}"),
                GameEvent::GameOver { score } => log::info!("Game over, final score {score}"),
                _ => log::debug!("{event:?}"),
            }
        }
        if snapshot.game_over {
            break;
        }

        // Best effort: a late wake-up just runs fewer ticks
        next_wake += period;
        let now = Instant::now();
        if next_wake > now {
            std::thread::sleep(next_wake - now);
        } else {
            next_wake = now;
        }
    }
    session.stop();

    let summary = serde_json::to_string_pretty(session.snapshot())?;
    println!("{summary}");
    if let Some(best) = session.high_scores().top_score() {
        println!("Best score: {best}");
    }
    Ok(())
}
