//! Scroll Platformer entry point
//!
//! Headless driver: runs the simulation at a fixed 60 Hz with a simple
//! autopilot standing in for keyboard input, and logs what happens.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use scroll_platformer::consts::*;
use scroll_platformer::sim::{Command, Control, GameEvent, GamePhase, Intent, Session};
use scroll_platformer::{Settings, SimError};

/// Headless 60 Hz run of the platformer with a demo autopilot
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file (defaults to the built-in levels)
    #[arg(value_name = "SETTINGS")]
    settings: Option<PathBuf>,
    /// Overrides the scatter seed from the settings file
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Stop after this many ticks if the run has not finished
    #[arg(
        long,
        value_name = "TICKS",
        default_value_t = 60 * 60 * 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    ticks: u64,
    /// Sleep between ticks to run at wall-clock speed
    #[arg(long)]
    realtime: bool,
}

/// Demo autopilot: walk right, hop regularly, back off briefly when stuck
fn autopilot(session: &Session, last_x: &mut i32, stuck_ticks: &mut u32) -> Vec<Intent> {
    let player = session.player();
    let x = player.rect.x - session.current_level().world_shift;
    let mut intents = Vec::new();

    if x == *last_x {
        *stuck_ticks += 1;
    } else {
        *stuck_ticks = 0;
    }
    *last_x = x;

    if *stuck_ticks > 90 {
        intents.push(Intent::Left);
        *stuck_ticks = 0;
    } else if player.change_x() <= 0.0 && session.time_ticks() % 30 == 0 {
        intents.push(Intent::Right);
    }
    if *stuck_ticks > 2 || session.time_ticks() % 45 == 0 {
        intents.push(Intent::Jump);
    }
    intents
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::CoinCollected { count, score } => {
            log::info!("+{} coin(s), score {}", count, score)
        }
        GameEvent::HazardHit { kind, life } => log::info!("Ouch: {:?}, life {}", kind, life),
        GameEvent::LevelAdvanced { index } => log::info!("Entering level {}", index + 1),
        GameEvent::Won => log::info!("You win!"),
        GameEvent::GameOver => log::info!("Game over"),
        GameEvent::Restarted => log::info!("Restarted"),
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }

    let mut session = Session::new(settings)?;
    let frame = Duration::from_secs_f32(SIM_DT);
    let (mut last_x, mut stuck_ticks) = (i32::MIN, 0);

    for _ in 0..args.ticks {
        let started = Instant::now();

        for intent in autopilot(&session, &mut last_x, &mut stuck_ticks) {
            session.apply_intent(intent);
        }
        session.tick();
        session.drain_events().into_iter().for_each(log_event);

        // The demo never restarts: a finished run quits
        if session.phase() != GamePhase::Playing
            && session.handle_command(Command::Quit)? == Control::Exit
        {
            break;
        }

        if args.realtime {
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    log::info!(
        "Finished after {} ticks: phase={:?}, level={}, score={}, life={}",
        session.time_ticks(),
        session.phase(),
        session.level_index() + 1,
        session.score(),
        session.life()
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Scroll Platformer (headless) starting...");

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is driven by the embedding page on the web
}
