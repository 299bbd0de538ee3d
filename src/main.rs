//! Flappy Dash headless demo driver
//!
//! The core exposes `tick()` as a plain step function; this binary owns the
//! repeat-and-cancel loop the way a rendering frontend would. A tiny
//! autopilot supplies impulses so the round lasts long enough to watch the
//! score and distance readouts move.
//!
//! Usage: `flappy-dash [classic|narrow|path/to/config.json] [seed]`

use std::{env, fs};

use flappy_dash::sim::{GameEvent, Session, SessionPhase, Viewport};
use flappy_dash::{GameConfig, Preset};

const VIEW_WIDTH: f32 = 1280.0;
const VIEW_HEIGHT: f32 = 800.0;
const MAX_TICKS_PER_ROUND: u64 = 20_000;
const ROUNDS: u64 = 2;

fn load_config(arg: Option<&str>) -> GameConfig {
    match arg {
        None => GameConfig::default(),
        Some(arg) => {
            if let Some(preset) = Preset::from_str(arg) {
                log::info!("using preset {}", preset.as_str());
                GameConfig::from_preset(preset)
            } else {
                match fs::read_to_string(arg) {
                    Ok(json) => GameConfig::from_json_or_default(&json),
                    Err(e) => {
                        log::warn!("could not read config {arg}: {e}, using defaults");
                        GameConfig::default()
                    }
                }
            }
        }
    }
}

/// Flap whenever the avatar is falling below the center of the next gap
fn autopilot(session: &Session) -> bool {
    let avatar = session.avatar();
    let target = session
        .visible_obstacles()
        .next()
        .map(|o| (o.gap_top + o.gap_bottom) / 2.0)
        .unwrap_or(session.viewport().height / 2.0);
    avatar.velocity > 0.0 && avatar.pos.y + avatar.size.y > target
}

fn drain(session: &mut Session) {
    for event in session.drain_events() {
        match event {
            GameEvent::ImpulseApplied => log::trace!("flap"),
            GameEvent::SessionReset => log::info!("overlay dismissed, round live"),
            GameEvent::SessionEnded { score } => log::info!("overlay shown, final score {score}"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let config = load_config(args.get(1).map(String::as_str));
    let seed = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xF1A9);

    let mut session = Session::new(config, Viewport::new(VIEW_WIDTH, VIEW_HEIGHT), seed);
    session.start();
    drain(&mut session);

    while session.round() <= ROUNDS {
        // The loop is tagged with the round it was registered for; a restart
        // bumps the counter and this stale loop ends, so at most one tick
        // stream is ever live.
        let round = session.round();
        let mut ticks = 0;
        while session.phase() == SessionPhase::Playing
            && session.round() == round
            && ticks < MAX_TICKS_PER_ROUND
        {
            if autopilot(&session) {
                session.apply_impulse();
            }
            session.tick();
            drain(&mut session);

            if ticks % 600 == 0 {
                let distance = session
                    .distance_to_next()
                    .map(|d| format!("{d}m"))
                    .unwrap_or_else(|| "--m".into());
                log::info!(
                    "frame {} score {} next {} visible {}",
                    session.frame(),
                    session.score(),
                    distance,
                    session.visible_obstacles().count()
                );
            }
            ticks += 1;
        }

        // Tick cap hit while still alive, or final round finished
        if session.phase() == SessionPhase::Playing || session.round() >= ROUNDS {
            break;
        }
        session.restart();
        drain(&mut session);
    }

    log::info!(
        "done after round {}: score {} in {} frames",
        session.round(),
        session.score(),
        session.frame()
    );
}
