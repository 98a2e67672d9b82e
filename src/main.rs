//! Gap Glider demo host
//!
//! Drives the engine against the headless scene backend at the fixed tick
//! period, with a small autopilot standing in for player input. A real
//! presentation host renders the snapshot and forwards real input; this one
//! prints what it would display.

use std::thread;
use std::time::Duration;

use gap_glider::consts::TICK_PERIOD_MS;
use gap_glider::sim::{Engine, Phase, SimEvent, Snapshot};
use gap_glider::{HeadlessScene, SimConfig};

/// Demo runs this long before quitting (30 seconds of ticks)
const DEMO_TICKS: u64 = 600;

/// Jump whenever the actor is below the nearest upcoming gap center
fn autopilot_wants_jump(snapshot: &Snapshot, config: &SimConfig) -> bool {
    let Some(actor) = &snapshot.actor else {
        return false;
    };
    let margin = config.obstacle_width / 2.0 + config.actor_margin;
    let target = snapshot
        .pairs
        .iter()
        .find(|pair| pair.x > -margin)
        .map(|pair| pair.gap_center)
        .unwrap_or(config.actor_spawn_y);
    actor.pos.y < target
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xF1AB);
    log::info!("Gap Glider demo starting, seed {seed}");

    let config = SimConfig::default();
    let mut engine = Engine::new(config.clone(), HeadlessScene::new(), seed);

    if let Err(err) = engine.start() {
        log::error!("{err}");
        std::process::exit(1);
    }

    for _ in 0..DEMO_TICKS {
        if autopilot_wants_jump(&engine.snapshot(), &config) {
            engine.jump();
        }
        engine.tick();

        for event in engine.drain_events() {
            match event {
                SimEvent::Scored { total } => println!("score: {total}"),
                SimEvent::Ended { reason, score } => {
                    println!("game over ({reason:?}), final score {score}")
                }
                SimEvent::Started | SimEvent::Stopped => {}
            }
        }
        if engine.phase() == Phase::GameOver {
            break;
        }

        thread::sleep(Duration::from_millis(TICK_PERIOD_MS));
    }

    let last = engine.snapshot();
    if last.phase == Phase::Running {
        println!("demo time up at score {}", last.score);
    }
    engine.quit();
}
