//! Brickfall headless demo
//!
//! Runs the simulation without a display: a simple tracker moves the
//! paddle under the ball, the loop ticks at the logical frame rate until
//! the run ends (or a tick cap is hit), and a JSON summary goes to stdout.
//! Useful for eyeballing difficulty scaling and for exercising the full
//! session lifecycle from the command line.
//!
//! Usage: `brickfall [seed]`, with logging via `RUST_LOG`.

use serde::Serialize;

use brickfall::consts::TICK_HZ;
use brickfall::input::PaddleIntent;
use brickfall::sim::{Session, SessionEvent, TickInput, tick};

/// Stop after ten minutes of play even if the tracker never loses
const MAX_TICKS: u64 = 10 * 60 * TICK_HZ as u64;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    score: u64,
    level: u32,
    lives: u32,
}

/// Keep the paddle center under the ball, with a small dead zone so the
/// tracker doesn't jitter
fn track_ball(session: &Session) -> PaddleIntent {
    let offset = session.ball.pos.x - session.paddle.center_x();
    if offset < -4.0 {
        PaddleIntent::MoveLeft
    } else if offset > 4.0 {
        PaddleIntent::MoveRight
    } else {
        PaddleIntent::Stop
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xB41C0DE);

    let mut session = Session::new(seed);
    let mut input = TickInput {
        start: true,
        ..Default::default()
    };

    let mut ticks = 0;
    'run: while ticks < MAX_TICKS {
        tick(&mut session, &input);
        ticks += 1;

        input = TickInput {
            paddle: track_ball(&session),
            ..Default::default()
        };

        if ticks % TICK_HZ as u64 == 0 {
            let hud = session.hud();
            log::debug!(
                "t={ticks} score={} lives={} level={}",
                hud.score,
                hud.lives,
                hud.level
            );
        }

        for event in session.poll_events() {
            match event {
                SessionEvent::LifeLost { lives } => {
                    log::info!("ball lost, {lives} lives remaining");
                }
                SessionEvent::LevelCleared { level } => {
                    log::info!("advanced to level {level}");
                }
                SessionEvent::GameOver { score, level } => {
                    log::info!("game over at level {level} with {score} points");
                    break 'run;
                }
            }
        }
    }

    let summary = RunSummary {
        seed,
        ticks,
        score: session.score,
        level: session.level,
        lives: session.lives,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to encode run summary: {err}"),
    }
}
