//! Session events and the deferred-event scheduler
//!
//! The frame loop is single-threaded, so "timers" are just events with a
//! due tick. Each entry captures the session generation it was scheduled
//! under; entries from a generation that is no longer live never fire,
//! which keeps a restart from being interrupted by the previous run's
//! game-over notification.

use serde::{Deserialize, Serialize};

/// Notable session transitions, surfaced to the shell via
/// `Session::poll_events`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A ball was lost but lives remain; play resumes after a short freeze
    LifeLost { lives: u32 },
    /// All bricks cleared; the field was regenerated for the new level
    LevelCleared { level: u32 },
    /// Terminal notification carrying the final tallies
    GameOver { score: u64, level: u32 },
}

#[derive(Debug, Clone)]
struct Scheduled {
    due_tick: u64,
    generation: u64,
    event: SessionEvent,
}

/// Generation-guarded deferred event queue
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    queue: Vec<Scheduled>,
}

impl Scheduler {
    /// Queue `event` to fire once the tick counter reaches `due_tick`,
    /// provided `generation` is still the live one at that time
    pub fn schedule(&mut self, due_tick: u64, generation: u64, event: SessionEvent) {
        self.queue.push(Scheduled {
            due_tick,
            generation,
            event,
        });
    }

    /// Pop every due event scheduled under the live generation. Stale
    /// entries are dropped silently.
    pub fn fire_due(&mut self, now: u64, live_generation: u64) -> Vec<SessionEvent> {
        let mut fired = Vec::new();
        self.queue.retain(|entry| {
            if entry.generation != live_generation {
                return false;
            }
            if entry.due_tick <= now {
                fired.push(entry.event.clone());
                return false;
            }
            true
        });
        fired
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
