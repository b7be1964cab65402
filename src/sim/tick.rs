//! Input handling and the per-frame simulation tick
//!
//! One tick per rendered frame. Wall time only drives the spawn cadence;
//! bird and pipe motion are per tick.

use std::time::Duration;

use super::collision::check_crash;
use super::state::{GameEvent, GamePhase, GameState};

/// A discrete player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The single game action: start/restart and flap
    Activate,
    Quit,
}

/// What the host should do after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    Continue,
    Quit,
}

/// Apply one input event
pub fn handle_input(state: &mut GameState, event: InputEvent) -> InputResponse {
    match event {
        InputEvent::Activate => {
            if state.phase == GamePhase::Inactive {
                state.reset();
                state.phase = GamePhase::Active;
                state.events.push(GameEvent::Started);
                log::info!("Run started (seed {})", state.seed);
            }
            state.bird.flap(&state.tuning);
            state.events.push(GameEvent::Flapped);
            InputResponse::Continue
        }
        InputEvent::Quit => InputResponse::Quit,
    }
}

/// Advance the game by one frame that took `elapsed` of wall time
pub fn tick(state: &mut GameState, elapsed: Duration) {
    // Inactive: everything stays frozen on the last frame
    if state.phase != GamePhase::Active {
        return;
    }

    state.time_ticks += 1;
    state.clock += elapsed;

    // Spawn before movement so a new pipe moves on its first tick
    if state.clock.saturating_sub(state.last_spawn) > state.tuning.spawn_interval() {
        let x = state.tuning.field_width;
        let id = state.pipes.spawn(x, &mut state.rng, &state.tuning);
        state.last_spawn = state.clock;
        state.events.push(GameEvent::PipeSpawned { id });
        log::debug!("Spawned pipe {} at tick {}", id, state.time_ticks);
    }

    state.bird.advance(&state.tuning);

    state.pipes.advance_all(&state.tuning);
    // A pipe fast enough to skip past the bird in one tick still counts
    let mut passed = 0;
    for pipe in state.pipes.retire_offscreen(&state.tuning) {
        if !pipe.passed {
            passed += 1;
        }
        state.events.push(GameEvent::PipeRetired { id: pipe.id });
        log::debug!("Retired pipe {}", pipe.id);
    }
    passed += state.pipes.check_pass(state.bird.pos.x, &state.tuning);
    for _ in 0..passed {
        state.score += 1;
        state.events.push(GameEvent::Scored { score: state.score });
        log::debug!("Score {}", state.score);
    }

    // After every position update, so the final approach is never skipped
    if let Some(cause) = check_crash(&state.bird, &state.pipes, &state.tuning) {
        state.phase = GamePhase::Inactive;
        state.events.push(GameEvent::Crashed { cause });
        log::info!(
            "Game over: {:?} after {} ticks, score {}",
            cause,
            state.time_ticks,
            state.score
        );
    }
}
