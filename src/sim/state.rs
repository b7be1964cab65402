//! Game state and core simulation types
//!
//! `GameState` is the only mutator of the bird and the pipe stream. Hosts
//! read it through the accessors or an owned [`Snapshot`].

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::collision::CrashCause;
use super::pipe::{Pipe, PipeStream};
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap, or showing the crash frame
    #[default]
    Inactive,
    /// Live gameplay
    Active,
}

/// Things that happened during input handling or a tick, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh run began
    Started,
    Flapped,
    PipeSpawned { id: u32 },
    PipeRetired { id: u32 },
    Scored { score: u32 },
    Crashed { cause: CrashCause },
}

/// Owned copy of everything the presentation layer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) tuning: Tuning,
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: GamePhase,
    pub(crate) score: u32,
    pub(crate) bird: Bird,
    pub(crate) pipes: PipeStream,
    /// Accumulated active time; frozen while inactive
    pub(crate) clock: Duration,
    pub(crate) last_spawn: Duration,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create an inactive game. Rejects tuning that cannot be played.
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            phase: GamePhase::Inactive,
            score: 0,
            bird: Bird::new(&tuning),
            pipes: PipeStream::new(),
            clock: Duration::ZERO,
            last_spawn: Duration::ZERO,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        })
    }

    /// Fresh bird, no pipes, zero score, spawn timer restarted
    pub(crate) fn reset(&mut self) {
        self.bird = Bird::new(&self.tuning);
        self.pipes = PipeStream::new();
        self.score = 0;
        self.last_spawn = self.clock;
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        self.pipes.pipes()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            bird: self.bird.clone(),
            pipes: self.pipes.pipes().to_vec(),
        }
    }
}
