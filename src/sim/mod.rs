//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame; wall time only drives spawn cadence
//! - Seeded RNG only
//! - Stable iteration order (spawn order = left-to-right order)
//! - No rendering or platform dependencies

pub mod bird;
pub mod collision;
pub mod pipe;
pub mod rect;
pub mod state;
pub mod tick;

pub use bird::{Bird, Boundary};
pub use collision::{CrashCause, check_crash};
pub use pipe::{Pipe, PipeRegions, PipeStream};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{InputEvent, InputResponse, handle_input, tick};
