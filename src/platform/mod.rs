//! Platform abstraction layer
//!
//! Handles the outside world for the simulation:
//! - Input events (`InputSource`)
//! - Frame output (`Presenter`)
//! - Frame pacing (`FrameClock`)
//! - The terminal backend implementing all of the above

pub mod clock;
pub mod game_loop;
pub mod terminal;

use std::io;

use crate::sim::{InputEvent, Snapshot};

pub use clock::FrameClock;
pub use game_loop::run;
pub use terminal::{TerminalInput, TerminalPresenter, TerminalSession};

/// Delivers the discrete inputs that arrived since the last poll
pub trait InputSource {
    /// Never blocks. Unrecognised input is dropped, not reported.
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Draws a frame from simulation state
pub trait Presenter {
    /// Called every frame in every phase
    fn present(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}
