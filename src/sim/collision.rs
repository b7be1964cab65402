//! Crash detection
//!
//! The bird is tested as its bounding square, not its circle, against the
//! four rectangles of every pipe.

use serde::{Deserialize, Serialize};

use super::bird::{Bird, Boundary};
use super::pipe::PipeStream;
use crate::tuning::Tuning;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Pipe { id: u32 },
    Ceiling,
    Floor,
}

impl From<Boundary> for CrashCause {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Ceiling => CrashCause::Ceiling,
            Boundary::Floor => CrashCause::Floor,
        }
    }
}

/// Check the bird against every pipe and both vertical bounds
///
/// Pipes are checked first so a pipe hit on the same tick as a boundary
/// touch reports the pipe.
pub fn check_crash(bird: &Bird, stream: &PipeStream, tuning: &Tuning) -> Option<CrashCause> {
    let bbox = bird.bounding_box();
    if let Some(pipe) = stream.first_collision(&bbox) {
        return Some(CrashCause::Pipe { id: pipe.id });
    }
    bird.at_boundary(tuning).map(CrashCause::from)
}
