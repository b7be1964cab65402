//! Flappy - A flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe stream, game state)
//! - `renderer`: Software rasterizer and scene painter
//! - `platform`: Input source / presentation sink traits and terminal backend
//! - `settings`: Runtime and presentation configuration
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Palette, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Target frame rate (one simulation tick per frame)
    pub const TARGET_FPS: u32 = 60;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Ground strip at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Bird defaults
    pub const GRAVITY: f32 = 0.3; // per tick²
    pub const FLAP_VELOCITY: f32 = -8.0; // negative = up
    pub const BIRD_X: f32 = 80.0;
    pub const BIRD_RADIUS: f32 = 15.0;

    /// Cosmetic tilt (degrees, positive = nose down)
    pub const TILT_UP: f32 = -30.0;
    pub const TILT_DOWN: f32 = 60.0;
    pub const TILT_STEP: f32 = 4.0;

    /// Pipe defaults
    pub const PIPE_SPEED: f32 = 3.0; // per tick
    pub const PIPE_GAP: f32 = 180.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const CAP_OVERHANG: f32 = 5.0;
    pub const CAP_HEIGHT: f32 = 20.0;
    /// Gap offset range is [GAP_TOP_MARGIN, FIELD_HEIGHT - PIPE_GAP - GAP_BOTTOM_MARGIN]
    pub const GAP_TOP_MARGIN: f32 = 100.0;
    pub const GAP_BOTTOM_MARGIN: f32 = 120.0;

    /// Spawn cadence
    pub const SPAWN_INTERVAL_MS: u64 = 1500;
}

/// Move `current` toward `target` by at most `step`
#[inline]
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}
