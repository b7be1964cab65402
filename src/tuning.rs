//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so a settings file can
//! override it. Keep this separate from runtime/presentation settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning values, reported once at startup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{name} must be a finite number (got {value})")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("flap velocity must point up (negative), got {0}")]
    FlapNotUpward(f32),
    #[error("gap of {gap} does not fit: offset range [{min}, {max}] is empty")]
    GapDoesNotFit { gap: f32, min: f32, max: f32 },
    #[error("ground height {ground} exceeds the gap bottom margin {margin}")]
    GroundAboveMargin { ground: f32, margin: f32 },
    #[error("bird of radius {radius} does not fit between ceiling and floor {floor}")]
    BirdDoesNotFit { radius: f32, floor: f32 },
    #[error("bird x {x} must lie in [{min}, {max}] so its box stays inside the field")]
    BirdOutsideField { x: f32, min: f32, max: f32 },
    #[error("tilt range [{up}, {down}] is inverted")]
    TiltInverted { up: f32, down: f32 },
}

/// Gameplay tuning
///
/// Units are field pixels and ticks unless stated otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub ground_height: f32,

    /// Added to the bird's velocity every tick
    pub gravity: f32,
    /// Velocity set by a flap (negative = up)
    pub flap_velocity: f32,
    pub bird_x: f32,
    pub bird_radius: f32,

    /// Rotation bounds and per-tick step, in degrees
    pub tilt_up: f32,
    pub tilt_down: f32,
    pub tilt_step: f32,

    pub pipe_speed: f32,
    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub cap_overhang: f32,
    pub cap_height: f32,
    pub gap_top_margin: f32,
    pub gap_bottom_margin: f32,

    /// Milliseconds between pipe spawns
    pub spawn_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,
            tilt_up: TILT_UP,
            tilt_down: TILT_DOWN,
            tilt_step: TILT_STEP,
            pipe_speed: PIPE_SPEED,
            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            cap_overhang: CAP_OVERHANG,
            cap_height: CAP_HEIGHT,
            gap_top_margin: GAP_TOP_MARGIN,
            gap_bottom_margin: GAP_BOTTOM_MARGIN,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Y of the ground surface
    #[inline]
    pub fn floor(&self) -> f32 {
        self.field_height - self.ground_height
    }

    /// Inclusive range a pipe's gap offset is drawn from
    pub fn gap_offset_range(&self) -> (f32, f32) {
        (
            self.gap_top_margin,
            self.field_height - self.pipe_gap - self.gap_bottom_margin,
        )
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Reject configurations that would make spawning or physics impossible
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("flap_velocity", self.flap_velocity),
            ("bird_x", self.bird_x),
            ("bird_radius", self.bird_radius),
            ("tilt_up", self.tilt_up),
            ("tilt_down", self.tilt_down),
            ("tilt_step", self.tilt_step),
            ("pipe_speed", self.pipe_speed),
            ("pipe_gap", self.pipe_gap),
            ("pipe_width", self.pipe_width),
            ("cap_overhang", self.cap_overhang),
            ("cap_height", self.cap_height),
            ("gap_top_margin", self.gap_top_margin),
            ("gap_bottom_margin", self.gap_bottom_margin),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { name, value });
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_radius", self.bird_radius),
            ("pipe_speed", self.pipe_speed),
            ("pipe_gap", self.pipe_gap),
            ("pipe_width", self.pipe_width),
            ("tilt_step", self.tilt_step),
            ("spawn_interval_ms", self.spawn_interval_ms as f32),
        ];
        for (name, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { name, value });
            }
        }

        if !(self.flap_velocity < 0.0) {
            return Err(TuningError::FlapNotUpward(self.flap_velocity));
        }

        let (min, max) = self.gap_offset_range();
        if !(min <= max) || min < 0.0 {
            return Err(TuningError::GapDoesNotFit {
                gap: self.pipe_gap,
                min,
                max,
            });
        }

        // Bottom body height must never go negative
        if self.ground_height > self.gap_bottom_margin || self.ground_height < 0.0 {
            return Err(TuningError::GroundAboveMargin {
                ground: self.ground_height,
                margin: self.gap_bottom_margin,
            });
        }

        if self.bird_radius * 2.0 >= self.floor() {
            return Err(TuningError::BirdDoesNotFit {
                radius: self.bird_radius,
                floor: self.floor(),
            });
        }

        // Pipes retire at x + width < 0; the bird box and caps must never
        // reach that far left
        let min_x = self.bird_radius + self.cap_overhang.max(0.0);
        let max_x = self.field_width - self.bird_radius;
        if !(self.bird_x >= min_x && self.bird_x <= max_x) {
            return Err(TuningError::BirdOutsideField {
                x: self.bird_x,
                min: min_x,
                max: max_x,
            });
        }

        if self.tilt_up > self.tilt_down {
            return Err(TuningError::TiltInverted {
                up: self.tilt_up,
                down: self.tilt_down,
            });
        }

        Ok(())
    }
}
