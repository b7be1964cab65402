//! Software rendering module
//!
//! Rasterizes a simulation snapshot into an RGB canvas and lays out the HUD
//! text. Backends (see `platform`) decide how the canvas reaches the screen.

pub mod canvas;
pub mod hud;
pub mod scene;

pub use canvas::{Canvas, Rgb};
pub use hud::{HudLine, TextSize, hud_lines};
pub use scene::ScenePainter;
