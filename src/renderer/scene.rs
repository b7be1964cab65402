//! Scene painter: draws a simulation snapshot onto a canvas
//!
//! Everything is laid out in field units and scaled to the canvas, so the
//! picture stretches with the terminal.

use glam::Vec2;

use super::canvas::{Canvas, Rgb};
use crate::settings::Palette;
use crate::sim::{Bird, Pipe, Rect, Snapshot};
use crate::tuning::Tuning;

/// Spacing of the texture lines on the ground and pipes
const GROUND_LINE_SPACING: f32 = 30.0;
const PIPE_STRIPE_SPACING: f32 = 15.0;

/// Field-to-canvas mapping
#[derive(Debug, Clone, Copy)]
struct View {
    scale: Vec2,
}

impl View {
    fn new(canvas: &Canvas, tuning: &Tuning) -> Self {
        Self {
            scale: Vec2::new(
                canvas.width() as f32 / tuning.field_width,
                canvas.height() as f32 / tuning.field_height,
            ),
        }
    }

    #[inline]
    fn point(&self, p: Vec2) -> Vec2 {
        p * self.scale
    }

    fn rect(&self, canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let min = self.point(Vec2::new(x, y));
        let size = Vec2::new(w, h) * self.scale;
        canvas.fill_rect(min.x, min.y, size.x, size.y, color);
    }

    fn region(&self, canvas: &mut Canvas, rect: &Rect, color: Rgb) {
        self.rect(canvas, rect.min.x, rect.min.y, rect.size.x, rect.size.y, color);
    }

    fn ellipse(&self, canvas: &mut Canvas, center: Vec2, rx: f32, ry: f32, color: Rgb) {
        canvas.fill_ellipse(self.point(center), rx * self.scale.x, ry * self.scale.y, color);
    }

    fn triangle(&self, canvas: &mut Canvas, pts: [Vec2; 3], color: Rgb) {
        canvas.fill_triangle(self.point(pts[0]), self.point(pts[1]), self.point(pts[2]), color);
    }
}

/// Paints frames with a fixed palette and field geometry
#[derive(Debug, Clone)]
pub struct ScenePainter {
    palette: Palette,
    tuning: Tuning,
}

impl ScenePainter {
    pub fn new(palette: Palette, tuning: Tuning) -> Self {
        Self { palette, tuning }
    }

    /// Draw one frame. `time_ms` is wall time and only moves the clouds.
    pub fn paint(&self, canvas: &mut Canvas, snapshot: &Snapshot, time_ms: u64) {
        if canvas.width() == 0 || canvas.height() == 0 {
            return;
        }
        let view = View::new(canvas, &self.tuning);

        self.draw_sky(canvas);
        self.draw_clouds(canvas, &view, time_ms);
        self.draw_ground(canvas, &view);
        for pipe in &snapshot.pipes {
            self.draw_pipe(canvas, &view, pipe);
        }
        self.draw_bird(canvas, &view, &snapshot.bird);
    }

    fn draw_sky(&self, canvas: &mut Canvas) {
        let height = canvas.height() as f32;
        let (top, bottom) = (self.palette.sky_top, self.palette.sky_bottom);
        canvas.fill_rows(|y| Rgb::lerp(top, bottom, y as f32 / height));
    }

    fn draw_clouds(&self, canvas: &mut Canvas, view: &View, time_ms: u64) {
        let wrap = self.tuning.field_width as u64 + 200;
        for i in 0..3u64 {
            let x = ((time_ms / 50 + i * 200) % wrap) as f32 - 100.0;
            let y = 80.0 + i as f32 * 60.0;
            let color = self.palette.cloud;
            view.ellipse(canvas, Vec2::new(x + 40.0, y + 20.0), 40.0, 20.0, color);
            view.ellipse(canvas, Vec2::new(x + 50.0, y + 5.0), 30.0, 15.0, color);
            view.ellipse(canvas, Vec2::new(x + 75.0, y + 27.5), 35.0, 17.5, color);
        }
    }

    fn draw_ground(&self, canvas: &mut Canvas, view: &View) {
        let t = &self.tuning;
        let floor = t.floor();
        view.rect(canvas, 0.0, floor, t.field_width, t.ground_height, self.palette.ground);

        let mut x = 0.0;
        while x < t.field_width {
            view.rect(canvas, x, floor, 2.0, t.ground_height, self.palette.ground_line);
            x += GROUND_LINE_SPACING;
        }
    }

    fn draw_pipe(&self, canvas: &mut Canvas, view: &View, pipe: &Pipe) {
        let t = &self.tuning;
        let regions = &pipe.regions;
        view.region(canvas, &regions.top_body, self.palette.pipe);
        view.region(canvas, &regions.top_cap, self.palette.pipe_dark);
        view.region(canvas, &regions.bottom_body, self.palette.pipe);
        view.region(canvas, &regions.bottom_cap, self.palette.pipe_dark);

        let stripe_w = (t.pipe_width - 10.0).max(0.0);
        let stripe = |canvas: &mut Canvas, from: f32, to: f32| {
            let mut y = from;
            while y < to {
                view.rect(canvas, pipe.x + 5.0, y, stripe_w, 2.0, self.palette.pipe_dark);
                y += PIPE_STRIPE_SPACING;
            }
        };
        stripe(canvas, 0.0, pipe.gap_offset);
        stripe(canvas, pipe.gap_offset + t.pipe_gap, t.floor());
    }

    fn draw_bird(&self, canvas: &mut Canvas, view: &View, bird: &Bird) {
        let r = bird.radius;
        let center = bird.pos;
        let rot = Vec2::from_angle(bird.rotation.to_radians());
        let at = |local: Vec2| center + rot.rotate(local);

        view.ellipse(canvas, center, r, r, self.palette.bird_body);

        let wing = (bird.wing_ticks as f32 * 0.3).sin() * 5.0;
        view.triangle(
            canvas,
            [
                at(Vec2::new(-10.0, -wing)),
                at(Vec2::new(-25.0, -5.0 - wing)),
                at(Vec2::new(-15.0, 5.0 - wing)),
            ],
            self.palette.bird_body,
        );

        view.triangle(
            canvas,
            [
                at(Vec2::new(r, 0.0)),
                at(Vec2::new(r + 8.0, -3.0)),
                at(Vec2::new(r + 8.0, 3.0)),
            ],
            self.palette.bird_beak,
        );

        view.ellipse(canvas, at(Vec2::new(5.0, -5.0)), 4.0, 4.0, self.palette.eye_white);
        view.ellipse(canvas, at(Vec2::new(6.0, -5.0)), 2.0, 2.0, self.palette.bird_eye);
    }
}
