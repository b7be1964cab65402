//! RGB pixel buffer with a few filled primitives
//!
//! Coordinates are pixels, origin top-left. Shapes cover the pixels whose
//! centres fall inside them; anything off-canvas is clipped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend, `t` in [0, 1]
    pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }
}

pub struct Canvas {
    width: usize,
    height: usize,
    px: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![Rgb::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.px.clear();
        self.px.resize(width * height, Rgb::default());
    }

    pub fn fill(&mut self, color: Rgb) {
        self.px.fill(color);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.px[y as usize * self.width + x as usize] = color;
        }
    }

    /// Clamped pixel span covering centres in [start, end)
    fn span(&self, start: f32, end: f32, limit: usize) -> std::ops::Range<i32> {
        let lo = (start - 0.5).ceil().max(0.0) as i32;
        let hi = ((end - 0.5).ceil().min(limit as f32)) as i32;
        lo..hi.max(lo)
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let xs = self.span(x, x + w, self.width);
        for py in self.span(y, y + h, self.height) {
            for px in xs.clone() {
                self.set(px, py, color);
            }
        }
    }

    /// One color per pixel row, e.g. for vertical gradients
    pub fn fill_rows(&mut self, mut color_at: impl FnMut(usize) -> Rgb) {
        for y in 0..self.height {
            let color = color_at(y);
            self.px[y * self.width..(y + 1) * self.width].fill(color);
        }
    }

    pub fn fill_ellipse(&mut self, center: Vec2, rx: f32, ry: f32, color: Rgb) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let xs = self.span(center.x - rx, center.x + rx, self.width);
        for py in self.span(center.y - ry, center.y + ry, self.height) {
            let dy = (py as f32 + 0.5 - center.y) / ry;
            for px in xs.clone() {
                let dx = (px as f32 + 0.5 - center.x) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.set(px, py, color);
                }
            }
        }
    }

    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgb) {
        let area = (b - a).perp_dot(c - a);
        if area.abs() < f32::EPSILON {
            return;
        }
        let min = a.min(b).min(c);
        let max = a.max(b).max(c);
        let xs = self.span(min.x, max.x, self.width);
        for py in self.span(min.y, max.y, self.height) {
            for px in xs.clone() {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                // Edge functions share the sign of the area when inside
                let w0 = (c - b).perp_dot(p - b) * area.signum();
                let w1 = (a - c).perp_dot(p - c) * area.signum();
                let w2 = (b - a).perp_dot(p - a) * area.signum();
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.set(px, py, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(Rgb::lerp(a, b, 0.0), a);
        assert_eq!(Rgb::lerp(a, b, 1.0), b);
        assert_eq!(Rgb::lerp(a, b, 0.5), Rgb(100, 100, 100));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(-2.0, 2.0, 4.0, 10.0, Rgb(9, 9, 9));
        assert_eq!(canvas.get(0, 2), Rgb(9, 9, 9));
        assert_eq!(canvas.get(1, 3), Rgb(9, 9, 9));
        assert_eq!(canvas.get(2, 2), Rgb::default());
        assert_eq!(canvas.get(0, 1), Rgb::default());
    }

    #[test]
    fn test_fill_ellipse_covers_center_not_corners() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_ellipse(Vec2::new(5.0, 5.0), 4.0, 4.0, Rgb(1, 1, 1));
        assert_eq!(canvas.get(5, 5), Rgb(1, 1, 1));
        assert_eq!(canvas.get(0, 0), Rgb::default());
        assert_eq!(canvas.get(9, 9), Rgb::default());
    }

    #[test]
    fn test_fill_triangle_either_winding() {
        for (b, c) in [
            (Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)),
            (Vec2::new(0.0, 10.0), Vec2::new(10.0, 0.0)),
        ] {
            let mut canvas = Canvas::new(10, 10);
            canvas.fill_triangle(Vec2::ZERO, b, c, Rgb(2, 2, 2));
            assert_eq!(canvas.get(1, 1), Rgb(2, 2, 2));
            assert_eq!(canvas.get(8, 8), Rgb::default());
        }
    }
}
