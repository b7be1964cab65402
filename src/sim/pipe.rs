//! Pipes and the pipe stream
//!
//! The stream has no clock of its own: the caller decides when to spawn.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// The four collision regions of a pipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeRegions {
    pub top_body: Rect,
    pub bottom_body: Rect,
    pub top_cap: Rect,
    pub bottom_cap: Rect,
}

impl PipeRegions {
    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        [&self.top_body, &self.bottom_body, &self.top_cap, &self.bottom_cap].into_iter()
    }
}

/// A top/bottom pipe pair with a gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge of the body
    pub x: f32,
    /// Height of the top body; the gap starts here
    pub gap_offset: f32,
    /// Set once the bird is past the trailing edge
    pub passed: bool,
    pub regions: PipeRegions,
}

impl Pipe {
    pub fn new(id: u32, x: f32, gap_offset: f32, tuning: &Tuning) -> Self {
        Self {
            id,
            x,
            gap_offset,
            passed: false,
            regions: Self::regions_at(x, gap_offset, tuning),
        }
    }

    fn regions_at(x: f32, gap_offset: f32, tuning: &Tuning) -> PipeRegions {
        let gap_bottom = gap_offset + tuning.pipe_gap;
        let cap_x = x - tuning.cap_overhang;
        let cap_w = tuning.pipe_width + 2.0 * tuning.cap_overhang;
        PipeRegions {
            top_body: Rect::new(x, 0.0, tuning.pipe_width, gap_offset),
            bottom_body: Rect::new(x, gap_bottom, tuning.pipe_width, tuning.floor() - gap_bottom),
            top_cap: Rect::new(cap_x, gap_offset - tuning.cap_height, cap_w, tuning.cap_height),
            bottom_cap: Rect::new(cap_x, gap_bottom, cap_w, tuning.cap_height),
        }
    }

    /// Right edge of the body
    #[inline]
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    /// True once the trailing edge is left of the field
    #[inline]
    pub fn is_offscreen(&self, tuning: &Tuning) -> bool {
        self.trailing_edge(tuning) < 0.0
    }

    /// Does `rect` overlap any of the four regions
    pub fn collides(&self, rect: &Rect) -> bool {
        self.regions.iter().any(|region| region.intersects(rect))
    }

    fn advance(&mut self, tuning: &Tuning) {
        self.x -= tuning.pipe_speed;
        self.regions = Self::regions_at(self.x, self.gap_offset, tuning);
    }
}

/// Ordered pipes: spawn order is also left-to-right order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeStream {
    pipes: Vec<Pipe>,
    next_id: u32,
}

impl Default for PipeStream {
    fn default() -> Self {
        Self::new()
    }
}

impl PipeStream {
    pub fn new() -> Self {
        Self {
            pipes: Vec::new(),
            next_id: 1,
        }
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Append a pipe at `x` with a random gap offset. Returns its id.
    pub fn spawn<R: Rng>(&mut self, x: f32, rng: &mut R, tuning: &Tuning) -> u32 {
        let (min, max) = tuning.gap_offset_range();
        let gap_offset = rng.random_range(min..=max);
        self.push(x, gap_offset, tuning)
    }

    /// Append a pipe with a known gap offset. Returns its id.
    pub fn push(&mut self, x: f32, gap_offset: f32, tuning: &Tuning) -> u32 {
        let id = self.next_id;
        self.next_id = id + 1;
        self.pipes.push(Pipe::new(id, x, gap_offset, tuning));
        id
    }

    /// Move every pipe left by one tick
    pub fn advance_all(&mut self, tuning: &Tuning) {
        for pipe in &mut self.pipes {
            pipe.advance(tuning);
        }
    }

    /// Drop pipes whose trailing edge crossed the left boundary
    ///
    /// Rebuilds the sequence from the retained pipes and returns the retired
    /// ones in their original order.
    pub fn retire_offscreen(&mut self, tuning: &Tuning) -> Vec<Pipe> {
        let (retired, kept): (Vec<Pipe>, Vec<Pipe>) = std::mem::take(&mut self.pipes)
            .into_iter()
            .partition(|pipe| pipe.is_offscreen(tuning));
        self.pipes = kept;
        retired
    }

    /// Mark pipes the bird has cleared. Returns how many were newly passed.
    pub fn check_pass(&mut self, entity_x: f32, tuning: &Tuning) -> u32 {
        let mut newly_passed = 0;
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.trailing_edge(tuning) < entity_x {
                pipe.passed = true;
                newly_passed += 1;
            }
        }
        newly_passed
    }

    /// First pipe (leftmost) colliding with `rect`
    pub fn first_collision(&self, rect: &Rect) -> Option<&Pipe> {
        self.pipes.iter().find(|pipe| pipe.collides(rect))
    }
}
