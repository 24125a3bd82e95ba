use crate::turtle::TurtleState;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A single straight stroke produced by a draw symbol.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub start: DVec2,
    pub end: DVec2,
}

impl DrawCommand {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// The result of interpreting a symbol string.
///
/// Segments are flat and ordered exactly as the draw symbols appeared. Branch
/// structure is only visible through shared coordinates: popping the stack
/// moves the pen without emitting a connecting segment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtlePath {
    /// Line segments to stroke, in order.
    pub segments: Vec<DrawCommand>,

    /// Turtle state after the last symbol.
    pub final_state: TurtleState,
}

impl TurtlePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, start: DVec2, end: DVec2) {
        self.segments.push(DrawCommand { start, end });
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Axis-aligned bounding box `(min, max)` of all segment endpoints, or
    /// `None` when nothing was drawn. Renderers use it to fit the drawing on
    /// their surface.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let first = self.segments.first()?.start;
        Some(self.segments.iter().fold((first, first), |(lo, hi), seg| {
            (lo.min(seg.start).min(seg.end), hi.max(seg.start).max(seg.end))
        }))
    }
}
