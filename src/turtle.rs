//! Turtle state and operations for 2D path interpretation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// `heading` is in degrees and is never normalized; only its sine and cosine
/// matter. The state is `Copy`, so saving it on the branch stack always takes
/// a snapshot rather than a reference to the live cursor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the pen.
    pub position: DVec2,

    /// Current heading in degrees, measured from the +X axis.
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Unit vector pointing along the current heading.
    pub fn direction(&self) -> DVec2 {
        let rad = self.heading.to_radians();
        DVec2::new(rad.cos(), rad.sin())
    }

    /// Position reached after moving `distance` along the heading.
    pub fn ahead(&self, distance: f64) -> DVec2 {
        self.position + self.direction() * distance
    }

    /// Adds `degrees` to the heading (counter-clockwise in a Y-up frame).
    pub fn turn(&mut self, degrees: f64) {
        self.heading += degrees;
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward by one step and emit a segment (`F`).
    Draw,
    /// Move forward by one step without drawing.
    Move,
    /// Increase heading by the grammar's turn angle (`+`).
    TurnLeft,
    /// Decrease heading by the grammar's turn angle (`-`).
    TurnRight,
    /// Save the turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op: placeholder symbols consumed only by the rewrite rules.
    Ignore,
}

impl TurtleOp {
    /// The conventional symbol-to-operation table.
    pub const STANDARD_SYMBOLS: [(char, TurtleOp); 5] = [
        ('F', TurtleOp::Draw),
        ('+', TurtleOp::TurnLeft),
        ('-', TurtleOp::TurnRight),
        ('[', TurtleOp::Push),
        (']', TurtleOp::Pop),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn ahead_follows_heading() {
        let mut t = TurtleState::default();
        assert_eq!(t.ahead(10.0), DVec2::new(10.0, 0.0));
        t.turn(90.0);
        assert!(close(t.ahead(10.0), DVec2::new(0.0, 10.0)));
        t.turn(-180.0);
        assert!(close(t.ahead(2.0), DVec2::new(0.0, -2.0)));
    }

    #[test]
    fn heading_is_not_normalized() {
        let mut t = TurtleState::default();
        for _ in 0..9 {
            t.turn(60.0);
        }
        assert_eq!(t.heading, 540.0);
        assert!(close(t.direction(), DVec2::new(-1.0, 0.0)));
    }

    #[test]
    fn snapshots_are_independent() {
        let mut live = TurtleState::new(DVec2::new(1.0, 2.0), 30.0);
        let saved = live;
        live.position = DVec2::new(5.0, 5.0);
        live.turn(10.0);
        assert_eq!(saved, TurtleState::new(DVec2::new(1.0, 2.0), 30.0));
    }
}
