//! Interpreter that converts an L-System symbol string into a [`TurtlePath`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], optionally remap symbols via [`TurtleInterpreter::set_op`],
//! then call [`TurtleInterpreter::interpret`] with a grammar and its expanded
//! string. The free function [`interpret`] covers the common case.

use crate::error::LSystemError;
use crate::grammar::GrammarSpec;
use crate::path::TurtlePath;
use crate::turtle::{TurtleOp, TurtleState};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What to do with a `]` when the state stack is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopPolicy {
    /// Abort with [`LSystemError::UnbalancedStack`].
    #[default]
    Strict,
    /// Treat the unmatched `]` as a no-op and log a warning.
    Lenient,
}

/// Configuration for turtle interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Starting pen position.
    pub origin: DVec2,
    /// Starting heading in degrees.
    pub heading: f64,
    /// Distance covered by each draw or move symbol. Must be positive.
    pub step_size: f64,
    /// Handling of unmatched `]`.
    pub pop_policy: PopPolicy,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            origin: DVec2::ZERO,
            heading: 0.0,
            step_size: 10.0,
            pop_policy: PopPolicy::Strict,
        }
    }
}

impl TurtleConfig {
    /// Checks that the starting state and step size can produce finite
    /// coordinates.
    pub fn validate(&self) -> Result<(), LSystemError> {
        let step = self.step_size;
        if !step.is_finite() || step <= 0.0 {
            return Err(LSystemError::NonPositiveStepSize(step));
        }
        if !self.origin.is_finite() {
            return Err(LSystemError::NonFiniteOrigin {
                x: self.origin.x,
                y: self.origin.y,
            });
        }
        if !self.heading.is_finite() {
            return Err(LSystemError::NonFiniteHeading(self.heading));
        }
        Ok(())
    }
}

/// Interprets symbol strings as 2D turtle drawings.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter with the standard `F + - [ ]` symbols mapped.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: TurtleOp::STANDARD_SYMBOLS.into_iter().collect(),
            config,
        }
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Assigns `op` to `symbol`, replacing any previous mapping.
    ///
    /// Mapping a symbol to [`TurtleOp::Ignore`] removes its meaning.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Operation bound to `symbol`; unmapped symbols are ignored.
    pub fn op_for(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Walks `symbols` once and returns the emitted segments and final state.
    ///
    /// The turtle starts at `config.origin` with `config.heading`. Every draw
    /// symbol yields one segment; `[` pushes a copy of the state and `]`
    /// restores it without drawing. Turns use `spec.turn_angle()`.
    ///
    /// # Errors
    ///
    /// * [`LSystemError::NonPositiveStepSize`], [`LSystemError::NonFiniteOrigin`]
    ///   or [`LSystemError::NonFiniteHeading`] from [`TurtleConfig::validate`],
    ///   checked before any symbol is read.
    /// * [`LSystemError::UnbalancedStack`] with the symbol index of a `]`
    ///   that has nothing to pop, under [`PopPolicy::Strict`].
    pub fn interpret(&self, spec: &GrammarSpec, symbols: &str) -> Result<TurtlePath, LSystemError> {
        self.config.validate()?;
        let step = self.config.step_size;

        let mut path = TurtlePath::new();
        let mut turtle = TurtleState::new(self.config.origin, self.config.heading);
        let mut stack: Vec<TurtleState> = Vec::new();
        let angle = spec.turn_angle();

        for (index, sym) in symbols.chars().enumerate() {
            match self.op_for(sym) {
                TurtleOp::Draw => {
                    let end = turtle.ahead(step);
                    path.add_segment(turtle.position, end);
                    turtle.position = end;
                }
                TurtleOp::Move => turtle.position = turtle.ahead(step),
                TurtleOp::TurnLeft => turtle.turn(angle),
                TurtleOp::TurnRight => turtle.turn(-angle),
                TurtleOp::Push => stack.push(turtle),
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => match self.config.pop_policy {
                        PopPolicy::Strict => {
                            return Err(LSystemError::UnbalancedStack { index });
                        }
                        PopPolicy::Lenient => {
                            tracing::warn!(index, "ignoring unmatched `]`");
                        }
                    },
                },
                TurtleOp::Ignore => {}
            }
        }

        if !stack.is_empty() {
            tracing::trace!(open_branches = stack.len(), "interpretation ended inside a branch");
        }
        tracing::debug!(
            symbols = symbols.chars().count(),
            segments = path.len(),
            "interpreted symbol string"
        );

        path.final_state = turtle;
        Ok(path)
    }
}

impl Default for TurtleInterpreter {
    fn default() -> Self {
        Self::new(TurtleConfig::default())
    }
}

/// Interprets `symbols` with the standard symbol table and strict popping.
pub fn interpret(
    spec: &GrammarSpec,
    symbols: &str,
    origin: DVec2,
    initial_heading: f64,
    step_size: f64,
) -> Result<TurtlePath, LSystemError> {
    TurtleInterpreter::new(TurtleConfig {
        origin,
        heading: initial_heading,
        step_size,
        pop_policy: PopPolicy::Strict,
    })
    .interpret(spec, symbols)
}
