//! Error types for grammar construction, expansion and interpretation.

use thiserror::Error;

/// Problems detected while building a [`GrammarSpec`](crate::GrammarSpec).
///
/// These are always raised at construction time, never during expansion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrammarError {
    #[error("duplicate production rule for symbol `{symbol}`")]
    DuplicateRule { symbol: char },

    #[error("axiom must contain at least one symbol")]
    EmptyAxiom,

    #[error("turn angle must be a positive, finite number of degrees (got {0})")]
    InvalidTurnAngle(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LSystemError {
    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),

    #[error("recursion depth must be non-negative (got {0})")]
    InvalidDepth(i32),

    #[error("unmatched `]` at symbol index {index}: state stack is empty")]
    UnbalancedStack { index: usize },

    #[error("step size must be a positive, finite number (got {0})")]
    NonPositiveStepSize(f64),

    #[error("origin must have finite coordinates (got ({x}, {y}))")]
    NonFiniteOrigin { x: f64, y: f64 },

    #[error("initial heading must be a finite number of degrees (got {0})")]
    NonFiniteHeading(f64),

    #[error("unknown fractal name `{0}`")]
    UnknownFractal(String),

    #[error("expansion would produce {projected} symbols, exceeding the limit of {limit}")]
    ExpansionTooLarge { projected: u64, limit: u64 },
}
