//! Host-facing draw requests.
//!
//! A [`DrawRequest`] is the parameter bundle collected by a host (fractal
//! name, step size, recursion depth). [`DrawRequest::render`] validates it
//! and runs expansion and interpretation end to end.

use crate::catalog::Fractal;
use crate::error::LSystemError;
use crate::interpreter::{PopPolicy, TurtleConfig, TurtleInterpreter};
use crate::path::TurtlePath;
use crate::rewrite::expand_bounded;
use glam::DVec2;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STEP_SIZE: f64 = 10.0;
pub const DEFAULT_RECURSION_DEPTH: i32 = 2;
/// Largest expansion [`DrawRequest::render`] accepts unless overridden.
pub const DEFAULT_MAX_SYMBOLS: u64 = 4_000_000;

/// Parameters for a single draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    pub fractal_name: String,

    #[serde(default = "default_step_size")]
    pub step_size: f64,

    #[serde(default = "default_recursion_depth")]
    pub recursion_depth: i32,

    #[serde(default)]
    pub origin: DVec2,

    #[serde(default)]
    pub initial_heading: f64,

    #[serde(default = "default_max_symbols")]
    pub max_symbols: u64,
}

fn default_step_size() -> f64 {
    DEFAULT_STEP_SIZE
}

fn default_recursion_depth() -> i32 {
    DEFAULT_RECURSION_DEPTH
}

fn default_max_symbols() -> u64 {
    DEFAULT_MAX_SYMBOLS
}

impl DrawRequest {
    /// A request for `fractal_name` with every other field at its default.
    pub fn new(fractal_name: impl Into<String>) -> Self {
        Self {
            fractal_name: fractal_name.into(),
            step_size: DEFAULT_STEP_SIZE,
            recursion_depth: DEFAULT_RECURSION_DEPTH,
            origin: DVec2::ZERO,
            initial_heading: 0.0,
            max_symbols: DEFAULT_MAX_SYMBOLS,
        }
    }

    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_recursion_depth(mut self, depth: i32) -> Self {
        self.recursion_depth = depth;
        self
    }

    pub fn with_origin(mut self, origin: DVec2) -> Self {
        self.origin = origin;
        self
    }

    /// Resolves the catalog entry named by `fractal_name`.
    pub fn fractal(&self) -> Result<Fractal, LSystemError> {
        self.fractal_name.parse()
    }

    /// Validates every parameter, then expands and interprets.
    ///
    /// All checks run before any rewriting.
    pub fn render(&self) -> Result<Drawing, LSystemError> {
        let fractal = self.fractal()?;
        let config = TurtleConfig {
            origin: self.origin,
            heading: self.initial_heading,
            step_size: self.step_size,
            pop_policy: PopPolicy::Strict,
        };
        config.validate()?;

        let spec = fractal.grammar();
        let symbols = expand_bounded(&spec, self.recursion_depth, self.max_symbols)?;
        let symbol_count = symbols.chars().count();
        let path = TurtleInterpreter::new(config).interpret(&spec, &symbols)?;

        tracing::debug!(
            fractal = fractal.name(),
            depth = self.recursion_depth,
            symbols = symbol_count,
            segments = path.len(),
            "rendered draw request"
        );

        Ok(Drawing {
            fractal,
            symbol_count,
            path,
        })
    }
}

/// Output of [`DrawRequest::render`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub fractal: Fractal,
    /// Length of the expanded symbol string.
    pub symbol_count: usize,
    pub path: TurtlePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let req: DrawRequest = serde_json::from_str(r#"{"fractalName":"tree1"}"#).unwrap();
        assert_eq!(req, DrawRequest::new("tree1"));
        assert_eq!(req.step_size, 10.0);
        assert_eq!(req.recursion_depth, 2);
    }

    #[test]
    fn fractal_name_is_required() {
        assert!(serde_json::from_str::<DrawRequest>(r#"{"stepSize":4}"#).is_err());
    }

    #[test]
    fn explicit_fields_are_used() {
        let req: DrawRequest = serde_json::from_str(
            r#"{"fractalName":"kochSnowflake","stepSize":2.5,"recursionDepth":1,"origin":[5.0,5.0]}"#,
        )
        .unwrap();
        let drawing = req.render().unwrap();
        assert_eq!(drawing.fractal, Fractal::KochSnowflake);
        assert_eq!(drawing.symbol_count, 28);
        assert_eq!(drawing.path.len(), 12);
        assert_eq!(drawing.path.segments[0].start, DVec2::new(5.0, 5.0));
        assert_eq!(drawing.path.segments[0].length(), 2.5);
    }

    #[test]
    fn unknown_fractal_is_named() {
        let err = DrawRequest::new("fern").render().unwrap_err();
        assert_eq!(err.to_string(), "unknown fractal name `fern`");
    }

    #[test]
    fn invalid_parameters_are_not_replaced_by_defaults() {
        let err = DrawRequest::new("tree2").with_step_size(0.0).render().unwrap_err();
        assert_eq!(err, LSystemError::NonPositiveStepSize(0.0));

        let err = DrawRequest::new("tree2")
            .with_recursion_depth(-3)
            .render()
            .unwrap_err();
        assert_eq!(err, LSystemError::InvalidDepth(-3));
    }

    #[test]
    fn non_finite_start_is_rejected_before_expansion() {
        let err = DrawRequest::new("tree1")
            .with_origin(DVec2::new(f64::NAN, 1.0))
            .render()
            .unwrap_err();
        assert!(matches!(err, LSystemError::NonFiniteOrigin { y, .. } if y == 1.0));

        let mut req = DrawRequest::new("tree1");
        req.initial_heading = f64::INFINITY;
        assert_eq!(req.render(), Err(LSystemError::NonFiniteHeading(f64::INFINITY)));
    }

    #[test]
    fn oversized_requests_are_refused() {
        let req = DrawRequest::new("tree1").with_recursion_depth(20);
        assert!(matches!(
            req.render(),
            Err(LSystemError::ExpansionTooLarge { .. })
        ));
    }
}
