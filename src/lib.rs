//! # lsystem-turtle
//!
//! Deterministic, context-free L-System expansion and 2D turtle-graphics
//! interpretation.
//!
//! The pipeline is `GrammarSpec` → [`expand`] → symbol string → [`interpret`]
//! → ordered [`DrawCommand`] segments, ready for any renderer to stroke.
//! Eight reference fractals ship in the [`Fractal`] catalog, and
//! [`DrawRequest`] bundles the host-supplied parameters for one draw.
//!
//! ```
//! use glam::DVec2;
//! use lsystem_turtle::{expand, interpret, Fractal};
//!
//! let spec = Fractal::Tree1.grammar();
//! let symbols = expand(&spec, 2).unwrap();
//! let path = interpret(&spec, &symbols, DVec2::ZERO, 90.0, 10.0).unwrap();
//! assert_eq!(path.len(), 25);
//! ```

pub mod catalog;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod path;
pub mod request;
pub mod rewrite;
pub mod turtle;

pub use catalog::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use path::*;
pub use request::*;
pub use rewrite::*;
pub use turtle::*;
