//! The built-in catalog of reference fractals.
//!
//! | Name                 | Axiom          | Rules                                         | Angle |
//! |----------------------|----------------|-----------------------------------------------|-------|
//! | `kochSnowflake`      | `F++F++F`      | `F → F-F++F-F`                                | 60    |
//! | `dragonCurve`        | `FX`           | `F → F`, `X → X+YF+`, `Y → -FX-Y`             | 90    |
//! | `sierpinskiTriangle` | `FXF--FF--FF`  | `F → FF`, `X → --FXF++FXF++FXF--`             | 60    |
//! | `hilbertCurve`       | `X`            | `F → F`, `X → -YF+XFX+FY-`, `Y → +XF-YFY-FX+` | 90    |
//! | `tree1`              | `F`            | `F → F[+F]F[-F]F`                             | 25.7  |
//! | `tree2`              | `F`            | `F → F[+F]F[-F][F]`                           | 20    |
//! | `tree3`              | `X`            | `F → F`, `X → F[+X][-X]FX`                    | 25.7  |
//! | `tree4`              | `F`            | `F → -F[-F+F-F]+[+F-F-F]`                     | 20    |

use crate::error::LSystemError;
use crate::grammar::GrammarSpec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects one entry from the fixed catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fractal {
    KochSnowflake,
    DragonCurve,
    SierpinskiTriangle,
    HilbertCurve,
    Tree1,
    Tree2,
    Tree3,
    Tree4,
}

impl Fractal {
    pub const ALL: [Fractal; 8] = [
        Fractal::KochSnowflake,
        Fractal::DragonCurve,
        Fractal::SierpinskiTriangle,
        Fractal::HilbertCurve,
        Fractal::Tree1,
        Fractal::Tree2,
        Fractal::Tree3,
        Fractal::Tree4,
    ];

    /// The host-facing identifier, e.g. `"kochSnowflake"`.
    pub fn name(self) -> &'static str {
        match self {
            Fractal::KochSnowflake => "kochSnowflake",
            Fractal::DragonCurve => "dragonCurve",
            Fractal::SierpinskiTriangle => "sierpinskiTriangle",
            Fractal::HilbertCurve => "hilbertCurve",
            Fractal::Tree1 => "tree1",
            Fractal::Tree2 => "tree2",
            Fractal::Tree3 => "tree3",
            Fractal::Tree4 => "tree4",
        }
    }

    /// Returns the grammar for this entry.
    pub fn grammar(self) -> GrammarSpec {
        match self {
            Fractal::KochSnowflake => {
                GrammarSpec::from_trusted_pairs("F++F++F", &[('F', "F-F++F-F")], 60.0)
            }
            Fractal::DragonCurve => GrammarSpec::from_trusted_pairs(
                "FX",
                &[('F', "F"), ('X', "X+YF+"), ('Y', "-FX-Y")],
                90.0,
            ),
            Fractal::SierpinskiTriangle => GrammarSpec::from_trusted_pairs(
                "FXF--FF--FF",
                &[('F', "FF"), ('X', "--FXF++FXF++FXF--")],
                60.0,
            ),
            Fractal::HilbertCurve => GrammarSpec::from_trusted_pairs(
                "X",
                &[('F', "F"), ('X', "-YF+XFX+FY-"), ('Y', "+XF-YFY-FX+")],
                90.0,
            ),
            Fractal::Tree1 => GrammarSpec::from_trusted_pairs("F", &[('F', "F[+F]F[-F]F")], 25.7),
            Fractal::Tree2 => {
                GrammarSpec::from_trusted_pairs("F", &[('F', "F[+F]F[-F][F]")], 20.0)
            }
            Fractal::Tree3 => GrammarSpec::from_trusted_pairs(
                "X",
                &[('F', "F"), ('X', "F[+X][-X]FX")],
                25.7,
            ),
            Fractal::Tree4 => {
                GrammarSpec::from_trusted_pairs("F", &[('F', "-F[-F+F-F]+[+F-F-F]")], 20.0)
            }
        }
    }
}

impl fmt::Display for Fractal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fractal {
    type Err = LSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fractal::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| LSystemError::UnknownFractal(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_entry_passes_validation() {
        for fractal in Fractal::ALL {
            let spec = fractal.grammar();
            let pairs: Vec<(char, &str)> = spec
                .rules()
                .iter()
                .map(|r| (r.predecessor, r.successor.as_str()))
                .collect();
            let checked = GrammarSpec::from_pairs(spec.axiom(), &pairs, spec.turn_angle())
                .unwrap_or_else(|e| panic!("{fractal} is invalid: {e}"));
            assert_eq!(checked, spec);
        }
    }

    #[rstest]
    #[case(Fractal::KochSnowflake, "F++F++F", 60.0)]
    #[case(Fractal::DragonCurve, "FX", 90.0)]
    #[case(Fractal::SierpinskiTriangle, "FXF--FF--FF", 60.0)]
    #[case(Fractal::HilbertCurve, "X", 90.0)]
    #[case(Fractal::Tree1, "F", 25.7)]
    #[case(Fractal::Tree2, "F", 20.0)]
    #[case(Fractal::Tree3, "X", 25.7)]
    #[case(Fractal::Tree4, "F", 20.0)]
    fn literal_axiom_and_angle(#[case] fractal: Fractal, #[case] axiom: &str, #[case] angle: f64) {
        let spec = fractal.grammar();
        assert_eq!(spec.axiom(), axiom);
        assert_eq!(spec.turn_angle(), angle);
    }

    #[test]
    fn literal_rules() {
        let hilbert = Fractal::HilbertCurve.grammar();
        assert_eq!(hilbert.rule_for('X'), Some("-YF+XFX+FY-"));
        assert_eq!(hilbert.rule_for('Y'), Some("+XF-YFY-FX+"));
        assert_eq!(
            Fractal::SierpinskiTriangle.grammar().rule_for('X'),
            Some("--FXF++FXF++FXF--")
        );
        assert_eq!(Fractal::Tree2.grammar().rule_for('F'), Some("F[+F]F[-F][F]"));
        assert_eq!(Fractal::Tree4.grammar().rule_for('F'), Some("-F[-F+F-F]+[+F-F-F]"));
    }

    #[test]
    fn names_round_trip() {
        for fractal in Fractal::ALL {
            assert_eq!(fractal.name().parse::<Fractal>().unwrap(), fractal);
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "mandelbrot".parse::<Fractal>().unwrap_err();
        assert_eq!(err, LSystemError::UnknownFractal("mandelbrot".into()));
    }

    #[test]
    fn serde_uses_host_names() {
        let json = serde_json::to_string(&Fractal::SierpinskiTriangle).unwrap();
        assert_eq!(json, "\"sierpinskiTriangle\"");
        let back: Fractal = serde_json::from_str("\"tree3\"").unwrap();
        assert_eq!(back, Fractal::Tree3);
    }
}
