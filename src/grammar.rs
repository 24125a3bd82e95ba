//! Immutable grammar descriptors.
//!
//! A [`GrammarSpec`] pairs an axiom with a set of deterministic, context-free
//! [`ProductionRule`]s and the turn angle used by `+`/`-`. Validation happens
//! once in [`GrammarSpec::new`]; every later operation can assume a
//! well-formed grammar.

use crate::error::GrammarError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Replaces a single predecessor symbol with a successor string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRule {
    pub predecessor: char,
    pub successor: String,
}

impl ProductionRule {
    pub fn new(predecessor: char, successor: impl Into<String>) -> Self {
        Self {
            predecessor,
            successor: successor.into(),
        }
    }
}

/// A validated L-System grammar.
///
/// Symbols without a rule are terminal and copied through unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawGrammar", into = "RawGrammar")]
pub struct GrammarSpec {
    axiom: String,
    /// Declaration order is preserved for display and serialization.
    rules: Vec<ProductionRule>,
    /// Predecessor -> index into `rules`.
    index: HashMap<char, usize>,
    turn_angle: f64,
}

impl GrammarSpec {
    /// Builds a grammar, rejecting an empty axiom, a non-positive or
    /// non-finite `turn_angle` (degrees), and more than one rule per symbol.
    pub fn new(
        axiom: impl Into<String>,
        rules: impl IntoIterator<Item = ProductionRule>,
        turn_angle: f64,
    ) -> Result<Self, GrammarError> {
        let axiom = axiom.into();
        if axiom.is_empty() {
            return Err(GrammarError::EmptyAxiom);
        }
        if !turn_angle.is_finite() || turn_angle <= 0.0 {
            return Err(GrammarError::InvalidTurnAngle(turn_angle));
        }

        let rules: Vec<ProductionRule> = rules.into_iter().collect();
        let mut index = HashMap::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            if index.insert(rule.predecessor, i).is_some() {
                return Err(GrammarError::DuplicateRule {
                    symbol: rule.predecessor,
                });
            }
        }

        Ok(Self {
            axiom,
            rules,
            index,
            turn_angle,
        })
    }

    /// Convenience constructor from `(predecessor, successor)` pairs.
    pub fn from_pairs(
        axiom: &str,
        pairs: &[(char, &str)],
        turn_angle: f64,
    ) -> Result<Self, GrammarError> {
        Self::new(
            axiom,
            pairs.iter().map(|&(p, s)| ProductionRule::new(p, s)),
            turn_angle,
        )
    }

    /// Builds a grammar from literal data that is known to be valid.
    ///
    /// Only the built-in catalog uses this; its entries are checked against
    /// [`GrammarSpec::new`] in the catalog tests.
    pub(crate) fn from_trusted_pairs(axiom: &str, pairs: &[(char, &str)], turn_angle: f64) -> Self {
        let rules: Vec<ProductionRule> = pairs
            .iter()
            .map(|&(p, s)| ProductionRule::new(p, s))
            .collect();
        let index = rules
            .iter()
            .enumerate()
            .map(|(i, r)| (r.predecessor, i))
            .collect();
        Self {
            axiom: axiom.to_owned(),
            rules,
            index,
            turn_angle,
        }
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rules(&self) -> &[ProductionRule] {
        &self.rules
    }

    /// Turn angle in degrees.
    pub fn turn_angle(&self) -> f64 {
        self.turn_angle
    }

    /// Returns the successor for `symbol`, or `None` if it is terminal.
    pub fn rule_for(&self, symbol: char) -> Option<&str> {
        self.index
            .get(&symbol)
            .map(|&i| self.rules[i].successor.as_str())
    }
}

impl PartialEq for GrammarSpec {
    fn eq(&self, other: &Self) -> bool {
        self.axiom == other.axiom
            && self.rules == other.rules
            && self.turn_angle == other.turn_angle
    }
}

/// Wire shape of a grammar; converted through [`GrammarSpec::new`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGrammar {
    axiom: String,
    rules: Vec<ProductionRule>,
    turn_angle: f64,
}

impl TryFrom<RawGrammar> for GrammarSpec {
    type Error = GrammarError;

    fn try_from(raw: RawGrammar) -> Result<Self, Self::Error> {
        GrammarSpec::new(raw.axiom, raw.rules, raw.turn_angle)
    }
}

impl From<GrammarSpec> for RawGrammar {
    fn from(spec: GrammarSpec) -> Self {
        Self {
            axiom: spec.axiom,
            rules: spec.rules,
            turn_angle: spec.turn_angle,
        }
    }
}
