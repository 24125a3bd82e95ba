//! Round-synchronous symbol rewriting.
//!
//! Each round is a single left-to-right pass: every symbol is replaced by its
//! successor (or copied unchanged when terminal). Symbols produced during a
//! round are never rewritten again in that same round.

use crate::error::LSystemError;
use crate::grammar::GrammarSpec;

/// Applies exactly one substitution pass to `symbols`.
pub fn apply_round(spec: &GrammarSpec, symbols: &str) -> String {
    let mut out = String::with_capacity(symbols.len() * 2);
    for sym in symbols.chars() {
        match spec.rule_for(sym) {
            Some(successor) => out.push_str(successor),
            None => out.push(sym),
        }
    }
    out
}

/// Expands the axiom of `spec` through `depth` rounds.
///
/// `depth == 0` returns the axiom. Negative depths are rejected before any
/// rewriting happens. Growth is not bounded here; see [`expand_bounded`].
pub fn expand(spec: &GrammarSpec, depth: i32) -> Result<String, LSystemError> {
    let rounds = check_depth(depth)?;
    let mut current = spec.axiom().to_owned();
    for _ in 0..rounds {
        current = apply_round(spec, &current);
    }
    tracing::debug!(
        depth,
        axiom_symbols = spec.axiom().chars().count(),
        output_symbols = current.chars().count(),
        "expanded grammar"
    );
    Ok(current)
}

/// Like [`expand`], but refuses to start when the projected output length
/// exceeds `limit` symbols.
pub fn expand_bounded(spec: &GrammarSpec, depth: i32, limit: u64) -> Result<String, LSystemError> {
    let projected = projected_length(spec, depth)?;
    if projected > limit {
        tracing::warn!(depth, projected, limit, "rejected oversized expansion");
        return Err(LSystemError::ExpansionTooLarge { projected, limit });
    }
    expand(spec, depth)
}

/// Number of symbols `expand(spec, depth)` would produce, computed without
/// expanding.
///
/// Builds the growth matrix `M[a][b]` (how many `b` one round turns an `a`
/// into) and raises it to `depth` by repeated squaring, so the cost is
/// logarithmic in `depth`. Counts saturate at `u64::MAX`.
pub fn projected_length(spec: &GrammarSpec, depth: i32) -> Result<u64, LSystemError> {
    let rounds = check_depth(depth)?;

    let mut alphabet: Vec<char> = spec.axiom().chars().collect();
    for rule in spec.rules() {
        alphabet.push(rule.predecessor);
        alphabet.extend(rule.successor.chars());
    }
    alphabet.sort_unstable();
    alphabet.dedup();
    let slot = |c: char| alphabet.binary_search(&c).unwrap_or_default();

    let n = alphabet.len();
    let mut growth = vec![vec![0u64; n]; n];
    for (i, &c) in alphabet.iter().enumerate() {
        match spec.rule_for(c) {
            Some(successor) => {
                for s in successor.chars() {
                    growth[i][slot(s)] += 1;
                }
            }
            None => growth[i][i] = 1,
        }
    }

    // lengths[a] = symbols produced by a single `a` after the rounds applied so far.
    let mut lengths = vec![1u64; n];
    let mut remaining = rounds;
    while remaining > 0 {
        if remaining & 1 == 1 {
            lengths = mat_vec(&growth, &lengths);
        }
        remaining >>= 1;
        if remaining > 0 {
            growth = mat_mul(&growth, &growth);
        }
    }

    Ok(spec
        .axiom()
        .chars()
        .fold(0u64, |acc, c| acc.saturating_add(lengths[slot(c)])))
}

fn mat_mul(a: &[Vec<u64>], b: &[Vec<u64>]) -> Vec<Vec<u64>> {
    let n = a.len();
    let mut out = vec![vec![0u64; n]; n];
    for i in 0..n {
        for k in 0..n {
            let aik = a[i][k];
            if aik == 0 {
                continue;
            }
            for j in 0..n {
                out[i][j] = out[i][j].saturating_add(aik.saturating_mul(b[k][j]));
            }
        }
    }
    out
}

fn mat_vec(m: &[Vec<u64>], v: &[u64]) -> Vec<u64> {
    m.iter()
        .map(|row| {
            row.iter()
                .zip(v)
                .fold(0u64, |acc, (&a, &b)| acc.saturating_add(a.saturating_mul(b)))
        })
        .collect()
}

fn check_depth(depth: i32) -> Result<u32, LSystemError> {
    u32::try_from(depth).map_err(|_| LSystemError::InvalidDepth(depth))
}
