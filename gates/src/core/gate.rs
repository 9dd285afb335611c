//! Gate kinds and the aggregation of predicate results.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Logic gate applied across an ordered sequence of predicate results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// True if every result is true.
    And,
    /// True if at least one result is false.
    Nand,
    /// True if at least one result is true.
    Or,
    /// True if every result is false.
    Nor,
    /// True if the results are mixed.
    Xor,
    /// True if the results all agree.
    Xnor,
}

impl Gate {
    pub const ALL: [Gate; 6] = [
        Gate::And,
        Gate::Nand,
        Gate::Or,
        Gate::Nor,
        Gate::Xor,
        Gate::Xnor,
    ];

    /// Aggregate `results` in order, stopping as soon as the outcome is known.
    ///
    /// `results` is pulled lazily, so a stream like
    /// `predicates.iter().map(|p| p(x))` only invokes the prefix of predicates
    /// the gate needs:
    ///
    /// - `And`/`Nand` stop at the first `false`.
    /// - `Or`/`Nor` stop at the first `true`.
    /// - `Xor`/`Xnor` take the first result as the reference value and stop at
    ///   the first result that disagrees with it.
    ///
    /// An empty stream yields the gate's identity convention: `And`, `Nor` and
    /// `Xnor` are true; `Nand`, `Or` and `Xor` are false.
    pub fn evaluate<I>(self, results: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let mut results = results.into_iter();
        match self {
            Gate::And => results.all(|result| result),
            Gate::Nand => !results.all(|result| result),
            Gate::Or => results.any(|result| result),
            Gate::Nor => !results.any(|result| result),
            Gate::Xor => is_mixed(results),
            Gate::Xnor => !is_mixed(results),
        }
    }

    /// The gate whose output is always the inverse of this one.
    pub fn negated(self) -> Gate {
        match self {
            Gate::And => Gate::Nand,
            Gate::Nand => Gate::And,
            Gate::Or => Gate::Nor,
            Gate::Nor => Gate::Or,
            Gate::Xor => Gate::Xnor,
            Gate::Xnor => Gate::Xor,
        }
    }

    /// True for gates that compare every result against the first one.
    pub fn compares_reference(self) -> bool {
        matches!(self, Gate::Xor | Gate::Xnor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gate::And => "and",
            Gate::Nand => "nand",
            Gate::Or => "or",
            Gate::Nor => "nor",
            Gate::Xor => "xor",
            Gate::Xnor => "xnor",
        }
    }
}

fn is_mixed(mut results: impl Iterator<Item = bool>) -> bool {
    match results.next() {
        Some(reference) => results.any(|result| result != reference),
        None => false,
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gate {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let name = raw.trim().to_ascii_lowercase();
        Gate::ALL
            .into_iter()
            .find(|gate| gate.as_str() == name)
            .ok_or_else(|| anyhow!("unknown gate '{}'", raw))
    }
}
