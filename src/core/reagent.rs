use serde::{Deserialize, Serialize};

/// A candidate reagent read from a SMILES file.
///
/// Besides its identity (name + SMILES), the record carries the two scalars
/// that seed a Bayesian prior over the reagent's unknown mean score. The
/// record is immutable after construction: all prior-update arithmetic
/// belongs to the downstream selection engine, which consumes these fields
/// read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
    /// Reagent identifier (second token on its source line)
    name: String,

    /// SMILES string for the structure (first token on its source line)
    smiles: String,

    /// Floor on the prior's uncertainty about the mean score
    minimum_uncertainty: f64,

    /// Assumed standard deviation of the scoring distribution
    known_std: f64,
}

impl Reagent {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        smiles: impl Into<String>,
        minimum_uncertainty: f64,
        known_std: f64,
    ) -> Self {
        Self {
            name: name.into(),
            smiles: smiles.into(),
            minimum_uncertainty,
            known_std,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn smiles(&self) -> &str {
        &self.smiles
    }

    #[must_use]
    pub fn minimum_uncertainty(&self) -> f64 {
        self.minimum_uncertainty
    }

    #[must_use]
    pub fn known_std(&self) -> f64 {
        self.known_std
    }
}

impl std::fmt::Display for Reagent {
    /// Formats the reagent the way its source line reads: `<smiles> <name>`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.smiles, self.name)
    }
}
