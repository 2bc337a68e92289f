use serde::{Deserialize, Serialize};

/// Prior seed parameters applied uniformly to every reagent in a load.
///
/// `minimum_uncertainty` keeps the prior from starting overconfident when the
/// first few observed scores happen to cluster; higher values favor
/// exploration, lower values favor exploitation. `known_std` is the assumed
/// standard deviation of the scoring function's output distribution and
/// should be proportional to the range of values it can produce.
///
/// Neither value is validated here: both are forwarded to each constructed
/// record unchanged, and callers are expected to supply non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorSettings {
    /// Floor on the prior's uncertainty about the mean score
    pub minimum_uncertainty: f64,

    /// Assumed standard deviation of the scoring distribution
    pub known_std: f64,
}

impl PriorSettings {
    #[must_use]
    pub fn new(minimum_uncertainty: f64, known_std: f64) -> Self {
        Self {
            minimum_uncertainty,
            known_std,
        }
    }
}
