use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::SirError;

/// Immutable per-run configuration shared by both engines.
///
/// `step` and `population_size` only matter to the continuous engine, and
/// `seed` only to the stochastic one; each engine validates the fields it
/// reads at construction and ignores the rest.
#[derive(Serialize, Deserialize, Clone, Debug, Builder)]
pub struct Parameters {
    /// Transmission rate `beta`.
    #[builder(default = "2.0")]
    pub beta: f64,

    /// Recovery rate `gamma`.
    #[builder(default = "0.4")]
    pub gamma: f64,

    /// Simulation horizon `tmax`.
    #[builder(default = "50.0")]
    pub max_time: f64,

    /// Fixed integration step for the continuous engine.
    #[builder(default = "0.01")]
    pub step: f64,

    /// Scale for reporting absolute counts from normalized fractions.
    #[builder(default = "1000.0")]
    pub population_size: f64,

    /// Base seed for the stochastic engine's random stream.
    #[builder(default = "0")]
    pub seed: u64,
}

impl Default for Parameters {
    fn default() -> Self {
        ParametersBuilder::default().build().unwrap()
    }
}

impl Parameters {
    /// Reads parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SirError> {
        let contents = std::fs::read_to_string(path)?;
        let parameters: Parameters = serde_json::from_str(&contents)?;
        Ok(parameters)
    }

    /// Rejects rate and horizon values neither engine can run with. The
    /// negated comparisons also reject NaN. Transmission may be zero for the
    /// mean-field model (pure exponential recovery); the stochastic engine
    /// additionally requires `beta > 0` at construction.
    pub fn validate(&self) -> Result<(), SirError> {
        if !(self.beta >= 0.0) {
            return Err(SirError::Config(format!(
                "beta must be non-negative, got {}",
                self.beta
            )));
        }
        if !(self.gamma > 0.0) {
            return Err(SirError::Config(format!(
                "gamma must be positive, got {}",
                self.gamma
            )));
        }
        if !(self.max_time > 0.0) {
            return Err(SirError::Config(format!(
                "max_time must be positive, got {}",
                self.max_time
            )));
        }
        Ok(())
    }
}
