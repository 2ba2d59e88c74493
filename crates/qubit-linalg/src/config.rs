use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Absolute tolerance used by every closeness check in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub atol: f64,
}

impl Tolerance {
    pub const DEFAULT_ATOL: f64 = 1e-8;

    pub fn new(atol: f64) -> Self {
        Self { atol }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            atol: Self::DEFAULT_ATOL,
        }
    }
}

/// Which eigensolver path `eigen_with` takes.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EigenStrategy {
    /// Use the Hermitian solver when the input is Hermitian, otherwise the general one.
    #[default]
    Auto,
    Hermitian,
    General,
}

impl FromStr for EigenStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(EigenStrategy::Auto),
            "hermitian" => Ok(EigenStrategy::Hermitian),
            "general" => Ok(EigenStrategy::General),
            _ => Err(format!(
                "Unknown eigen strategy: {}. Expected one of `auto`, `hermitian`, `general`",
                s
            )),
        }
    }
}

/// Settings for the spectral layer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EigenConfig {
    pub tolerance: Tolerance,
    pub max_iterations: usize,
    pub strategy: EigenStrategy,
}

impl EigenConfig {
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

    pub fn new(tolerance: Tolerance, max_iterations: usize, strategy: EigenStrategy) -> Self {
        Self {
            tolerance,
            max_iterations,
            strategy,
        }
    }
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            strategy: EigenStrategy::Auto,
        }
    }
}
