//! Strength estimator strategy trait and factory.
//!
//! The estimator is selected once at startup and injected into the
//! evaluator, so request handlers never branch on which backend is
//! available.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::heuristic::HeuristicEstimator;
use crate::zxcvbn::ZxcvbnEstimator;

/// Result of a local strength estimate.
///
/// Crack-time fields are `None` on the heuristic path, which has no attack
/// model to project from; they are omitted from JSON rather than set to
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// Strength score, 0 (weakest) to 4 (strongest).
    pub score: u8,
    /// Human-readable crack time, e.g. "3 hours" or "centuries".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crack_time_display: Option<String>,
    /// Crack time in seconds under the same attack model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crack_time_seconds: Option<f64>,
}

/// Trait for password strength backends.
pub trait StrengthEstimator: Send + Sync {
    /// Human-readable estimator name (e.g. "zxcvbn").
    fn name(&self) -> &str;

    /// Score a password. Pure: no I/O, no failure mode.
    fn estimate(&self, password: &str) -> StrengthAssessment;
}

/// Which estimator backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EstimatorKind {
    /// Pattern-aware zxcvbn scoring with crack-time projection.
    #[default]
    Zxcvbn,
    /// Character-class heuristic, no crack-time projection.
    Heuristic,
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorKind::Zxcvbn => write!(f, "zxcvbn"),
            EstimatorKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl FromStr for EstimatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zxcvbn" => Ok(EstimatorKind::Zxcvbn),
            "heuristic" | "fallback" => Ok(EstimatorKind::Heuristic),
            other => Err(format!("unknown estimator: {other}")),
        }
    }
}

/// Create an estimator instance for the given kind.
pub fn create_estimator(kind: EstimatorKind) -> Box<dyn StrengthEstimator> {
    match kind {
        EstimatorKind::Zxcvbn => Box::new(ZxcvbnEstimator),
        EstimatorKind::Heuristic => Box::new(HeuristicEstimator),
    }
}
