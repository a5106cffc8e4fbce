//! Combined password evaluation.
//!
//! Merges the local strength estimate with the remote breach lookup. The
//! two parts are independent; the strength estimate is pure and cheap, so
//! it runs inline while the lookup awaits the network. A failed lookup
//! degrades to "not breached" instead of failing the evaluation.

use serde::Serialize;
use tracing::instrument;

use crate::estimator::StrengthEstimator;
use crate::hibp::{BreachDirectory, BreachReport};

/// Full result of checking one password.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordCheck {
    pub breached: bool,
    pub breach_count: u64,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crack_time_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crack_time_seconds: Option<f64>,
}

/// Evaluates passwords against a strength estimator and a breach directory,
/// both chosen at startup.
pub struct PasswordEvaluator {
    estimator: Box<dyn StrengthEstimator>,
    directory: Box<dyn BreachDirectory>,
}

impl PasswordEvaluator {
    pub fn new(estimator: Box<dyn StrengthEstimator>, directory: Box<dyn BreachDirectory>) -> Self {
        Self {
            estimator,
            directory,
        }
    }

    /// Evaluate a password. Never fails: breach lookup errors are logged
    /// and reported as `breached: false, breach_count: 0`.
    #[instrument(skip_all, fields(estimator = self.estimator.name()))]
    pub async fn evaluate(&self, password: &str) -> PasswordCheck {
        let strength = self.estimator.estimate(password);

        let breach = match self.directory.lookup(password).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, "breach lookup failed, degrading to not breached");
                BreachReport::default()
            }
        };

        PasswordCheck {
            breached: breach.breached,
            breach_count: breach.breach_count,
            score: strength.score,
            crack_time_display: strength.crack_time_display,
            crack_time_seconds: strength.crack_time_seconds,
        }
    }
}
