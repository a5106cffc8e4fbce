//! Character-class heuristic estimator.
//!
//! Intentionally crude: length and character variety bonuses, a penalty
//! for heavy character repetition, clamped to the 0-4 scale. Used when
//! pattern-aware scoring is disabled; it produces no crack-time estimate.

use std::collections::HashMap;

use crate::estimator::{StrengthAssessment, StrengthEstimator};

/// Fallback estimator based on length and character classes.
pub struct HeuristicEstimator;

impl StrengthEstimator for HeuristicEstimator {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn estimate(&self, password: &str) -> StrengthAssessment {
        let mut score: i32 = 0;

        if password.chars().count() >= 12 {
            score += 2;
        } else if password.chars().count() >= 8 {
            score += 1;
        }

        if password.chars().any(|c| c.is_lowercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 1;
        }
        if password.chars().any(|c| !c.is_alphanumeric()) {
            score += 1;
        }

        let mut counts: HashMap<char, u32> = HashMap::new();
        for c in password.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        if counts.values().any(|&n| n >= 3) {
            score -= 1;
        }

        StrengthAssessment {
            score: score.clamp(0, 4) as u8,
            crack_time_display: None,
            crack_time_seconds: None,
        }
    }
}
