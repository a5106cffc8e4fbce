//! zxcvbn-backed estimator.
//!
//! Crack times are taken from the offline slow-hashing model (1e4
//! guesses/second), matching the threat model shown to learners.

use zxcvbn::Score;

use crate::estimator::{StrengthAssessment, StrengthEstimator};

/// Pattern-aware estimator built on the zxcvbn crate.
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn name(&self) -> &str {
        "zxcvbn"
    }

    fn estimate(&self, password: &str) -> StrengthAssessment {
        let entropy = zxcvbn::zxcvbn(password, &[]);

        let score = match entropy.score() {
            Score::Zero => 0,
            Score::One => 1,
            Score::Two => 2,
            Score::Three => 3,
            _ => 4,
        };

        let crack_time = entropy.crack_times().offline_slow_hashing_1e4_per_second();
        let seconds = std::time::Duration::from(crack_time).as_secs_f64();

        StrengthAssessment {
            score,
            crack_time_display: Some(crack_time.to_string()),
            crack_time_seconds: Some(seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_password_scores_low() {
        let assessment = ZxcvbnEstimator.estimate("password");
        assert!(assessment.score <= 1);
    }

    #[test]
    fn strong_password_scores_high() {
        let assessment = ZxcvbnEstimator.estimate("correct horse battery staple grows");
        assert!(assessment.score >= 3);
    }

    #[test]
    fn crack_times_are_populated() {
        let assessment = ZxcvbnEstimator.estimate("Tr4vel!Mug#9");
        assert!(assessment.crack_time_display.is_some());
        assert!(assessment.crack_time_seconds.unwrap() >= 0.0);
    }

    #[test]
    fn stronger_password_takes_longer_to_crack() {
        let weak = ZxcvbnEstimator.estimate("abc123");
        let strong = ZxcvbnEstimator.estimate("correct horse battery staple grows");
        assert!(weak.crack_time_seconds.unwrap() < strong.crack_time_seconds.unwrap());
    }
}
