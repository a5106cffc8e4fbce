//! cybered-password — Strength estimation and breach lookup.
//!
//! Implements the `StrengthEstimator` strategy (zxcvbn-backed, with a
//! character-class heuristic fallback) and the `BreachDirectory` trait
//! backed by a Have I Been Pwned style k-anonymity range API, plus the
//! evaluator that merges both into one password check.

pub mod error;
pub mod estimator;
pub mod evaluator;
pub mod heuristic;
pub mod hibp;
pub mod zxcvbn;

pub use error::BreachError;
pub use estimator::{create_estimator, EstimatorKind, StrengthAssessment, StrengthEstimator};
pub use evaluator::{PasswordCheck, PasswordEvaluator};
pub use hibp::{BreachDirectory, BreachReport, HibpClient};
