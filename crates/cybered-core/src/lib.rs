//! cybered-core — Content model, store, and quiz grading.
//!
//! This crate defines the module/quiz data model, the JSON-backed content
//! store, and the grading engine that the HTTP surface builds on.

pub mod error;
pub mod grader;
pub mod model;
pub mod store;

pub use error::ContentError;
pub use store::ContentStore;
