//! Quiz grading engine.
//!
//! Grading walks the module's answer key, not the submission: every key
//! question produces exactly one result, submitted answers for unknown
//! question ids are silently ignored, and an unanswered question counts
//! as incorrect.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Module;

/// A quiz submission: question id to chosen option index.
///
/// Partial submissions are allowed; negative or non-integer indexes are
/// rejected during deserialization, before grading runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub answers: HashMap<String, usize>,
}

/// Per-question grading outcome. Wire names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: String,
    pub correct: bool,
    pub correct_index: usize,
    /// The submitted index, or `null` when the question was unanswered.
    pub your_index: Option<usize>,
    pub explanation: String,
}

/// Aggregate grading outcome for one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// Number of correctly answered questions.
    pub score: usize,
    /// Number of questions in the module's quiz.
    pub total: usize,
    /// One result per key question, in quiz order.
    pub results: Vec<QuestionResult>,
}

/// Grade a submission against a module's quiz.
///
/// Deterministic: the same module and submission always produce the same
/// report, with results in the module's question order.
pub fn grade(module: &Module, submission: &Submission) -> GradeReport {
    let mut results = Vec::with_capacity(module.quiz.len());
    let mut score = 0;

    for question in &module.quiz {
        let your_index = submission.answers.get(&question.id).copied();
        let correct = your_index == Some(question.answer);
        if correct {
            score += 1;
        }
        results.push(QuestionResult {
            question_id: question.id.clone(),
            correct,
            correct_index: question.answer,
            your_index,
            explanation: question.explanation.clone(),
        });
    }

    GradeReport {
        score,
        total: module.quiz.len(),
        results,
    }
}
