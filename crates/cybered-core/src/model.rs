//! Core data model types for cybered.
//!
//! These are the types the content store deserializes and the sanitized
//! views the HTTP surface is allowed to return. The full `QuizQuestion`
//! carries the correct answer and explanation; those never reach a client
//! before grading, so every outbound path goes through the `*View` types.

use serde::{Deserialize, Serialize};

/// The whole content dataset, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// All education modules, in display order.
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Dataset {
    /// Find a module by id.
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }
}

/// A single education module with its quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier within the dataset.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Short description shown in listings.
    #[serde(default)]
    pub summary: String,
    /// Quiz questions, in presentation order.
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
}

impl Module {
    /// Listing entry: metadata plus question count, no quiz content.
    pub fn summary_view(&self) -> ModuleSummary {
        ModuleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            quiz_count: self.quiz.len(),
        }
    }

    /// Full module view with the quiz sanitized for clients.
    pub fn detail_view(&self) -> ModuleDetail {
        ModuleDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            quiz: self.quiz.iter().map(QuizQuestion::sanitized).collect(),
        }
    }
}

/// A quiz question as stored, including the answer key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Unique identifier within the module.
    pub id: String,
    /// Question text.
    pub question: String,
    /// Display strings for the choices.
    pub options: Vec<String>,
    /// Index into `options` of the correct choice.
    pub answer: usize,
    /// Shown to the learner after grading.
    #[serde(default)]
    pub explanation: String,
}

impl QuizQuestion {
    /// Client-facing view: id, text, and options only.
    pub fn sanitized(&self) -> QuestionView {
        QuestionView {
            id: self.id.clone(),
            question: self.question.clone(),
            options: self.options.clone(),
        }
    }
}

/// Listing entry for a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Number of questions in the module's quiz.
    pub quiz_count: usize,
}

/// Module detail with the answer key stripped from every question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDetail {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub quiz: Vec<QuestionView>,
}

/// A quiz question with the answer and explanation withheld.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_module() -> Module {
        Module {
            id: "m1".into(),
            title: "Password Hygiene".into(),
            summary: "Why reuse is risky".into(),
            quiz: vec![QuizQuestion {
                id: "q1".into(),
                question: "Best storage for passwords?".into(),
                options: vec!["Sticky note".into(), "Password manager".into()],
                answer: 1,
                explanation: "Managers generate and store unique passwords.".into(),
            }],
        }
    }

    #[test]
    fn sanitized_view_has_no_answer_fields() {
        let module = sample_module();
        let json = serde_json::to_value(module.detail_view()).unwrap();
        let question = &json["quiz"][0];
        assert!(question.get("answer").is_none());
        assert!(question.get("explanation").is_none());
        assert_eq!(question["id"], "q1");
        assert_eq!(question["options"][1], "Password manager");
    }

    #[test]
    fn summary_view_counts_questions() {
        let module = sample_module();
        let summary = module.summary_view();
        assert_eq!(summary.quiz_count, 1);
        assert_eq!(summary.quiz_count, module.detail_view().quiz.len());
    }

    #[test]
    fn dataset_lookup_by_id() {
        let dataset = Dataset {
            modules: vec![sample_module()],
        };
        assert!(dataset.module("m1").is_some());
        assert!(dataset.module("nope").is_none());
    }

    #[test]
    fn summary_defaults_to_empty() {
        let json = r#"{"id": "m2", "title": "T", "quiz": []}"#;
        let module: Module = serde_json::from_str(json).unwrap();
        assert_eq!(module.summary, "");
        assert!(module.quiz.is_empty());
    }
}
