use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::question::Question;

/// Version string written into freshly produced documents.
pub const CURRENT_VERSION: &str = "1.0.0";

/// Root of the Quiz DSL: a versioned envelope around a single quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDocument {
    pub version: String,
    pub quiz: Quiz,
}

/// A quiz holds either structured `sections` or a legacy flat `questions`
/// list, never both. The validator enforces the exclusivity; the typed model
/// keeps both containers optional so round-tripped documents stay faithful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Opaque application data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<QuizSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
}

impl Quiz {
    /// Iterate every question in document order, whichever container holds
    /// them. Section questions come first (a valid document has only one
    /// container populated anyway).
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        let sectioned = self
            .sections
            .iter()
            .flatten()
            .flat_map(|section| section.questions.iter());
        let flat = self.questions.iter().flatten();
        sectioned.chain(flat)
    }
}

/// Presentation and grading knobs. All fields are optional and additive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_questions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shuffle_options: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_explanation: Option<bool>,
    /// Time limit in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u64>,
}

/// A titled group of questions, owned exclusively by its parent quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}
