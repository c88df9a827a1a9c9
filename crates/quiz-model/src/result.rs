use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::QuizDocument;

/// A user's answer to one question.
///
/// Variant order matters for untagged deserialization: booleans are tried
/// before strings, strings before arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// True/false answer.
    Bool(bool),
    /// Free text, or a selected option id for single choice.
    Text(String),
    /// Selected option ids for multiple choice.
    Many(Vec<String>),
}

/// The graded-submission record. Created once per submission and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    pub version: String,
    pub metadata: ResultMetadata,
    /// Snapshot of the quiz that was answered.
    pub quiz: QuizDocument,
    pub answers: BTreeMap<String, AnswerValue>,
    pub scoring: Scoring,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub id: String,
    pub quiz_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoring {
    pub total_score: f64,
    pub max_score: f64,
    /// 0–100, exact where the division is exact.
    pub percentage: f64,
    pub passed: bool,
    pub passing_score: f64,
    pub question_results: Vec<QuestionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: String,
    pub correct: bool,
    pub points_awarded: f64,
    pub points_possible: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_value_untagged_forms() {
        let boolean: AnswerValue = serde_json::from_str("true").unwrap();
        assert_eq!(boolean, AnswerValue::Bool(true));
        let text: AnswerValue = serde_json::from_str("\"opt-1\"").unwrap();
        assert_eq!(text, AnswerValue::Text("opt-1".into()));
        let many: AnswerValue = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(many, AnswerValue::Many(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn scoring_serializes_camel_case() {
        let scoring = Scoring {
            total_score: 10.0,
            max_score: 20.0,
            percentage: 50.0,
            passed: false,
            passing_score: 60.0,
            question_results: vec![QuestionResult {
                question_id: "q1".into(),
                correct: true,
                points_awarded: 10.0,
                points_possible: 10.0,
            }],
        };
        let value = serde_json::to_value(&scoring).unwrap();
        assert_eq!(value["totalScore"], 10.0);
        assert_eq!(value["questionResults"][0]["questionId"], "q1");
    }
}
