//! Structural walk over an untyped JSON value, mirroring the data model.
//!
//! The walk accumulates every violation it can reach rather than stopping
//! at the first, short-circuiting a subtree only when a container-level
//! failure makes descending meaningless (non-object root, non-object
//! `quiz`). Errors are appended in traversal order with no sorting or
//! deduplication.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use quiz_model::{ErrorCode, ValidationError};

/// Outcome of a validation pass. `valid` is true exactly when `errors`
/// is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validate an untyped value against the Quiz DSL schema. Never panics;
/// malformed input of any shape produces a report, not an error.
pub fn validate(input: &Value) -> ValidationReport {
    let mut walker = Walker::default();
    walker.document(input);
    debug!(errors = walker.errors.len(), "validated quiz document");
    ValidationReport {
        valid: walker.errors.is_empty(),
        errors: walker.errors,
    }
}

/// Walker state: the error accumulator and the per-document question-id
/// set used for duplicate detection across section boundaries.
#[derive(Default)]
struct Walker {
    errors: Vec<ValidationError>,
    question_ids: BTreeSet<String>,
}

enum ChoiceKind {
    Single,
    Multiple,
}

impl Walker {
    fn push(&mut self, code: ErrorCode, path: &str) {
        self.errors.push(ValidationError::new(code, path, &[]));
    }

    fn push_with(&mut self, code: ErrorCode, path: &str, params: &[(&str, &str)]) {
        self.errors.push(ValidationError::new(code, path, params));
    }

    fn document(&mut self, input: &Value) {
        let Some(root) = input.as_object() else {
            self.push(ErrorCode::RootNotObject, "");
            return;
        };
        if !is_non_empty_string(root.get("version")) {
            self.push(ErrorCode::VersionRequired, "version");
        }
        let Some(quiz) = root.get("quiz").and_then(Value::as_object) else {
            self.push(ErrorCode::QuizNotObject, "quiz");
            return;
        };
        self.quiz(quiz);
    }

    fn quiz(&mut self, quiz: &Map<String, Value>) {
        if !is_non_empty_string(quiz.get("id")) {
            self.push(ErrorCode::QuizIdRequired, "quiz.id");
        }
        if !is_non_empty_string(quiz.get("title")) {
            self.push(ErrorCode::QuizTitleRequired, "quiz.title");
        }
        let sections = quiz.get("sections").and_then(Value::as_array);
        let questions = quiz.get("questions").and_then(Value::as_array);
        match (sections, questions) {
            (Some(sections), Some(_)) => {
                // Conflict is flagged, then sections win. Documented
                // tie-break, not silent precedence.
                self.push(ErrorCode::SectionsQuestionsExclusive, "quiz");
                self.sections(sections);
            }
            (Some(sections), None) => self.sections(sections),
            (None, Some(questions)) => self.questions(questions, "quiz.questions"),
            (None, None) => self.push(ErrorCode::ContainerRequired, "quiz"),
        }
    }

    fn sections(&mut self, sections: &[Value]) {
        for (index, section) in sections.iter().enumerate() {
            let path = format!("quiz.sections[{index}]");
            let Some(section) = section.as_object() else {
                self.push(ErrorCode::SectionNotObject, &path);
                continue;
            };
            if !is_non_empty_string(section.get("id")) {
                self.push(ErrorCode::SectionIdRequired, &format!("{path}.id"));
            }
            if !is_non_empty_string(section.get("title")) {
                self.push(ErrorCode::SectionTitleRequired, &format!("{path}.title"));
            }
            match section.get("questions").and_then(Value::as_array) {
                Some(questions) => self.questions(questions, &format!("{path}.questions")),
                None => self.push(
                    ErrorCode::SectionQuestionsRequired,
                    &format!("{path}.questions"),
                ),
            }
        }
    }

    fn questions(&mut self, questions: &[Value], base: &str) {
        for (index, question) in questions.iter().enumerate() {
            self.question(question, &format!("{base}[{index}]"));
        }
    }

    fn question(&mut self, question: &Value, path: &str) {
        let Some(question) = question.as_object() else {
            self.push(ErrorCode::QuestionNotObject, path);
            return;
        };
        match question.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => {
                if !self.question_ids.insert(id.to_string()) {
                    self.push_with(
                        ErrorCode::QuestionIdDuplicate,
                        &format!("{path}.id"),
                        &[("id", id)],
                    );
                }
            }
            _ => self.push(ErrorCode::QuestionIdRequired, &format!("{path}.id")),
        }
        if question.get("text").and_then(Value::as_str).is_none() {
            self.push(ErrorCode::QuestionTextRequired, &format!("{path}.text"));
        }
        match question.get("type").and_then(Value::as_str) {
            Some("single_choice") => self.choice(question, path, ChoiceKind::Single),
            Some("multiple_choice") => self.choice(question, path, ChoiceKind::Multiple),
            Some("text_input") => self.text_input(question, path),
            Some("true_false") => self.true_false(question, path),
            Some(question_type) => {
                // A string, but not one of the four known kinds. Nothing
                // further is checkable.
                self.push_with(
                    ErrorCode::QuestionTypeUnknown,
                    &format!("{path}.type"),
                    &[("type", question_type)],
                );
            }
            None => self.push(ErrorCode::QuestionTypeRequired, &format!("{path}.type")),
        }
    }

    fn choice(&mut self, question: &Map<String, Value>, path: &str, kind: ChoiceKind) {
        let options_path = format!("{path}.options");
        let options = question.get("options").and_then(Value::as_array);
        let Some(options) = options.filter(|options| options.len() >= 2) else {
            let code = match kind {
                ChoiceKind::Single => ErrorCode::SingleChoiceOptionsMin,
                ChoiceKind::Multiple => ErrorCode::MultipleChoiceOptionsMin,
            };
            self.push(code, &options_path);
            return;
        };

        // Option ids are unique within this question only; reuse across
        // questions is fine.
        let mut option_ids: BTreeSet<String> = BTreeSet::new();
        let mut correct_count = 0usize;
        for (index, option) in options.iter().enumerate() {
            let option_path = format!("{options_path}[{index}]");
            let Some(option) = option.as_object() else {
                self.push(ErrorCode::OptionNotObject, &option_path);
                continue;
            };
            match option.get("id").and_then(Value::as_str) {
                Some(id) if !id.is_empty() => {
                    if !option_ids.insert(id.to_string()) {
                        self.push_with(
                            ErrorCode::OptionIdDuplicate,
                            &format!("{option_path}.id"),
                            &[("id", id)],
                        );
                    }
                }
                _ => self.push(ErrorCode::OptionIdRequired, &format!("{option_path}.id")),
            }
            if option.get("text").and_then(Value::as_str).is_none() {
                self.push(ErrorCode::OptionTextRequired, &format!("{option_path}.text"));
            }
            match option.get("isCorrect").and_then(Value::as_bool) {
                Some(true) => correct_count += 1,
                Some(false) => {}
                None => self.push(
                    ErrorCode::OptionIsCorrectRequired,
                    &format!("{option_path}.isCorrect"),
                ),
            }
        }

        // One aggregate error after all options are checked, not per-option.
        match kind {
            ChoiceKind::Single => {
                if correct_count != 1 {
                    self.push(ErrorCode::SingleChoiceCorrectExactlyOne, &options_path);
                }
            }
            ChoiceKind::Multiple => {
                if correct_count == 0 {
                    self.push(ErrorCode::MultipleChoiceCorrectRequired, &options_path);
                }
            }
        }
    }

    fn text_input(&mut self, question: &Map<String, Value>, path: &str) {
        let answer_path = format!("{path}.correctAnswer");
        match question.get("correctAnswer") {
            Some(Value::String(answer)) if !answer.is_empty() => {}
            Some(Value::Array(answers)) => {
                if answers.is_empty() {
                    self.push(ErrorCode::TextAnswerEmpty, &answer_path);
                } else if answers.iter().any(|answer| !answer.is_string()) {
                    self.push(ErrorCode::TextAnswerRequired, &answer_path);
                }
            }
            _ => self.push(ErrorCode::TextAnswerRequired, &answer_path),
        }
    }

    fn true_false(&mut self, question: &Map<String, Value>, path: &str) {
        if !matches!(question.get("correctAnswer"), Some(Value::Bool(_))) {
            self.push(
                ErrorCode::TrueFalseAnswerRequired,
                &format!("{path}.correctAnswer"),
            );
        }
    }
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_root_short_circuits() {
        for input in [json!(null), json!("quiz"), json!([1, 2])] {
            let report = validate(&input);
            assert!(!report.valid);
            assert_eq!(report.errors.len(), 1);
            assert_eq!(report.errors[0].code, ErrorCode::RootNotObject);
        }
    }

    #[test]
    fn missing_quiz_reports_one_error_only() {
        let report = validate(&json!({"version": "1.0.0"}));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, ErrorCode::QuizNotObject);
        assert_eq!(report.errors[0].path, "quiz");
    }

    #[test]
    fn sibling_checks_still_run_when_title_missing() {
        let report = validate(&json!({
            "version": "1.0.0",
            "quiz": {"id": "q"}
        }));
        let codes: Vec<ErrorCode> = report.errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            [ErrorCode::QuizTitleRequired, ErrorCode::ContainerRequired]
        );
    }

    #[test]
    fn paths_use_bracketed_indices() {
        let report = validate(&json!({
            "version": "1.0.0",
            "quiz": {
                "id": "q",
                "title": "T",
                "sections": [{
                    "id": "s",
                    "title": "S",
                    "questions": [{
                        "type": "true_false",
                        "id": "q1",
                        "text": "?",
                        "correctAnswer": "yes"
                    }]
                }]
            }
        }));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].path,
            "quiz.sections[0].questions[0].correctAnswer"
        );
    }

    #[test]
    fn unknown_and_missing_type_are_distinct() {
        let report = validate(&json!({
            "version": "1.0.0",
            "quiz": {
                "id": "q",
                "title": "T",
                "questions": [
                    {"type": "essay", "id": "a", "text": "?"},
                    {"type": 7, "id": "b", "text": "?"},
                    {"id": "c", "text": "?"}
                ]
            }
        }));
        let codes: Vec<ErrorCode> = report.errors.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            [
                ErrorCode::QuestionTypeUnknown,
                ErrorCode::QuestionTypeRequired,
                ErrorCode::QuestionTypeRequired,
            ]
        );
        assert!(report.errors[0].message.contains("essay"));
    }
}
