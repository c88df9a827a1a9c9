//! Validation error catalog.
//!
//! Every code's string value is part of the external contract: callers
//! branch on codes programmatically, so renaming one is a breaking change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of schema violations the validator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    RootNotObject,
    VersionRequired,
    QuizNotObject,
    QuizIdRequired,
    QuizTitleRequired,
    SectionsQuestionsExclusive,
    ContainerRequired,
    SectionNotObject,
    SectionIdRequired,
    SectionTitleRequired,
    SectionQuestionsRequired,
    QuestionNotObject,
    QuestionIdRequired,
    QuestionIdDuplicate,
    QuestionTypeRequired,
    QuestionTypeUnknown,
    QuestionTextRequired,
    SingleChoiceOptionsMin,
    MultipleChoiceOptionsMin,
    OptionNotObject,
    OptionIdRequired,
    OptionIdDuplicate,
    OptionTextRequired,
    OptionIsCorrectRequired,
    SingleChoiceCorrectExactlyOne,
    MultipleChoiceCorrectRequired,
    TextAnswerRequired,
    TextAnswerEmpty,
    TrueFalseAnswerRequired,
}

impl ErrorCode {
    /// Every code, in catalog order. Used to render the documentation table.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::RootNotObject,
        ErrorCode::VersionRequired,
        ErrorCode::QuizNotObject,
        ErrorCode::QuizIdRequired,
        ErrorCode::QuizTitleRequired,
        ErrorCode::SectionsQuestionsExclusive,
        ErrorCode::ContainerRequired,
        ErrorCode::SectionNotObject,
        ErrorCode::SectionIdRequired,
        ErrorCode::SectionTitleRequired,
        ErrorCode::SectionQuestionsRequired,
        ErrorCode::QuestionNotObject,
        ErrorCode::QuestionIdRequired,
        ErrorCode::QuestionIdDuplicate,
        ErrorCode::QuestionTypeRequired,
        ErrorCode::QuestionTypeUnknown,
        ErrorCode::QuestionTextRequired,
        ErrorCode::SingleChoiceOptionsMin,
        ErrorCode::MultipleChoiceOptionsMin,
        ErrorCode::OptionNotObject,
        ErrorCode::OptionIdRequired,
        ErrorCode::OptionIdDuplicate,
        ErrorCode::OptionTextRequired,
        ErrorCode::OptionIsCorrectRequired,
        ErrorCode::SingleChoiceCorrectExactlyOne,
        ErrorCode::MultipleChoiceCorrectRequired,
        ErrorCode::TextAnswerRequired,
        ErrorCode::TextAnswerEmpty,
        ErrorCode::TrueFalseAnswerRequired,
    ];

    /// The stable identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RootNotObject => "ROOT_NOT_OBJECT",
            ErrorCode::VersionRequired => "VERSION_REQUIRED",
            ErrorCode::QuizNotObject => "QUIZ_NOT_OBJECT",
            ErrorCode::QuizIdRequired => "QUIZ_ID_REQUIRED",
            ErrorCode::QuizTitleRequired => "QUIZ_TITLE_REQUIRED",
            ErrorCode::SectionsQuestionsExclusive => "SECTIONS_QUESTIONS_EXCLUSIVE",
            ErrorCode::ContainerRequired => "CONTAINER_REQUIRED",
            ErrorCode::SectionNotObject => "SECTION_NOT_OBJECT",
            ErrorCode::SectionIdRequired => "SECTION_ID_REQUIRED",
            ErrorCode::SectionTitleRequired => "SECTION_TITLE_REQUIRED",
            ErrorCode::SectionQuestionsRequired => "SECTION_QUESTIONS_REQUIRED",
            ErrorCode::QuestionNotObject => "QUESTION_NOT_OBJECT",
            ErrorCode::QuestionIdRequired => "QUESTION_ID_REQUIRED",
            ErrorCode::QuestionIdDuplicate => "QUESTION_ID_DUPLICATE",
            ErrorCode::QuestionTypeRequired => "QUESTION_TYPE_REQUIRED",
            ErrorCode::QuestionTypeUnknown => "QUESTION_TYPE_UNKNOWN",
            ErrorCode::QuestionTextRequired => "QUESTION_TEXT_REQUIRED",
            ErrorCode::SingleChoiceOptionsMin => "SINGLE_CHOICE_OPTIONS_MIN",
            ErrorCode::MultipleChoiceOptionsMin => "MULTIPLE_CHOICE_OPTIONS_MIN",
            ErrorCode::OptionNotObject => "OPTION_NOT_OBJECT",
            ErrorCode::OptionIdRequired => "OPTION_ID_REQUIRED",
            ErrorCode::OptionIdDuplicate => "OPTION_ID_DUPLICATE",
            ErrorCode::OptionTextRequired => "OPTION_TEXT_REQUIRED",
            ErrorCode::OptionIsCorrectRequired => "OPTION_IS_CORRECT_REQUIRED",
            ErrorCode::SingleChoiceCorrectExactlyOne => "SINGLE_CHOICE_CORRECT_EXACTLY_ONE",
            ErrorCode::MultipleChoiceCorrectRequired => "MULTIPLE_CHOICE_CORRECT_REQUIRED",
            ErrorCode::TextAnswerRequired => "TEXT_ANSWER_REQUIRED",
            ErrorCode::TextAnswerEmpty => "TEXT_ANSWER_EMPTY",
            ErrorCode::TrueFalseAnswerRequired => "TRUE_FALSE_ANSWER_REQUIRED",
        }
    }

    /// Human-readable message template. `{name}` placeholders are filled in
    /// by [`ValidationError::new`].
    pub fn template(&self) -> &'static str {
        match self {
            ErrorCode::RootNotObject => "document root must be an object",
            ErrorCode::VersionRequired => "version must be a non-empty string",
            ErrorCode::QuizNotObject => "quiz must be an object",
            ErrorCode::QuizIdRequired => "quiz id must be a non-empty string",
            ErrorCode::QuizTitleRequired => "quiz title must be a non-empty string",
            ErrorCode::SectionsQuestionsExclusive => {
                "quiz cannot have both sections and questions"
            }
            ErrorCode::ContainerRequired => "quiz must have either sections or questions",
            ErrorCode::SectionNotObject => "section must be an object",
            ErrorCode::SectionIdRequired => "section id must be a non-empty string",
            ErrorCode::SectionTitleRequired => "section title must be a non-empty string",
            ErrorCode::SectionQuestionsRequired => "section questions must be an array",
            ErrorCode::QuestionNotObject => "question must be an object",
            ErrorCode::QuestionIdRequired => "question id must be a non-empty string",
            ErrorCode::QuestionIdDuplicate => "duplicate question id \"{id}\"",
            ErrorCode::QuestionTypeRequired => "question type must be a string",
            ErrorCode::QuestionTypeUnknown => "unknown question type \"{type}\"",
            ErrorCode::QuestionTextRequired => "question text must be a string",
            ErrorCode::SingleChoiceOptionsMin => {
                "single choice question requires at least 2 options"
            }
            ErrorCode::MultipleChoiceOptionsMin => {
                "multiple choice question requires at least 2 options"
            }
            ErrorCode::OptionNotObject => "option must be an object",
            ErrorCode::OptionIdRequired => "option id must be a non-empty string",
            ErrorCode::OptionIdDuplicate => "duplicate option id \"{id}\"",
            ErrorCode::OptionTextRequired => "option text must be a string",
            ErrorCode::OptionIsCorrectRequired => "option isCorrect must be a boolean",
            ErrorCode::SingleChoiceCorrectExactlyOne => {
                "single choice question must have exactly one correct option"
            }
            ErrorCode::MultipleChoiceCorrectRequired => {
                "multiple choice question must have at least one correct option"
            }
            ErrorCode::TextAnswerRequired => {
                "correctAnswer must be a non-empty string or an array of strings"
            }
            ErrorCode::TextAnswerEmpty => "correctAnswer array must not be empty",
            ErrorCode::TrueFalseAnswerRequired => "correctAnswer must be a boolean",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One schema violation, addressable by code and path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: ErrorCode,
    /// Dotted/bracketed location, e.g. `quiz.sections[0].questions[2].id`.
    pub path: String,
    pub message: String,
}

impl ValidationError {
    /// Build an error from the catalog template, substituting `{name}`
    /// placeholders with the given parameters.
    pub fn new(code: ErrorCode, path: impl Into<String>, params: &[(&str, &str)]) -> Self {
        let mut message = code.template().to_string();
        for (name, value) in params {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        ValidationError {
            code,
            path: path.into(),
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "[{}] {}", self.code, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.code, self.path, self.message)
        }
    }
}
