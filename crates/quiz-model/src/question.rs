use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields shared by every question variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBase {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// The closed set of question kinds, discriminated by the `type` field on
/// the wire. Every consumer (validator, transformer, scorer) matches
/// exhaustively, so adding a variant is a compile-enforced checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    SingleChoice {
        #[serde(flatten)]
        base: QuestionBase,
        options: Vec<AnswerOption>,
    },
    MultipleChoice {
        #[serde(flatten)]
        base: QuestionBase,
        options: Vec<AnswerOption>,
    },
    TextInput {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "correctAnswer")]
        correct_answer: TextAnswer,
        #[serde(
            rename = "caseSensitive",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        case_sensitive: Option<bool>,
    },
    TrueFalse {
        #[serde(flatten)]
        base: QuestionBase,
        #[serde(rename = "correctAnswer")]
        correct_answer: bool,
    },
}

impl Question {
    pub fn base(&self) -> &QuestionBase {
        match self {
            Question::SingleChoice { base, .. }
            | Question::MultipleChoice { base, .. }
            | Question::TextInput { base, .. }
            | Question::TrueFalse { base, .. } => base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn text(&self) -> &str {
        &self.base().text
    }

    /// Points awarded for a correct answer; unset means 1.
    pub fn points(&self) -> f64 {
        self.base().points.unwrap_or(1.0)
    }

    /// The wire `type` discriminant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Question::SingleChoice { .. } => "single_choice",
            Question::MultipleChoice { .. } => "multiple_choice",
            Question::TextInput { .. } => "text_input",
            Question::TrueFalse { .. } => "true_false",
        }
    }

    /// Editor block kind: `quiz-` plus the type with underscores as hyphens.
    pub fn block_kind(&self) -> String {
        format!("quiz-{}", self.type_name().replace('_', "-"))
    }
}

/// A selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

/// Accepted answer(s) of a text-input question: a single string or a list
/// of equally acceptable strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextAnswer {
    One(String),
    Many(Vec<String>),
}

impl TextAnswer {
    /// Iterate the acceptable answers regardless of form.
    pub fn accepted(&self) -> impl Iterator<Item = &str> {
        let (one, many) = match self {
            TextAnswer::One(answer) => (Some(answer.as_str()), None),
            TextAnswer::Many(answers) => (None, Some(answers)),
        };
        one.into_iter()
            .chain(many.into_iter().flatten().map(String::as_str))
    }
}
