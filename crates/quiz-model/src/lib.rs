pub mod blocks;
pub mod document;
pub mod errors;
pub mod localization;
pub mod question;
pub mod result;

pub use blocks::EditorBlock;
pub use document::{CURRENT_VERSION, Quiz, QuizDocument, QuizSettings, Section};
pub use errors::{ErrorCode, ValidationError};
pub use localization::{Localization, keys};
pub use question::{AnswerOption, Question, QuestionBase, TextAnswer};
pub use result::{
    AnswerValue, QuestionResult, ResultDocument, ResultMetadata, Scoring,
};
