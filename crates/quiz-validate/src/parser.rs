//! Thin composition of JSON (de)serialization with schema validation.
//!
//! The two failure classes stay distinct: syntax problems surface as
//! [`ParseFailure::Syntax`], schema violations as [`ParseFailure::Invalid`]
//! carrying the full structured error list. Callers branch on the variant,
//! never on message text.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use quiz_model::{QuizDocument, ValidationError};

use crate::validator::validate;

/// Options for [`parse`].
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Run schema validation after JSON parsing. Defaults to true.
    pub validate: bool,
    /// Reject top-level JSON that is neither an object nor an array before
    /// anything else looks at it. Defaults to false.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            validate: true,
            strict: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The text is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    /// Strict mode: the top-level JSON value is not an object or array.
    #[error("top-level JSON must be an object or array")]
    NotADocument,
    /// Well-formed JSON that violates the schema.
    #[error("document failed validation with {} error(s)", errors.len())]
    Invalid { errors: Vec<ValidationError> },
    /// Well-formed JSON that passed (or skipped) validation but does not
    /// fit the typed model, e.g. a non-numeric `points` value with
    /// validation disabled.
    #[error("document does not match the quiz model: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Parse JSON text into a [`QuizDocument`].
///
/// # Errors
///
/// Returns the failure class described on each [`ParseFailure`] variant.
pub fn parse(text: &str, options: &ParseOptions) -> Result<QuizDocument, ParseFailure> {
    let value: Value = serde_json::from_str(text).map_err(ParseFailure::Syntax)?;
    if options.strict && !value.is_object() && !value.is_array() {
        return Err(ParseFailure::NotADocument);
    }
    if options.validate {
        let report = validate(&value);
        if !report.valid {
            return Err(ParseFailure::Invalid {
                errors: report.errors,
            });
        }
    }
    serde_json::from_value(value).map_err(ParseFailure::Decode)
}

/// Options for [`serialize`].
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Validate the document before encoding. Defaults to true.
    pub validate: bool,
    /// Pretty-print the output. Defaults to false.
    pub pretty: bool,
    /// Indent width used when `pretty` is set. Defaults to 2.
    pub indent: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            validate: true,
            pretty: false,
            indent: 2,
        }
    }
}

#[derive(Debug, Error)]
pub enum SerializeFailure {
    #[error("document failed validation with {} error(s)", errors.len())]
    Invalid { errors: Vec<ValidationError> },
    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Encode a document as JSON text, optionally validating it first.
///
/// # Errors
///
/// [`SerializeFailure::Invalid`] when validation is enabled and fails;
/// [`SerializeFailure::Encode`] when JSON encoding itself fails.
pub fn serialize(
    document: &QuizDocument,
    options: &SerializeOptions,
) -> Result<String, SerializeFailure> {
    if options.validate {
        let value = serialize_to_value(document)?;
        let report = validate(&value);
        if !report.valid {
            return Err(SerializeFailure::Invalid {
                errors: report.errors,
            });
        }
    }
    if options.pretty {
        let indent = " ".repeat(options.indent.max(1));
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        document
            .serialize(&mut serializer)
            .map_err(SerializeFailure::Encode)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    } else {
        serde_json::to_string(document).map_err(SerializeFailure::Encode)
    }
}

/// Convert a document into a freshly built JSON tree sharing nothing with
/// the input, so callers may mutate the result safely.
///
/// # Errors
///
/// [`SerializeFailure::Encode`] when the document cannot be represented as
/// a JSON value.
pub fn serialize_to_value(document: &QuizDocument) -> Result<Value, SerializeFailure> {
    serde_json::to_value(document).map_err(SerializeFailure::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "version": "1.0.0",
        "quiz": {
            "id": "quiz-1",
            "title": "Basics",
            "sections": [{
                "id": "s1",
                "title": "Intro",
                "questions": [{
                    "type": "true_false",
                    "id": "q1",
                    "text": "Rust has garbage collection",
                    "correctAnswer": false
                }]
            }]
        }
    }"#;

    #[test]
    fn parse_valid_document() {
        let document = parse(VALID, &ParseOptions::default()).unwrap();
        assert_eq!(document.quiz.id, "quiz-1");
        assert_eq!(document.quiz.sections.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn syntax_and_validation_failures_are_distinct() {
        let syntax = parse("{not json", &ParseOptions::default()).unwrap_err();
        assert!(matches!(syntax, ParseFailure::Syntax(_)));

        let invalid = parse(r#"{"version": "1.0.0"}"#, &ParseOptions::default()).unwrap_err();
        match invalid {
            ParseFailure::Invalid { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, quiz_model::ErrorCode::QuizNotObject);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_scalar_root() {
        let options = ParseOptions {
            validate: false,
            strict: true,
        };
        let failure = parse("42", &options).unwrap_err();
        assert!(matches!(failure, ParseFailure::NotADocument));
    }

    #[test]
    fn decode_failure_when_validation_skipped() {
        let options = ParseOptions {
            validate: false,
            strict: false,
        };
        // Passes JSON parsing, would fail the typed model (points is a string).
        let text = r#"{
            "version": "1.0.0",
            "quiz": {
                "id": "q", "title": "T",
                "questions": [{
                    "type": "true_false", "id": "a", "text": "?",
                    "correctAnswer": true, "points": "three"
                }]
            }
        }"#;
        let failure = parse(text, &options).unwrap_err();
        assert!(matches!(failure, ParseFailure::Decode(_)));
    }

    #[test]
    fn serialize_round_trips_and_pretty_prints() {
        let document = parse(VALID, &ParseOptions::default()).unwrap();
        let compact = serialize(&document, &SerializeOptions::default()).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = serialize(
            &document,
            &SerializeOptions {
                pretty: true,
                indent: 4,
                ..SerializeOptions::default()
            },
        )
        .unwrap();
        assert!(pretty.contains("\n    \"version\""));
        let reparsed = parse(&pretty, &ParseOptions::default()).unwrap();
        assert_eq!(reparsed, document);
    }

    #[test]
    fn serialize_to_value_shares_nothing() {
        let document = parse(VALID, &ParseOptions::default()).unwrap();
        let mut value = serialize_to_value(&document).unwrap();
        value["quiz"]["title"] = serde_json::json!("mutated");
        assert_eq!(document.quiz.title, "Basics");
    }

    #[test]
    fn serialize_refuses_invalid_document() {
        let mut document = parse(VALID, &ParseOptions::default()).unwrap();
        document.quiz.title.clear();
        let failure = serialize(&document, &SerializeOptions::default()).unwrap_err();
        assert!(matches!(failure, SerializeFailure::Invalid { .. }));
    }
}
