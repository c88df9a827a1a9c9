//! Contract tests for the schema validator.

use quiz_model::ErrorCode;
use quiz_validate::validate;
use serde_json::{Value, json};

fn codes(input: &Value) -> Vec<ErrorCode> {
    validate(input).errors.iter().map(|e| e.code).collect()
}

fn option(id: &str, correct: bool) -> Value {
    json!({"id": id, "text": format!("option {id}"), "isCorrect": correct})
}

fn single_choice(id: &str, options: Vec<Value>) -> Value {
    json!({
        "type": "single_choice",
        "id": id,
        "text": format!("question {id}"),
        "options": options
    })
}

fn sections_document(questions: Vec<Value>) -> Value {
    json!({
        "version": "1.0.0",
        "quiz": {
            "id": "quiz-1",
            "title": "Quiz",
            "sections": [{
                "id": "s1",
                "title": "Section",
                "questions": questions
            }]
        }
    })
}

#[test]
fn fully_valid_sections_document_has_no_errors() {
    let document = json!({
        "version": "1.0.0",
        "quiz": {
            "id": "quiz-1",
            "title": "Mixed quiz",
            "description": "covers everything",
            "settings": {"passingScore": 60},
            "sections": [{
                "id": "s1",
                "title": "All kinds",
                "questions": [
                    single_choice("q1", vec![option("a", true), option("b", false)]),
                    json!({
                        "type": "multiple_choice",
                        "id": "q2",
                        "text": "pick many",
                        "options": [option("a", true), option("b", true), option("c", false)]
                    }),
                    json!({
                        "type": "text_input",
                        "id": "q3",
                        "text": "type it",
                        "correctAnswer": ["Paris", "paris"],
                        "caseSensitive": false
                    }),
                    json!({
                        "type": "true_false",
                        "id": "q4",
                        "text": "yes or no",
                        "correctAnswer": true,
                        "points": 2,
                        "explanation": "because"
                    })
                ]
            }]
        }
    });
    let report = validate(&document);
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn missing_quiz_short_circuits_without_question_errors() {
    let report = validate(&json!({"version": "1.0.0", "quiz": "nope"}));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, ErrorCode::QuizNotObject);
}

#[test]
fn both_containers_flags_conflict_and_still_validates_sections() {
    let document = json!({
        "version": "1.0.0",
        "quiz": {
            "id": "quiz-1",
            "title": "Quiz",
            "sections": [{
                "id": "s1",
                "title": "Section",
                "questions": [
                    // 0 correct options: invalid.
                    single_choice("q1", vec![option("a", false), option("b", false)])
                ]
            }],
            "questions": [
                json!({"type": "true_false", "id": "legacy", "text": "?", "correctAnswer": true})
            ]
        }
    });
    let found = codes(&document);
    assert!(found.contains(&ErrorCode::SectionsQuestionsExclusive));
    assert!(found.contains(&ErrorCode::SingleChoiceCorrectExactlyOne));
}

#[test]
fn neither_container_is_an_error() {
    let document = json!({
        "version": "1.0.0",
        "quiz": {"id": "quiz-1", "title": "Quiz"}
    });
    assert_eq!(codes(&document), [ErrorCode::ContainerRequired]);
}

#[test]
fn single_choice_correct_count_rules() {
    let none = sections_document(vec![single_choice(
        "q1",
        vec![option("a", false), option("b", false)],
    )]);
    assert!(codes(&none).contains(&ErrorCode::SingleChoiceCorrectExactlyOne));

    let two = sections_document(vec![single_choice(
        "q1",
        vec![option("a", true), option("b", true)],
    )]);
    assert!(codes(&two).contains(&ErrorCode::SingleChoiceCorrectExactlyOne));

    let one = sections_document(vec![single_choice(
        "q1",
        vec![option("a", true), option("b", false)],
    )]);
    assert!(validate(&one).valid);
}

#[test]
fn option_minimum_is_per_type() {
    let single = sections_document(vec![single_choice("q1", vec![option("a", true)])]);
    assert_eq!(codes(&single), [ErrorCode::SingleChoiceOptionsMin]);

    let multiple = sections_document(vec![json!({
        "type": "multiple_choice",
        "id": "q1",
        "text": "?",
        "options": [option("a", true)]
    })]);
    assert_eq!(codes(&multiple), [ErrorCode::MultipleChoiceOptionsMin]);
}

#[test]
fn duplicate_question_ids_detected_across_sections() {
    let document = json!({
        "version": "1.0.0",
        "quiz": {
            "id": "quiz-1",
            "title": "Quiz",
            "sections": [
                {
                    "id": "s1",
                    "title": "One",
                    "questions": [single_choice("dup", vec![option("a", true), option("b", false)])]
                },
                {
                    "id": "s2",
                    "title": "Two",
                    "questions": [single_choice("dup", vec![option("a", true), option("b", false)])]
                }
            ]
        }
    });
    let report = validate(&document);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, ErrorCode::QuestionIdDuplicate);
    assert_eq!(report.errors[0].path, "quiz.sections[1].questions[0].id");
}

#[test]
fn option_id_uniqueness_is_scoped_to_one_question() {
    let duplicate_within = sections_document(vec![single_choice(
        "q1",
        vec![option("same", true), option("same", false)],
    )]);
    assert!(codes(&duplicate_within).contains(&ErrorCode::OptionIdDuplicate));

    // The same option ids reused across two questions are fine.
    let reuse_across = sections_document(vec![
        single_choice("q1", vec![option("a", true), option("b", false)]),
        single_choice("q2", vec![option("a", true), option("b", false)]),
    ]);
    assert!(validate(&reuse_across).valid);
}

#[test]
fn text_input_answer_rules() {
    let empty_array = sections_document(vec![json!({
        "type": "text_input", "id": "q1", "text": "?", "correctAnswer": []
    })]);
    assert_eq!(codes(&empty_array), [ErrorCode::TextAnswerEmpty]);

    let missing = sections_document(vec![json!({
        "type": "text_input", "id": "q1", "text": "?"
    })]);
    assert_eq!(codes(&missing), [ErrorCode::TextAnswerRequired]);

    let non_string_item = sections_document(vec![json!({
        "type": "text_input", "id": "q1", "text": "?", "correctAnswer": ["ok", 3]
    })]);
    assert_eq!(codes(&non_string_item), [ErrorCode::TextAnswerRequired]);

    let empty_string = sections_document(vec![json!({
        "type": "text_input", "id": "q1", "text": "?", "correctAnswer": ""
    })]);
    assert_eq!(codes(&empty_string), [ErrorCode::TextAnswerRequired]);
}

#[test]
fn errors_accumulate_in_traversal_order() {
    let document = json!({
        "version": "",
        "quiz": {
            "id": "",
            "title": "Quiz",
            "questions": [
                json!({"type": "true_false", "id": "q1", "text": 5, "correctAnswer": "x"})
            ]
        }
    });
    assert_eq!(
        codes(&document),
        [
            ErrorCode::VersionRequired,
            ErrorCode::QuizIdRequired,
            ErrorCode::QuestionTextRequired,
            ErrorCode::TrueFalseAnswerRequired,
        ]
    );
}

#[test]
fn legacy_flat_questions_form_is_valid() {
    let document = json!({
        "version": "1.0.0",
        "quiz": {
            "id": "quiz-1",
            "title": "Flat",
            "questions": [
                single_choice("q1", vec![option("a", true), option("b", false)])
            ]
        }
    });
    assert!(validate(&document).valid);
}
