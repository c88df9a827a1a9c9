//! Grading: per-question correctness, aggregate scoring and assembly of
//! the immutable result document.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use quiz_model::{
    AnswerValue, Question, QuestionResult, QuizDocument, ResultDocument, ResultMetadata, Scoring,
};

/// Decide whether one answer is correct for one question.
///
/// Multiple choice compares the answer ids and the correct-option ids as
/// sets: same cardinality, mutual containment, order-insensitive. A bare
/// string answer is treated as a one-element set. Text input trims both
/// sides and compares case-insensitively unless `caseSensitive` is set.
pub fn check_answer(question: &Question, answer: &AnswerValue) -> bool {
    match question {
        Question::SingleChoice { options, .. } => match answer {
            AnswerValue::Text(selected) => options
                .iter()
                .any(|option| option.is_correct && option.id == *selected),
            _ => false,
        },
        Question::MultipleChoice { options, .. } => {
            let selected: BTreeSet<&str> = match answer {
                AnswerValue::Many(ids) => ids.iter().map(String::as_str).collect(),
                AnswerValue::Text(id) => BTreeSet::from([id.as_str()]),
                AnswerValue::Bool(_) => return false,
            };
            let correct: BTreeSet<&str> = options
                .iter()
                .filter(|option| option.is_correct)
                .map(|option| option.id.as_str())
                .collect();
            selected == correct
        }
        Question::TextInput {
            correct_answer,
            case_sensitive,
            ..
        } => match answer {
            AnswerValue::Text(given) => {
                let given = given.trim();
                correct_answer.accepted().any(|accepted| {
                    let accepted = accepted.trim();
                    if case_sensitive.unwrap_or(false) {
                        accepted == given
                    } else {
                        accepted.eq_ignore_ascii_case(given)
                    }
                })
            }
            _ => false,
        },
        Question::TrueFalse { correct_answer, .. } => {
            matches!(answer, AnswerValue::Bool(given) if given == correct_answer)
        }
    }
}

/// Grade every question of a document against the supplied answers.
/// Unanswered questions score zero. `percentage` is 0 when there are no
/// points to earn; the passing score defaults to 0 when settings are
/// absent, so such submissions pass.
pub fn score(document: &QuizDocument, answers: &BTreeMap<String, AnswerValue>) -> Scoring {
    let mut total_score = 0.0;
    let mut max_score = 0.0;
    let mut question_results = Vec::new();

    for question in document.quiz.all_questions() {
        let points = question.points();
        max_score += points;
        let correct = answers
            .get(question.id())
            .is_some_and(|answer| check_answer(question, answer));
        let awarded = if correct { points } else { 0.0 };
        total_score += awarded;
        question_results.push(QuestionResult {
            question_id: question.id().to_string(),
            correct,
            points_awarded: awarded,
            points_possible: points,
        });
    }

    let percentage = if max_score > 0.0 {
        total_score / max_score * 100.0
    } else {
        0.0
    };
    let passing_score = document
        .quiz
        .settings
        .as_ref()
        .and_then(|settings| settings.passing_score)
        .unwrap_or(0.0);

    Scoring {
        total_score,
        max_score,
        percentage,
        passed: percentage >= passing_score,
        passing_score,
        question_results,
    }
}

/// Assemble the immutable graded-submission record.
pub fn build_result(
    document: &QuizDocument,
    answers: BTreeMap<String, AnswerValue>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
) -> ResultDocument {
    let scoring = score(document, &answers);
    ResultDocument {
        version: quiz_model::CURRENT_VERSION.to_string(),
        metadata: ResultMetadata {
            id: Uuid::new_v4().to_string(),
            quiz_id: document.quiz.id.clone(),
            started_at,
            completed_at,
            duration_seconds: (completed_at - started_at).num_seconds(),
        },
        quiz: document.clone(),
        answers,
        scoring,
    }
}
