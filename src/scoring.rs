use std::collections::{HashMap, HashSet};

use crate::types::question::{Question, QuestionType};
use crate::types::quiz::Quiz;
use crate::types::submission::{QuestionResult, SubmissionResult, SubmittedAnswer, Submission};

const NO_ANSWER: &str = "No Answer";
const NO_SELECTION: &str = "No Selection";

/// Grades a submission against a fully loaded quiz.
///
/// Selection questions (`single`, `multiple`, `true_false`) score all or
/// nothing on exact set equality of the selected answer ids against the
/// correct-flagged ones. `fill_blank` questions compare text, ignoring
/// case and surrounding whitespace. Every question in the quiz produces
/// exactly one detail entry, in quiz order, answered or not.
pub fn score_submission(quiz: &Quiz, submission: &Submission) -> SubmissionResult {
    // One entry per question; the last one wins on duplicates. Entries
    // for unknown question ids land in the map but are never looked up.
    let mut submitted: HashMap<i32, &SubmittedAnswer> = HashMap::new();
    for entry in &submission.answers {
        submitted.insert(entry.question_id.0, entry);
    }

    let total_points = quiz.questions.iter().map(|question| question.points).sum();

    let mut score = 0;
    let mut correct_count = 0;
    let mut details = Vec::with_capacity(quiz.questions.len());

    for question in &quiz.questions {
        let entry = submitted.get(&question.id.0).copied();
        let detail = match question.question_type {
            QuestionType::FillBlank => grade_fill_blank(question, entry),
            _ => grade_selection(question, entry),
        };

        if detail.is_correct {
            score += question.points;
            correct_count += 1;
        }
        details.push(detail);
    }

    SubmissionResult {
        score,
        total_points,
        correct_count,
        total_questions: quiz.questions.len(),
        details,
    }
}

fn grade_fill_blank(question: &Question, entry: Option<&SubmittedAnswer>) -> QuestionResult {
    // The first correct-flagged answer holds the canonical text.
    let correct_answer = question
        .answers
        .iter()
        .find(|answer| answer.is_correct)
        .map(|answer| answer.content.clone())
        .unwrap_or_default();

    let submitted_text = entry
        .and_then(|entry| entry.text_answer.as_deref())
        .filter(|text| !text.trim().is_empty());

    match submitted_text {
        Some(text) => QuestionResult {
            question_id: question.id,
            is_correct: text.trim().to_lowercase() == correct_answer.trim().to_lowercase(),
            user_answer: text.to_string(),
            correct_answer,
        },
        None => QuestionResult {
            question_id: question.id,
            is_correct: false,
            user_answer: NO_ANSWER.to_string(),
            correct_answer,
        },
    }
}

fn grade_selection(question: &Question, entry: Option<&SubmittedAnswer>) -> QuestionResult {
    let correct_ids: HashSet<i32> = question
        .answers
        .iter()
        .filter(|answer| answer.is_correct)
        .map(|answer| answer.id.0)
        .collect();
    let correct_answer = join_contents(question, &correct_ids);

    let entry = match entry {
        Some(entry) => entry,
        None => {
            return QuestionResult {
                question_id: question.id,
                is_correct: false,
                user_answer: NO_ANSWER.to_string(),
                correct_answer,
            };
        }
    };

    let selected_ids: HashSet<i32> = entry
        .selected_answer_ids
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|id| id.0)
        .collect();

    if selected_ids.is_empty() {
        // An empty selection never scores, even when no answer on the
        // question is flagged correct.
        return QuestionResult {
            question_id: question.id,
            is_correct: false,
            user_answer: NO_SELECTION.to_string(),
            correct_answer,
        };
    }

    QuestionResult {
        question_id: question.id,
        is_correct: selected_ids == correct_ids,
        user_answer: join_contents(question, &selected_ids),
        correct_answer,
    }
}

// Joins the contents of the given answer ids in the question's own answer
// order. Ids that don't belong to the question are left out of the
// display but still count against set equality.
fn join_contents(question: &Question, ids: &HashSet<i32>) -> String {
    question
        .answers
        .iter()
        .filter(|answer| ids.contains(&answer.id.0))
        .map(|answer| answer.content.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
