use serde::{Deserialize, Serialize};

use crate::types::answer::AnswerId;
use crate::types::question::QuestionId;

/// A learner's answers for one quiz. Never persisted; it only exists for
/// the lifetime of the scoring request.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Submission {
    pub answers: Vec<SubmittedAnswer>,
}

/// One entry per question: a selection for `single`/`multiple`/
/// `true_false` questions, free text for `fill_blank`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SubmittedAnswer {
    pub question_id: QuestionId,
    pub selected_answer_ids: Option<Vec<AnswerId>>,
    pub text_answer: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub score: i32,
    pub total_points: i32,
    pub correct_count: usize,
    pub total_questions: usize,
    pub details: Vec<QuestionResult>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuestionResult {
    pub question_id: QuestionId,
    pub is_correct: bool,
    pub user_answer: String,
    pub correct_answer: String,
}
