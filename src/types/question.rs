use serde::{Deserialize, Serialize};

use crate::types::answer::{Answer, NewAnswer, PublicAnswer};

#[derive(Serialize, Debug, Clone, Copy, Eq, Hash, Deserialize, PartialEq)]
pub struct QuestionId(pub i32);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "question_type", rename_all = "snake_case")]
pub enum QuestionType {
    Single,
    Multiple,
    TrueFalse,
    FillBlank,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub content: String,
    pub question_type: QuestionType,
    pub points: i32,
    pub answers: Vec<Answer>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewQuestion {
    pub content: String,
    pub question_type: QuestionType,
    #[serde(default = "default_points")]
    pub points: i32,
    #[serde(default)]
    pub answers: Vec<NewAnswer>,
}

fn default_points() -> i32 {
    1
}

#[derive(Serialize, Debug, Clone)]
pub struct PublicQuestion {
    pub id: QuestionId,
    pub content: String,
    pub question_type: QuestionType,
    pub points: i32,
    pub answers: Vec<PublicAnswer>,
}

impl From<Question> for PublicQuestion {
    fn from(question: Question) -> Self {
        PublicQuestion {
            id: question.id,
            content: question.content,
            question_type: question.question_type,
            points: question.points,
            answers: question
                .answers
                .into_iter()
                .map(PublicAnswer::from)
                .collect(),
        }
    }
}
