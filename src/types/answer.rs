use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, Copy, Eq, Hash, Deserialize, PartialEq)]
pub struct AnswerId(pub i32);

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub content: String,
    pub is_correct: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewAnswer {
    pub content: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Learner-facing answer: no correctness flag.
#[derive(Serialize, Debug, Clone)]
pub struct PublicAnswer {
    pub id: AnswerId,
    pub content: String,
}

impl From<Answer> for PublicAnswer {
    fn from(answer: Answer) -> Self {
        PublicAnswer {
            id: answer.id,
            content: answer.content,
        }
    }
}
