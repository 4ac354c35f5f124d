use serde::{Deserialize, Serialize};

use crate::types::question::{NewQuestion, PublicQuestion, Question};

/// The opaque public identifier. Internal database keys never leave the
/// store; this is the only reference a client ever sees for a quiz.
#[derive(Serialize, Debug, Clone, Eq, Hash, Deserialize, PartialEq)]
pub struct QuizId(pub String);

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewQuiz {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

#[derive(Serialize, Debug, Clone)]
pub struct PublicQuiz {
    pub id: QuizId,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<PublicQuestion>,
}

impl From<Quiz> for PublicQuiz {
    fn from(quiz: Quiz) -> Self {
        PublicQuiz {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            questions: quiz
                .questions
                .into_iter()
                .map(PublicQuestion::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answer::{Answer, AnswerId};
    use crate::types::question::{QuestionId, QuestionType};

    fn quiz_with_answer_key() -> Quiz {
        Quiz {
            id: QuizId("3f6a".to_string()),
            title: "Geography".to_string(),
            description: Some("Capitals of Europe".to_string()),
            questions: vec![Question {
                id: QuestionId(1),
                content: "Capital of France?".to_string(),
                question_type: QuestionType::Single,
                points: 1,
                answers: vec![
                    Answer {
                        id: AnswerId(1),
                        content: "Paris".to_string(),
                        is_correct: true,
                    },
                    Answer {
                        id: AnswerId(2),
                        content: "Lyon".to_string(),
                        is_correct: false,
                    },
                ],
            }],
        }
    }

    #[test]
    fn public_view_strips_correctness_flags() {
        let public = PublicQuiz::from(quiz_with_answer_key());
        let json = serde_json::to_value(&public).unwrap();

        let answers = json["questions"][0]["answers"]
            .as_array()
            .expect("answers serialize as an array");
        assert_eq!(answers.len(), 2);
        for answer in answers {
            assert!(answer.get("is_correct").is_none());
            assert!(answer.get("content").is_some());
        }
    }

    #[test]
    fn public_view_keeps_structure_and_order() {
        let public = PublicQuiz::from(quiz_with_answer_key());
        assert_eq!(public.id, QuizId("3f6a".to_string()));
        assert_eq!(public.questions.len(), 1);
        assert_eq!(public.questions[0].answers[0].content, "Paris");
        assert_eq!(public.questions[0].answers[1].content, "Lyon");
    }
}
