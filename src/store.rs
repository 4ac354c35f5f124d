use sqlx::Row;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};

use crate::types::{
    answer::{Answer, AnswerId, NewAnswer},
    question::{NewQuestion, Question, QuestionId},
    quiz::{NewQuiz, Quiz, QuizId},
};

use handle_errors::Error;

#[derive(Debug, Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Self {
        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => panic!("Couldn't establish DB connection: {}", e),
        };

        Store {
            connection: db_pool,
        }
    }

    /// Creates the quiz with all nested questions and answers in a single
    /// transaction; a failure anywhere leaves no partial quiz behind.
    pub async fn add_quiz(&self, new_quiz: NewQuiz) -> Result<Quiz, Error> {
        let public_id = uuid::Uuid::new_v4().to_string();

        let mut transaction = self.connection.begin().await.map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        let quiz_row = sqlx::query(
            "INSERT INTO quizzes (public_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id",
        )
        .bind(&public_id)
        .bind(&new_quiz.title)
        .bind(&new_quiz.description)
        .fetch_one(&mut transaction)
        .await
        .map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;
        let quiz_id: i32 = quiz_row.get("id");

        let mut questions = Vec::with_capacity(new_quiz.questions.len());
        for new_question in new_quiz.questions {
            let question =
                Self::insert_question(&mut transaction, quiz_id, new_question).await?;
            questions.push(question);
        }

        transaction.commit().await.map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        Ok(Quiz {
            id: QuizId(public_id),
            title: new_quiz.title,
            description: new_quiz.description,
            questions,
        })
    }

    pub async fn get_quizzes(
        &self,
        limit: Option<u32>,
        offset: u32,
    ) -> Result<Vec<Quiz>, Error> {
        let rows = match sqlx::query(
            "SELECT id, public_id, title, description FROM quizzes
            ORDER BY id
            LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection)
        .await
        {
            Ok(rows) => rows,
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                return Err(Error::DatabaseQueryError(error));
            }
        };

        let mut quizzes = Vec::with_capacity(rows.len());
        for row in rows {
            let questions = self.get_quiz_questions(row.get("id")).await?;
            quizzes.push(Quiz {
                id: QuizId(row.get("public_id")),
                title: row.get("title"),
                description: row.get("description"),
                questions,
            });
        }

        Ok(quizzes)
    }

    /// Resolves a quiz by its public identifier, fully loaded. `Ok(None)`
    /// means the identifier points at nothing.
    pub async fn get_quiz_by_public_id(&self, public_id: &str) -> Result<Option<Quiz>, Error> {
        let row = match sqlx::query(
            "SELECT id, public_id, title, description FROM quizzes WHERE public_id = $1",
        )
        .bind(public_id)
        .fetch_optional(&self.connection)
        .await
        {
            Ok(Some(row)) => row,
            Ok(None) => return Ok(None),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                return Err(Error::DatabaseQueryError(error));
            }
        };

        let questions = self.get_quiz_questions(row.get("id")).await?;

        Ok(Some(Quiz {
            id: QuizId(row.get("public_id")),
            title: row.get("title"),
            description: row.get("description"),
            questions,
        }))
    }

    /// Adds one question (with its answers) to an existing quiz. `Ok(None)`
    /// when the quiz's public identifier resolves to nothing.
    pub async fn add_question(
        &self,
        quiz_public_id: &str,
        new_question: NewQuestion,
    ) -> Result<Option<Question>, Error> {
        let mut transaction = self.connection.begin().await.map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        let quiz_row = sqlx::query("SELECT id FROM quizzes WHERE public_id = $1")
            .bind(quiz_public_id)
            .fetch_optional(&mut transaction)
            .await
            .map_err(|error| {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Error::DatabaseQueryError(error)
            })?;

        let quiz_id: i32 = match quiz_row {
            Some(row) => row.get("id"),
            None => return Ok(None),
        };

        let question = Self::insert_question(&mut transaction, quiz_id, new_question).await?;

        transaction.commit().await.map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        Ok(Some(question))
    }

    /// Deletes a quiz and everything it owns. The cascade is explicit:
    /// answers first, then questions, then the quiz row, all in one
    /// transaction. `Ok(false)` when the public identifier is unknown.
    pub async fn delete_quiz(&self, public_id: &str) -> Result<bool, Error> {
        let mut transaction = self.connection.begin().await.map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        let quiz_row = sqlx::query("SELECT id FROM quizzes WHERE public_id = $1")
            .bind(public_id)
            .fetch_optional(&mut transaction)
            .await
            .map_err(|error| {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Error::DatabaseQueryError(error)
            })?;

        let quiz_id: i32 = match quiz_row {
            Some(row) => row.get("id"),
            None => return Ok(false),
        };

        sqlx::query(
            "DELETE FROM answers
            WHERE question_id IN (SELECT id FROM questions WHERE quiz_id = $1)",
        )
        .bind(quiz_id)
        .execute(&mut transaction)
        .await
        .map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        sqlx::query("DELETE FROM questions WHERE quiz_id = $1")
            .bind(quiz_id)
            .execute(&mut transaction)
            .await
            .map_err(|error| {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Error::DatabaseQueryError(error)
            })?;

        sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(quiz_id)
            .execute(&mut transaction)
            .await
            .map_err(|error| {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Error::DatabaseQueryError(error)
            })?;

        transaction.commit().await.map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        Ok(true)
    }

    async fn get_quiz_questions(&self, quiz_id: i32) -> Result<Vec<Question>, Error> {
        let rows = match sqlx::query(
            "SELECT id, content, question_type, points FROM questions
            WHERE quiz_id = $1
            ORDER BY id",
        )
        .bind(quiz_id)
        .fetch_all(&self.connection)
        .await
        {
            Ok(rows) => rows,
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                return Err(Error::DatabaseQueryError(error));
            }
        };

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            let answers = self.get_question_answers(row.get("id")).await?;
            questions.push(Question {
                id: QuestionId(row.get("id")),
                content: row.get("content"),
                question_type: row.get("question_type"),
                points: row.get("points"),
                answers,
            });
        }

        Ok(questions)
    }

    async fn get_question_answers(&self, question_id: i32) -> Result<Vec<Answer>, Error> {
        match sqlx::query(
            "SELECT id, content, is_correct FROM answers
            WHERE question_id = $1
            ORDER BY id",
        )
        .bind(question_id)
        .map(|row: PgRow| Answer {
            id: AnswerId(row.get("id")),
            content: row.get("content"),
            is_correct: row.get("is_correct"),
        })
        .fetch_all(&self.connection)
        .await
        {
            Ok(answers) => Ok(answers),
            Err(error) => {
                tracing::event!(tracing::Level::ERROR, "{:?}", error);
                Err(Error::DatabaseQueryError(error))
            }
        }
    }

    async fn insert_question(
        transaction: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        quiz_id: i32,
        new_question: NewQuestion,
    ) -> Result<Question, Error> {
        let question_row = sqlx::query(
            "INSERT INTO questions (quiz_id, content, question_type, points)
            VALUES ($1, $2, $3, $4)
            RETURNING id",
        )
        .bind(quiz_id)
        .bind(&new_question.content)
        .bind(new_question.question_type)
        .bind(new_question.points)
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;
        let question_id: i32 = question_row.get("id");

        let mut answers = Vec::with_capacity(new_question.answers.len());
        for new_answer in new_question.answers {
            let answer = Self::insert_answer(transaction, question_id, new_answer).await?;
            answers.push(answer);
        }

        Ok(Question {
            id: QuestionId(question_id),
            content: new_question.content,
            question_type: new_question.question_type,
            points: new_question.points,
            answers,
        })
    }

    async fn insert_answer(
        transaction: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        question_id: i32,
        new_answer: NewAnswer,
    ) -> Result<Answer, Error> {
        let answer_row = sqlx::query(
            "INSERT INTO answers (question_id, content, is_correct)
            VALUES ($1, $2, $3)
            RETURNING id",
        )
        .bind(question_id)
        .bind(&new_answer.content)
        .bind(new_answer.is_correct)
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| {
            tracing::event!(tracing::Level::ERROR, "{:?}", error);
            Error::DatabaseQueryError(error)
        })?;

        Ok(Answer {
            id: AnswerId(answer_row.get("id")),
            content: new_answer.content,
            is_correct: new_answer.is_correct,
        })
    }
}
