use std::collections::HashMap;
use tracing::{Level, event, instrument};

use crate::scoring::score_submission;
use crate::store::Store;
use crate::types::pagination::{Pagination, extract_pagination};
use crate::types::quiz::{NewQuiz, PublicQuiz};
use crate::types::response::ApiResponse;
use crate::types::submission::Submission;

pub async fn create_quiz(
    store: Store,
    new_quiz: NewQuiz,
) -> Result<impl warp::Reply, warp::Rejection> {
    if new_quiz.questions.iter().any(|question| question.points < 1) {
        return Err(warp::reject::custom(
            handle_errors::Error::InvalidQuestionPoints,
        ));
    }

    match store.add_quiz(new_quiz).await {
        Ok(quiz) => Ok(warp::reply::json(&ApiResponse::ok(
            quiz,
            "Quiz created successfully",
        ))),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

#[instrument]
pub async fn get_quizzes(
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    event!(target: "quiz_api", Level::INFO, "querying quizzes");
    let mut pagination = Pagination::default();

    if !params.is_empty() {
        event!(Level::INFO, pagination = true);
        pagination = extract_pagination(params)?;
    }

    match store
        .get_quizzes(pagination.limit, pagination.offset)
        .await
    {
        Ok(quizzes) => Ok(warp::reply::json(&ApiResponse::ok(
            quizzes,
            "Quizzes retrieved successfully",
        ))),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

pub async fn get_quiz(id: String, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    match store.get_quiz_by_public_id(&id).await {
        Ok(Some(quiz)) => Ok(warp::reply::json(&ApiResponse::ok(
            quiz,
            "Quiz retrieved successfully",
        ))),
        Ok(None) => Err(warp::reject::custom(handle_errors::Error::QuizNotFound)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

/// Learner-facing view: same quiz, with every answer's correctness flag
/// stripped before it crosses the wire.
pub async fn get_public_quiz(
    id: String,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.get_quiz_by_public_id(&id).await {
        Ok(Some(quiz)) => Ok(warp::reply::json(&ApiResponse::ok(
            PublicQuiz::from(quiz),
            "Quiz retrieved successfully",
        ))),
        Ok(None) => Err(warp::reject::custom(handle_errors::Error::QuizNotFound)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

pub async fn delete_quiz(id: String, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    match store.delete_quiz(&id).await {
        Ok(true) => Ok(warp::reply::json(&ApiResponse::<()>::message(format!(
            "Quiz {} deleted",
            id
        )))),
        Ok(false) => Err(warp::reject::custom(handle_errors::Error::QuizNotFound)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

#[instrument]
pub async fn submit_quiz(
    id: String,
    store: Store,
    submission: Submission,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.get_quiz_by_public_id(&id).await {
        Ok(Some(quiz)) => {
            let result = score_submission(&quiz, &submission);
            Ok(warp::reply::json(&ApiResponse::ok(
                result,
                "Quiz submitted successfully",
            )))
        }
        Ok(None) => Err(warp::reject::custom(handle_errors::Error::QuizNotFound)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}
