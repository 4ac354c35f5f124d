use crate::store::Store;
use crate::types::question::NewQuestion;
use crate::types::response::ApiResponse;

pub async fn add_question(
    quiz_id: String,
    store: Store,
    new_question: NewQuestion,
) -> Result<impl warp::Reply, warp::Rejection> {
    if new_question.points < 1 {
        return Err(warp::reject::custom(
            handle_errors::Error::InvalidQuestionPoints,
        ));
    }

    match store.add_question(&quiz_id, new_question).await {
        Ok(Some(question)) => Ok(warp::reply::json(&ApiResponse::ok(
            question,
            "Question added successfully",
        ))),
        Ok(None) => Err(warp::reject::custom(handle_errors::Error::QuizNotFound)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}
