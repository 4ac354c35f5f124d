use serde::Serialize;
use warp::{
    Rejection, Reply,
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
};

use tracing::{Level, event, instrument};

#[derive(Debug)]
pub enum Error {
    ParseError(std::num::ParseIntError),
    MissingParameters,
    QuizNotFound,
    InvalidQuestionPoints,
    DatabaseQueryError(sqlx::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &*self {
            Error::ParseError(err) => {
                write!(f, "Cannot parse parameter: {}", err)
            }
            Error::MissingParameters => {
                write!(f, "Missing parameters")
            }
            Error::QuizNotFound => {
                write!(f, "Quiz not found")
            }
            Error::InvalidQuestionPoints => {
                write!(f, "Question points must be at least 1")
            }
            Error::DatabaseQueryError(_) => {
                write!(f, "Cannot process quiz data")
            }
        }
    }
}

impl Reject for Error {}

/// Error replies carry the same envelope shape as the success path:
/// `{"success": false, "message": ..., "data": null}`.
#[derive(Serialize, Debug)]
struct ErrorResponse {
    success: bool,
    message: String,
    data: Option<()>,
}

fn error_reply(
    message: String,
    status: StatusCode,
) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorResponse {
            success: false,
            message,
            data: None,
        }),
        status,
    )
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(crate::Error::QuizNotFound) = r.find() {
        event!(Level::WARN, "quiz not found");
        Ok(error_reply(
            Error::QuizNotFound.to_string(),
            StatusCode::NOT_FOUND,
        ))
    } else if let Some(crate::Error::DatabaseQueryError(e)) = r.find() {
        event!(Level::ERROR, "Database query error: {:?}", e);
        Ok(error_reply(
            "Cannot process quiz data".to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "CORS forbidden error: {}", error);
        Ok(error_reply(error.to_string(), StatusCode::FORBIDDEN))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::ERROR, "Cannot deserialize request body: {}", error);
        Ok(error_reply(
            error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else if let Some(error) = r.find::<Error>() {
        event!(Level::ERROR, "{}", error);
        Ok(error_reply(
            error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else {
        event!(Level::WARN, "Requested route was not found");
        Ok(error_reply(
            "Route not found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    }
}
