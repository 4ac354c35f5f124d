#![warn(clippy::all)]

use handle_errors::return_error;
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{Filter, http::Method};

mod config;
mod routes;
mod scoring;
mod store;
mod types;

#[tokio::main]
async fn main() {
    let config = config::Config::new().expect("Config can't be set");

    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},quiz_api={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        // Use the filter we built above to decide which traces to record.
        .with_env_filter(log_filter)
        // Record an event when each span closes.
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = store::Store::new(&format!(
        "postgres://{}:{}@{}:{}/{}",
        config.db_user, config.db_password, config.db_host, config.db_port, config.db_name
    ))
    .await;

    sqlx::migrate!()
        .run(&store.clone().connection)
        .await
        .expect("Cannot run migration");

    let store_filter = warp::any().map(move || store.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("Content-Type")
        .allow_methods(&[Method::PUT, Method::DELETE, Method::POST, Method::GET]);

    let create_quiz = warp::post()
        .and(warp::path("quizzes"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::quiz::create_quiz);

    let get_quizzes = warp::get()
        .and(warp::path("quizzes"))
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::quiz::get_quizzes)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "get_quizzes request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let get_quiz = warp::get()
        .and(warp::path("quizzes"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::quiz::get_quiz);

    let delete_quiz = warp::delete()
        .and(warp::path("quizzes"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::quiz::delete_quiz);

    let add_question = warp::post()
        .and(warp::path("quizzes"))
        .and(warp::path::param::<String>())
        .and(warp::path("questions"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::question::add_question);

    let get_public_quiz = warp::get()
        .and(warp::path("public"))
        .and(warp::path("quizzes"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(store_filter.clone())
        .and_then(routes::quiz::get_public_quiz);

    let submit_quiz = warp::post()
        .and(warp::path("public"))
        .and(warp::path("quizzes"))
        .and(warp::path::param::<String>())
        .and(warp::path("submit"))
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(routes::quiz::submit_quiz);

    let routes = create_quiz
        .or(get_quizzes)
        .or(get_quiz)
        .or(delete_quiz)
        .or(add_question)
        .or(get_public_quiz)
        .or(submit_quiz)
        .with(cors)
        .with(warp::trace::request())
        .recover(return_error);

    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}
