use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::time_entries::core::ports::EntryStoreError;
use crate::modules::time_entries::use_cases::report_time_per_task::inbound::http as report_http;
use crate::modules::time_entries::use_cases::sync_time_entries::inbound::http as entries_http;
use crate::modules::time_entries::use_cases::timer_error::TimerError;
use crate::modules::time_entries::use_cases::track_with_pomodoro::inbound::http as pomodoro_http;
use crate::modules::time_entries::use_cases::track_with_stopwatch::inbound::http as stopwatch_http;
use crate::shared::infrastructure::document_store::PersistenceError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/time-entries", get(entries_http::handle))
        .route("/stopwatch", get(stopwatch_http::view))
        .route("/stopwatch/start", post(stopwatch_http::start))
        .route("/stopwatch/task", put(stopwatch_http::set_task))
        .route("/stopwatch/end", post(stopwatch_http::end))
        .route("/pomodoro", get(pomodoro_http::view))
        .route("/pomodoro/start", post(pomodoro_http::start))
        .route("/pomodoro/task", put(pomodoro_http::set_task))
        .route("/pomodoro/pause", post(pomodoro_http::pause))
        .route("/pomodoro/resume", post(pomodoro_http::resume))
        .route("/pomodoro/retry", post(pomodoro_http::retry_unsaved))
        .route("/reports", get(report_http::handle))
        .with_state(state)
}

pub fn entry_store_status(error: &EntryStoreError) -> StatusCode {
    match error {
        EntryStoreError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EntryStoreError::Persistence(PersistenceError::NotFound(_)) => StatusCode::NOT_FOUND,
        EntryStoreError::Persistence(PersistenceError::Backend(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn timer_error_response(error: TimerError) -> Response {
    let status = match &error {
        TimerError::InvalidOperation(_) => StatusCode::CONFLICT,
        TimerError::Store { source, .. } => entry_store_status(source),
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
