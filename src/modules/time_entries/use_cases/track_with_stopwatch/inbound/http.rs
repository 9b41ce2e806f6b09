use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::http::timer_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TaskBody {
    pub task: String,
}

pub async fn view(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.stopwatch.view().await)
}

pub async fn start(
    State(state): State<AppState>,
    body: Result<Json<TaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.stopwatch.start(body.task).await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => timer_error_response(error),
    }
}

pub async fn set_task(
    State(state): State<AppState>,
    body: Result<Json<TaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    state.stopwatch.set_task(body.task).await;
    Json(state.stopwatch.view().await).into_response()
}

pub async fn end(State(state): State<AppState>) -> impl IntoResponse {
    match state.stopwatch.end().await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => timer_error_response(error),
    }
}
