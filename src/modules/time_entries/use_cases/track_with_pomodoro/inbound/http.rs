use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::track_with_pomodoro::handler::PomodoroView;
use crate::shell::http::timer_error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartPomodoroBody {
    #[serde(default)]
    pub task: String,
}

#[derive(Deserialize)]
pub struct PomodoroTaskBody {
    pub task: String,
}

#[derive(Serialize)]
pub struct PauseResponse {
    pub pomodoro: PomodoroView,
    pub entry: Option<TimeEntry>,
}

#[derive(Serialize)]
pub struct RetryResponse {
    pub pomodoro: PomodoroView,
    pub stored: Vec<TimeEntry>,
}

pub async fn view(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.pomodoro.view().await)
}

pub async fn start(
    State(state): State<AppState>,
    body: Result<Json<StartPomodoroBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.pomodoro.start(body.task).await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => timer_error_response(error),
    }
}

pub async fn set_task(
    State(state): State<AppState>,
    body: Result<Json<PomodoroTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.pomodoro.set_task(body.task).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => timer_error_response(error),
    }
}

pub async fn pause(State(state): State<AppState>) -> impl IntoResponse {
    match state.pomodoro.pause().await {
        Ok(entry) => Json(PauseResponse {
            pomodoro: state.pomodoro.view().await,
            entry,
        })
        .into_response(),
        Err(error) => timer_error_response(error),
    }
}

pub async fn resume(State(state): State<AppState>) -> impl IntoResponse {
    match state.pomodoro.resume().await {
        Ok(view) => Json(view).into_response(),
        Err(error) => timer_error_response(error),
    }
}

pub async fn retry_unsaved(State(state): State<AppState>) -> impl IntoResponse {
    match state.pomodoro.retry_unsaved().await {
        Ok(stored) => Json(RetryResponse {
            pomodoro: state.pomodoro.view().await,
            stored,
        })
        .into_response(),
        Err(error) => timer_error_response(error),
    }
}
