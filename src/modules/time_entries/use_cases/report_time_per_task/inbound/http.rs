use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::time_entries::core::ports::TimeEntries;
use crate::modules::time_entries::core::report::summarize;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(summarize(
        &state.entries.entries(),
        state.clock.now(),
        state.calendar_offset,
    ))
}
