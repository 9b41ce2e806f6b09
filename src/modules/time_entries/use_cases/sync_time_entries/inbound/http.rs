use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::time_entries::core::time_entry::newest_first;
use crate::modules::time_entries::use_cases::sync_time_entries::entry_store::EntriesState;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.entries.snapshot();
    Json(EntriesState {
        entries: newest_first(&snapshot.entries),
        ..snapshot
    })
}
