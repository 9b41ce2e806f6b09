use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::modules::time_entries::core::ports::TimeEntries;
use crate::modules::time_entries::core::time_entry::{TimeEntry, newest_first};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub key: String,
    pub task: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_seconds: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(v: TimeEntry) -> Self {
        Self {
            duration_seconds: v.duration().num_seconds(),
            key: v.key,
            task: v.task,
            start_time: v.start_time,
            end_time: v.end_time,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    /// Confirmed time entries of the current user, latest start first.
    async fn time_entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        Ok(newest_first(&state.entries.entries())
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
