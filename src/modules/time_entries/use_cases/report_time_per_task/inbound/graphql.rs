use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::core::ports::TimeEntries;
use crate::modules::time_entries::core::report::{Report, TaskTotal, summarize};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTaskTotal {
    pub task: String,
    pub milliseconds: i64,
}

impl From<TaskTotal> for GqlTaskTotal {
    fn from(v: TaskTotal) -> Self {
        Self {
            task: v.task,
            milliseconds: v.milliseconds,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlReport {
    pub daily: Vec<GqlTaskTotal>,
    pub weekly: Vec<GqlTaskTotal>,
}

impl From<Report> for GqlReport {
    fn from(v: Report) -> Self {
        Self {
            daily: v.daily.into_iter().map(Into::into).collect(),
            weekly: v.weekly.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ReportQuery;

#[Object]
impl ReportQuery {
    /// Time per task over the last day and the last week.
    async fn report(&self, context: &Context<'_>) -> GqlResult<GqlReport> {
        let state = context.data_unchecked::<AppState>();
        let report = summarize(
            &state.entries.entries(),
            state.clock.now(),
            state.calendar_offset,
        );
        Ok(report.into())
    }
}
