use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::time_entries::use_cases::edit_time_entries::inbound::graphql::{
    EditorMutation, SelectionQuery,
};
use crate::modules::time_entries::use_cases::report_time_per_task::inbound::graphql::ReportQuery;
use crate::modules::time_entries::use_cases::sync_time_entries::inbound::graphql::TimeEntriesQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeEntriesQuery, ReportQuery, SelectionQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(EditorMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
