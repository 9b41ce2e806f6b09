// Mapping between the time entry value and the document stored by the persistence collaborator.
//
// Responsibilities
// - Convert timestamps between chrono and the database's native Timestamp.
// - Stamp persistence metadata: creation keeps an existing created_at, every write refreshes
//   updated_at to the call time.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::document_store::{Timestamp, UserScoped};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRecord {
    pub task: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub user_id: String,
}

impl UserScoped for ExternalRecord {
    fn user_id(&self) -> &str {
        &self.user_id
    }
}

pub fn to_external(entry: &TimeEntry, user_id: &str, now: DateTime<Utc>) -> ExternalRecord {
    ExternalRecord {
        task: entry.task.clone(),
        start_time: entry.start_time.into(),
        end_time: entry.end_time.into(),
        created_at: entry.created_at.unwrap_or(now).into(),
        updated_at: now.into(),
        user_id: user_id.to_string(),
    }
}

pub fn from_external(id: &str, record: ExternalRecord) -> TimeEntry {
    TimeEntry {
        key: id.to_string(),
        task: record.task,
        start_time: record.start_time.into(),
        end_time: record.end_time.into(),
        created_at: Some(record.created_at.into()),
        updated_at: Some(record.updated_at.into()),
        user_id: Some(record.user_id),
    }
}
