use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum InvalidEntry {
    #[error("task must not be empty")]
    EmptyTask,

    #[error("end time must not be before start time")]
    InvalidInterval,
}

/// One worked task segment. Immutable: edits produce a new value under the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub key: String,
    pub task: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl TimeEntry {
    /// A not yet persisted segment under a fresh client-side key.
    pub fn segment(
        task: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            key: Uuid::now_v7().to_string(),
            task: task.into(),
            start_time,
            end_time,
            created_at: None,
            updated_at: None,
            user_id: None,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    pub fn validate(&self) -> Result<(), InvalidEntry> {
        if self.task.trim().is_empty() {
            return Err(InvalidEntry::EmptyTask);
        }
        if self.end_time < self.start_time {
            return Err(InvalidEntry::InvalidInterval);
        }
        Ok(())
    }
}

/// Table order: latest start first, ties keep arrival order.
pub fn newest_first(entries: &[TimeEntry]) -> Vec<TimeEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    sorted
}
