// Shared test fixture for time entries, seeded from json/time_entry.json.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::{DateTime, Utc};
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntryDto {
    pub key: String,
    pub task: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEntryBuilder {
    pub fn new() -> Self {
        let dto: TimeEntryDto =
            serde_json::from_str(include_str!("json/time_entry.json")).unwrap();

        Self {
            inner: TimeEntry {
                key: dto.key,
                task: dto.task,
                start_time: dto.start_time,
                end_time: dto.end_time,
                created_at: None,
                updated_at: None,
                user_id: None,
            },
        }
    }

    pub fn key(mut self, v: impl Into<String>) -> Self {
        self.inner.key = v.into();
        self
    }

    pub fn task(mut self, v: impl Into<String>) -> Self {
        self.inner.task = v.into();
        self
    }

    pub fn start_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = Some(v);
        self
    }

    pub fn updated_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.updated_at = Some(v);
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = Some(v.into());
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use chrono::TimeDelta;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TimeEntryBuilder::default().build();

        assert_eq!(built.key, "te-fixed-0001");
        assert_eq!(built.task, "Write spec");
        assert_eq!(built.duration(), TimeDelta::minutes(25));
        assert_eq!(built.created_at, None);
    }

    #[rstest]
    fn setters_override_the_json_values() {
        let start = Utc::now();
        let built = TimeEntryBuilder::new()
            .key("te-2")
            .task("Review")
            .start_time(start)
            .end_time(start)
            .created_at(start)
            .updated_at(start)
            .user_id("u-2")
            .build();

        assert_eq!(built.key, "te-2");
        assert_eq!(built.task, "Review");
        assert_eq!(built.duration(), TimeDelta::zero());
        assert_eq!(built.created_at, Some(start));
        assert_eq!(built.updated_at, Some(start));
        assert_eq!(built.user_id.as_deref(), Some("u-2"));
    }
}
