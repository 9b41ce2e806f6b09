use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

pub const DAILY_WINDOW_DAYS: i64 = 1;
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskTotal {
    pub task: String,
    pub milliseconds: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub daily: Vec<TaskTotal>,
    pub weekly: Vec<TaskTotal>,
}

/// Whole calendar days from the date of `start` to the date of `now`, both read at `offset`.
/// Negative when `start` lies on a later date.
pub fn calendar_days_between(
    start: DateTime<Utc>,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> i64 {
    let start_date = start.with_timezone(&offset).date_naive();
    let today = now.with_timezone(&offset).date_naive();
    (today - start_date).num_days()
}

fn totals_within<'a>(
    entries: impl Iterator<Item = (&'a TimeEntry, i64)>,
    window_days: i64,
) -> Vec<TaskTotal> {
    let mut totals: Vec<TaskTotal> = Vec::new();
    for (entry, days) in entries {
        if days > window_days {
            continue;
        }
        let milliseconds = entry.duration().num_milliseconds();
        match totals.iter_mut().find(|total| total.task == entry.task) {
            Some(total) => total.milliseconds += milliseconds,
            None => totals.push(TaskTotal {
                task: entry.task.clone(),
                milliseconds,
            }),
        }
    }
    totals
}

/// Time per task over the last day and the last week. Tasks appear in the order they are
/// first met in `entries`.
pub fn summarize(entries: &[TimeEntry], now: DateTime<Utc>, offset: FixedOffset) -> Report {
    let aged: Vec<(&TimeEntry, i64)> = entries
        .iter()
        .map(|entry| {
            (
                entry,
                calendar_days_between(entry.start_time, now, offset),
            )
        })
        .collect();
    Report {
        daily: totals_within(aged.iter().copied(), DAILY_WINDOW_DAYS),
        weekly: totals_within(aged.iter().copied(), WEEKLY_WINDOW_DAYS),
    }
}
