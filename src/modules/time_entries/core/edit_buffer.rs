// Working copy of the row selected in the entries table.
//
// Responsibilities
// - Hold the task label and the start/end time-of-day as the user edits them.
// - Recombine edited times with the original calendar dates. Dates never change here.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::{DateTime, FixedOffset, NaiveTime, TimeDelta, Timelike, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub key: String,
    pub task: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Partial change to the buffer. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferEdit {
    pub task: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

fn time_of_day(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveTime {
    let local = instant.with_timezone(&offset).time();
    local.with_nanosecond(0).unwrap_or(local)
}

/// Moves `instant` to `time` on its own calendar date, keeping the sub-second part.
pub fn with_time_of_day(
    instant: DateTime<Utc>,
    time: NaiveTime,
    offset: FixedOffset,
) -> DateTime<Utc> {
    let local = instant.with_timezone(&offset);
    let time = time.with_nanosecond(local.nanosecond()).unwrap_or(time);
    let naive_utc =
        local.date_naive().and_time(time) - TimeDelta::seconds(offset.local_minus_utc().into());
    naive_utc.and_utc()
}

impl EditBuffer {
    pub fn from_entry(entry: &TimeEntry, offset: FixedOffset) -> Self {
        Self {
            key: entry.key.clone(),
            task: entry.task.clone(),
            start_time: time_of_day(entry.start_time, offset),
            end_time: time_of_day(entry.end_time, offset),
        }
    }

    pub fn edit(&mut self, edit: BufferEdit) {
        if let Some(task) = edit.task {
            self.task = task;
        }
        if let Some(start_time) = edit.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = edit.end_time {
            self.end_time = end_time;
        }
    }

    /// The committed value: `original` with this buffer's label and times of day.
    pub fn apply_to(&self, original: &TimeEntry, offset: FixedOffset) -> TimeEntry {
        TimeEntry {
            task: self.task.clone(),
            start_time: with_time_of_day(original.start_time, self.start_time, offset),
            end_time: with_time_of_day(original.end_time, self.end_time, offset),
            ..original.clone()
        }
    }
}
