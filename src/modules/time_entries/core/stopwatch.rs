// Stopwatch session: Idle -> Running -> Idle.
//
// Boundaries
// - Pure state transitions; the caller supplies "now" and persists the emitted entry.
// - The elapsed value is for display only. The emitted entry is built from the start and end
//   instants.

use crate::modules::time_entries::core::invalid_operation::InvalidOperation;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchStatus {
    Idle,
    Running { started_at: DateTime<Utc> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwatch {
    task: String,
    status: StopwatchStatus,
    elapsed: TimeDelta,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self {
            task: String::new(),
            status: StopwatchStatus::Idle,
            elapsed: TimeDelta::zero(),
        }
    }
}

impl Stopwatch {
    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn status(&self) -> StopwatchStatus {
        self.status
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, StopwatchStatus::Running { .. })
    }

    /// The label stays editable while running; `end` uses whatever it holds at that moment.
    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    pub fn start(
        &mut self,
        task: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), InvalidOperation> {
        if self.is_running() {
            return Err(InvalidOperation::SessionActive);
        }
        let task = task.into();
        if task.trim().is_empty() {
            return Err(InvalidOperation::EmptyTask);
        }
        self.task = task;
        self.status = StopwatchStatus::Running { started_at: now };
        self.elapsed = TimeDelta::zero();
        Ok(())
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> TimeDelta {
        if let StopwatchStatus::Running { started_at } = self.status {
            self.elapsed = (now - started_at).max(TimeDelta::zero());
        }
        self.elapsed
    }

    pub fn end(&mut self, now: DateTime<Utc>) -> Result<TimeEntry, InvalidOperation> {
        let StopwatchStatus::Running { started_at } = self.status else {
            return Err(InvalidOperation::NotRunning);
        };
        if self.task.trim().is_empty() {
            return Err(InvalidOperation::EmptyTask);
        }
        let entry = TimeEntry::segment(
            std::mem::take(&mut self.task),
            started_at,
            now.max(started_at),
        );
        *self = Self::default();
        Ok(entry)
    }
}
