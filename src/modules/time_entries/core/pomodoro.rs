// Pomodoro cycle: task phases separated by short breaks, with a long break after every
// `tasks_per_long_break`-th completed task phase.
//
// Per phase: Idle -> Running -> Paused -> Running -> ... -> phase ends -> Idle (next phase).
//
// Boundaries
// - Pure state transitions; the caller supplies "now" and persists emitted entries.
// - Only task phases emit entries, one per run segment (start/resume until pause/completion).

use crate::modules::time_entries::core::invalid_operation::InvalidOperation;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Task,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn display_name(self) -> &'static str {
        match self {
            Phase::Task => "Task",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_task(self) -> bool {
        self == Phase::Task
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PomodoroDurations {
    pub task: TimeDelta,
    pub short_break: TimeDelta,
    pub long_break: TimeDelta,
    pub tasks_per_long_break: u32,
}

impl Default for PomodoroDurations {
    fn default() -> Self {
        Self {
            task: TimeDelta::minutes(25),
            short_break: TimeDelta::minutes(5),
            long_break: TimeDelta::minutes(15),
            tasks_per_long_break: 4,
        }
    }
}

impl PomodoroDurations {
    pub fn of(&self, phase: Phase) -> TimeDelta {
        match phase {
            Phase::Task => self.task,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }

    /// Phase that follows `phase`, given the completed task count after `phase` ended.
    pub fn phase_after(&self, phase: Phase, completed_tasks: u32) -> Phase {
        match phase {
            Phase::Task if completed_tasks % self.tasks_per_long_break.max(1) == 0 => {
                Phase::LongBreak
            }
            Phase::Task => Phase::ShortBreak,
            Phase::ShortBreak | Phase::LongBreak => Phase::Task,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PomodoroStatus {
    Idle,
    Running { started_at: DateTime<Utc> },
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseCompletion {
    pub completed: Phase,
    pub next: Phase,
    pub entry: Option<TimeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is running; a ticker observing this should stop.
    Stopped,
    Counting { remaining: TimeDelta },
    PhaseCompleted(PhaseCompletion),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pomodoro {
    durations: PomodoroDurations,
    phase: Phase,
    completed_tasks: u32,
    task: String,
    status: PomodoroStatus,
    // Budget left when the current segment started.
    remaining: TimeDelta,
    // Elapsed within the current segment as of the last tick.
    elapsed: TimeDelta,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(PomodoroDurations::default())
    }
}

impl Pomodoro {
    pub fn new(durations: PomodoroDurations) -> Self {
        Self {
            durations,
            phase: Phase::Task,
            completed_tasks: 0,
            task: String::new(),
            status: PomodoroStatus::Idle,
            remaining: durations.of(Phase::Task),
            elapsed: TimeDelta::zero(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn completed_tasks(&self) -> u32 {
        self.completed_tasks
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn status(&self) -> PomodoroStatus {
        self.status
    }

    pub fn remaining_budget(&self) -> TimeDelta {
        self.remaining
    }

    /// Countdown as of the last tick.
    pub fn countdown(&self) -> TimeDelta {
        (self.remaining - self.elapsed).max(TimeDelta::zero())
    }

    pub fn upcoming_phase(&self) -> Phase {
        let completed = if self.phase.is_task() {
            self.completed_tasks + 1
        } else {
            self.completed_tasks
        };
        self.durations.phase_after(self.phase, completed)
    }

    pub fn label(&self) -> String {
        format!(
            "{} (next: {})",
            self.phase.display_name(),
            self.upcoming_phase().display_name()
        )
    }

    pub fn set_task(&mut self, task: impl Into<String>) -> Result<(), InvalidOperation> {
        if self.status != PomodoroStatus::Idle {
            return Err(InvalidOperation::TaskLocked);
        }
        self.task = task.into();
        Ok(())
    }

    /// Breaks may start without a label since they never emit entries.
    pub fn start(
        &mut self,
        task: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), InvalidOperation> {
        if self.status != PomodoroStatus::Idle {
            return Err(InvalidOperation::SessionActive);
        }
        let task = task.into();
        if self.phase.is_task() && task.trim().is_empty() {
            return Err(InvalidOperation::EmptyTask);
        }
        self.task = task;
        self.status = PomodoroStatus::Running { started_at: now };
        self.elapsed = TimeDelta::zero();
        Ok(())
    }

    /// Closes the running segment and carries the unused budget over to `resume`.
    /// A pause that arrives after the budget ran out completes the phase instead.
    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<Option<TimeEntry>, InvalidOperation> {
        let PomodoroStatus::Running { started_at } = self.status else {
            return Err(InvalidOperation::NotRunning);
        };
        if now - started_at >= self.remaining {
            return Ok(self.complete_phase(started_at).entry);
        }
        let end_time = now.max(started_at);
        let entry = self
            .phase
            .is_task()
            .then(|| TimeEntry::segment(self.task.clone(), started_at, end_time));
        self.remaining = (self.remaining - (end_time - started_at)).max(TimeDelta::zero());
        self.elapsed = TimeDelta::zero();
        self.status = PomodoroStatus::Paused;
        Ok(entry)
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> Result<(), InvalidOperation> {
        if self.status != PomodoroStatus::Paused {
            return Err(InvalidOperation::NotPaused);
        }
        self.status = PomodoroStatus::Running { started_at: now };
        self.elapsed = TimeDelta::zero();
        Ok(())
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let PomodoroStatus::Running { started_at } = self.status else {
            return TickOutcome::Stopped;
        };
        self.elapsed = (now - started_at).max(TimeDelta::zero());
        if self.elapsed >= self.remaining {
            return TickOutcome::PhaseCompleted(self.complete_phase(started_at));
        }
        TickOutcome::Counting {
            remaining: self.remaining - self.elapsed,
        }
    }

    fn complete_phase(&mut self, started_at: DateTime<Utc>) -> PhaseCompletion {
        let completed = self.phase;
        let entry = if completed.is_task() {
            self.completed_tasks += 1;
            // The phase ended when its budget ran out, not when the tick noticed.
            Some(TimeEntry::segment(
                std::mem::take(&mut self.task),
                started_at,
                started_at + self.remaining,
            ))
        } else {
            None
        };
        let next = self.durations.phase_after(completed, self.completed_tasks);
        self.phase = next;
        self.remaining = self.durations.of(next);
        self.elapsed = TimeDelta::zero();
        self.task.clear();
        self.status = PomodoroStatus::Idle;
        PhaseCompletion {
            completed,
            next,
            entry,
        }
    }
}
