// Stopwatch use case: one running segment at a time, stored as a time entry when it ends.
//
// Responsibilities
// - Guard the stopwatch session and drive its display tick from an owned ticker.
// - Hand the finished segment to the time entries port.

use crate::modules::time_entries::core::clock_face::ClockFace;
use crate::modules::time_entries::core::ports::TimeEntries;
use crate::modules::time_entries::core::stopwatch::{Stopwatch, StopwatchStatus};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::timer_error::TimerError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::ticker::Ticker;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopwatchView {
    pub task: String,
    pub running: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub elapsed_seconds: i64,
    pub display: String,
}

impl From<&Stopwatch> for StopwatchView {
    fn from(session: &Stopwatch) -> Self {
        let started_at = match session.status() {
            StopwatchStatus::Running { started_at } => Some(started_at),
            StopwatchStatus::Idle => None,
        };
        Self {
            task: session.task().to_string(),
            running: session.is_running(),
            started_at,
            elapsed_seconds: session.elapsed().num_seconds(),
            display: ClockFace::from(session.elapsed()).to_string(),
        }
    }
}

pub struct StopwatchTimer<TEntries>
where
    TEntries: TimeEntries + ?Sized + 'static,
{
    entries: Arc<TEntries>,
    clock: Arc<dyn Clock>,
    tick_period: Duration,
    session: Arc<Mutex<Stopwatch>>,
    ticker: Mutex<Option<Ticker>>,
}

impl<TEntries> StopwatchTimer<TEntries>
where
    TEntries: TimeEntries + ?Sized + 'static,
{
    pub fn new(entries: Arc<TEntries>, clock: Arc<dyn Clock>, tick_period: Duration) -> Self {
        Self {
            entries,
            clock,
            tick_period,
            session: Arc::new(Mutex::new(Stopwatch::default())),
            ticker: Mutex::new(None),
        }
    }

    pub async fn view(&self) -> StopwatchView {
        StopwatchView::from(&*self.session.lock().await)
    }

    pub async fn set_task(&self, task: impl Into<String>) {
        self.session.lock().await.set_task(task);
    }

    pub async fn start(&self, task: impl Into<String>) -> Result<StopwatchView, TimerError> {
        let mut ticker = self.ticker.lock().await;
        let mut session = self.session.lock().await;
        session.start(task, self.clock.now())?;
        info!(task = %session.task(), "stopwatch started");

        let (shared, clock) = (self.session.clone(), self.clock.clone());
        *ticker = Some(Ticker::spawn(self.tick_period, move || {
            let (shared, clock) = (shared.clone(), clock.clone());
            async move {
                let mut session = shared.lock().await;
                if !session.is_running() {
                    return ControlFlow::Break(());
                }
                session.tick(clock.now());
                ControlFlow::Continue(())
            }
        }));
        Ok(StopwatchView::from(&*session))
    }

    pub async fn tick(&self) -> StopwatchView {
        let mut session = self.session.lock().await;
        session.tick(self.clock.now());
        StopwatchView::from(&*session)
    }

    /// Stops the running segment and stores it. The session is idle again even when storing
    /// fails; the lost segment is returned in the error.
    pub async fn end(&self) -> Result<TimeEntry, TimerError> {
        let mut ticker = self.ticker.lock().await;
        let entry = self.session.lock().await.end(self.clock.now())?;
        if let Some(ticker) = ticker.take() {
            ticker.cancel();
        }
        drop(ticker);
        info!(task = %entry.task, seconds = entry.duration().num_seconds(), "stopwatch ended");

        match self.entries.add_entry(entry.clone()).await {
            Ok(()) => Ok(entry),
            Err(source) => {
                warn!(error = %source, "stopwatch segment was not stored");
                Err(TimerError::Store { entry, source })
            }
        }
    }
}
