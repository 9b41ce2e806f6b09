// Pomodoro use case: work/break phases counted down by an owned ticker.
//
// Responsibilities
// - Guard the pomodoro session; start, pause and resume it on request.
// - Advance the phase once its countdown reaches zero.
// - Store every finished task segment (pause or completion) through the time entries port.
// - Hold segments the port rejected until a retry stores them.

use crate::modules::time_entries::core::clock_face::ClockFace;
use crate::modules::time_entries::core::pomodoro::{
    Phase, Pomodoro, PomodoroDurations, PomodoroStatus, TickOutcome,
};
use crate::modules::time_entries::core::ports::TimeEntries;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::timer_error::TimerError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::ticker::Ticker;
use serde::Serialize;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomodoroView {
    pub phase: Phase,
    pub next_phase: Phase,
    pub label: String,
    pub task: String,
    #[serde(flatten)]
    pub status: PomodoroStatus,
    pub remaining_seconds: i64,
    pub display: String,
    pub completed_tasks: u32,
    /// Finished task segments the time entries port rejected, oldest first.
    pub unsaved: Vec<TimeEntry>,
}

impl PomodoroView {
    fn new(session: &Pomodoro, unsaved: Vec<TimeEntry>) -> Self {
        let countdown = session.countdown();
        Self {
            phase: session.phase(),
            next_phase: session.upcoming_phase(),
            label: session.label(),
            task: session.task().to_string(),
            status: session.status(),
            remaining_seconds: countdown.num_seconds(),
            display: ClockFace::from(countdown).to_string(),
            completed_tasks: session.completed_tasks(),
            unsaved,
        }
    }
}

struct Session<TEntries: TimeEntries + ?Sized> {
    entries: Arc<TEntries>,
    clock: Arc<dyn Clock>,
    pomodoro: Mutex<Pomodoro>,
    unsaved: Mutex<Vec<TimeEntry>>,
}

impl<TEntries: TimeEntries + ?Sized> Session<TEntries> {
    async fn view(&self, pomodoro: &Pomodoro) -> PomodoroView {
        PomodoroView::new(pomodoro, self.unsaved.lock().await.clone())
    }

    async fn advance(&self) -> TickOutcome {
        let outcome = self.pomodoro.lock().await.tick(self.clock.now());
        if let TickOutcome::PhaseCompleted(completion) = &outcome {
            info!(
                completed = completion.completed.display_name(),
                next = completion.next.display_name(),
                "pomodoro phase completed"
            );
        }
        outcome
    }

    /// A rejected segment is kept in `unsaved` as well as returned.
    async fn store(&self, entry: TimeEntry) -> Result<(), TimerError> {
        match self.entries.add_entry(entry.clone()).await {
            Ok(()) => Ok(()),
            Err(source) => {
                warn!(error = %source, task = %entry.task, "pomodoro segment was not stored");
                self.unsaved.lock().await.push(entry.clone());
                Err(TimerError::Store { entry, source })
            }
        }
    }
}

pub struct PomodoroTimer<TEntries>
where
    TEntries: TimeEntries + ?Sized + 'static,
{
    session: Arc<Session<TEntries>>,
    tick_period: Duration,
    ticker: Mutex<Option<Ticker>>,
}

impl<TEntries> PomodoroTimer<TEntries>
where
    TEntries: TimeEntries + ?Sized + 'static,
{
    pub fn new(
        entries: Arc<TEntries>,
        clock: Arc<dyn Clock>,
        durations: PomodoroDurations,
        tick_period: Duration,
    ) -> Self {
        Self {
            session: Arc::new(Session {
                entries,
                clock,
                pomodoro: Mutex::new(Pomodoro::new(durations)),
                unsaved: Mutex::new(Vec::new()),
            }),
            tick_period,
            ticker: Mutex::new(None),
        }
    }

    pub async fn view(&self) -> PomodoroView {
        let pomodoro = self.session.pomodoro.lock().await;
        self.session.view(&pomodoro).await
    }

    pub async fn set_task(&self, task: impl Into<String>) -> Result<PomodoroView, TimerError> {
        let mut pomodoro = self.session.pomodoro.lock().await;
        pomodoro.set_task(task)?;
        Ok(self.session.view(&pomodoro).await)
    }

    pub async fn start(&self, task: impl Into<String>) -> Result<PomodoroView, TimerError> {
        let mut ticker = self.ticker.lock().await;
        let view = {
            let mut pomodoro = self.session.pomodoro.lock().await;
            pomodoro.start(task, self.session.clock.now())?;
            info!(
                phase = pomodoro.phase().display_name(),
                task = %pomodoro.task(),
                "pomodoro started"
            );
            self.session.view(&pomodoro).await
        };
        *ticker = Some(self.spawn_ticker());
        Ok(view)
    }

    /// Stops the countdown and stores the task segment that ran until now.
    pub async fn pause(&self) -> Result<Option<TimeEntry>, TimerError> {
        let mut ticker = self.ticker.lock().await;
        let entry = self
            .session
            .pomodoro
            .lock()
            .await
            .pause(self.session.clock.now())?;
        if let Some(ticker) = ticker.take() {
            ticker.cancel();
        }
        drop(ticker);
        info!("pomodoro paused");

        if let Some(entry) = &entry {
            self.session.store(entry.clone()).await?;
        }
        Ok(entry)
    }

    pub async fn resume(&self) -> Result<PomodoroView, TimerError> {
        let mut ticker = self.ticker.lock().await;
        let view = {
            let mut pomodoro = self.session.pomodoro.lock().await;
            pomodoro.resume(self.session.clock.now())?;
            info!(
                remaining_seconds = pomodoro.countdown().num_seconds(),
                "pomodoro resumed"
            );
            self.session.view(&pomodoro).await
        };
        *ticker = Some(self.spawn_ticker());
        Ok(view)
    }

    /// Stores every unsaved segment again. Segments rejected a second time stay unsaved
    /// and the first failure is returned.
    pub async fn retry_unsaved(&self) -> Result<Vec<TimeEntry>, TimerError> {
        let pending = std::mem::take(&mut *self.session.unsaved.lock().await);
        let mut stored = Vec::with_capacity(pending.len());
        let mut failure = None;
        for entry in pending {
            match self.session.store(entry.clone()).await {
                Ok(()) => stored.push(entry),
                Err(error) => {
                    failure.get_or_insert(error);
                }
            }
        }
        match failure {
            Some(error) => Err(error),
            None => {
                if !stored.is_empty() {
                    info!(count = stored.len(), "unsaved pomodoro segments stored");
                }
                Ok(stored)
            }
        }
    }

    /// One countdown step. A completed task phase is stored before this returns.
    pub async fn tick(&self) -> Result<TickOutcome, TimerError> {
        let outcome = self.session.advance().await;
        if let TickOutcome::PhaseCompleted(completion) = &outcome
            && let Some(entry) = &completion.entry
        {
            self.session.store(entry.clone()).await?;
        }
        Ok(outcome)
    }

    fn spawn_ticker(&self) -> Ticker {
        let session = self.session.clone();
        Ticker::spawn(self.tick_period, move || {
            let session = session.clone();
            async move {
                let outcome = session.advance().await;
                match outcome {
                    TickOutcome::Counting { .. } => ControlFlow::Continue(()),
                    TickOutcome::Stopped => ControlFlow::Break(()),
                    TickOutcome::PhaseCompleted(completion) => {
                        // Stored off the ticker task so a later cancel cannot drop the write.
                        // A rejected segment stays in `unsaved` for `retry_unsaved`.
                        if let Some(entry) = completion.entry {
                            tokio::spawn(async move {
                                if session.store(entry).await.is_err() {
                                    warn!("completed pomodoro segment kept for retry");
                                }
                            });
                        }
                        ControlFlow::Break(())
                    }
                }
            }
        })
    }
}
