use crate::modules::time_entries::core::pomodoro::{Phase, PomodoroDurations, TickOutcome};
use crate::modules::time_entries::use_cases::track_with_pomodoro::handler::PomodoroTimer;
use crate::tests::fixtures::clock::ManualClock;
use crate::tests::fixtures::recording_time_entries::RecordingTimeEntries;
use chrono::TimeDelta;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn runs_two_full_cycles_and_stores_one_entry_per_task_phase() {
    let entries = Arc::new(RecordingTimeEntries::default());
    let clock = Arc::new(ManualClock::default());
    let durations = PomodoroDurations::default();
    let timer = PomodoroTimer::new(
        entries.clone(),
        clock.clone(),
        durations,
        Duration::from_secs(3600),
    );
    let mut phases = vec![timer.view().await.phase];

    for round in 0..9 {
        let view = timer.view().await;
        let task = if view.phase == Phase::Task {
            format!("Task {round}")
        } else {
            String::new()
        };
        timer.start(task).await.unwrap();
        clock.advance(durations.of(view.phase));
        match timer.tick().await.unwrap() {
            TickOutcome::PhaseCompleted(completion) => phases.push(completion.next),
            other => panic!("expected the phase to complete, got {other:?}"),
        }
    }

    use Phase::*;
    assert_eq!(
        phases,
        vec![
            Task, ShortBreak, Task, ShortBreak, Task, ShortBreak, Task, LongBreak, Task, ShortBreak
        ]
    );
    let added = entries.added();
    assert_eq!(added.len(), 5);
    assert!(
        added
            .iter()
            .all(|entry| entry.duration() == TimeDelta::minutes(25))
    );
    assert_eq!(timer.view().await.completed_tasks, 5);
}

#[tokio::test]
async fn splits_a_paused_task_phase_into_two_entries_with_the_full_budget() {
    let entries = Arc::new(RecordingTimeEntries::default());
    let clock = Arc::new(ManualClock::default());
    let timer = PomodoroTimer::new(
        entries.clone(),
        clock.clone(),
        PomodoroDurations::default(),
        Duration::from_secs(3600),
    );

    timer.start("Deep work").await.unwrap();
    clock.advance(TimeDelta::minutes(10));
    timer.pause().await.unwrap();
    clock.advance(TimeDelta::minutes(7));
    let resumed = timer.resume().await.unwrap();
    clock.advance(TimeDelta::minutes(15));
    timer.tick().await.unwrap();

    let added = entries.added();
    assert_eq!(resumed.remaining_seconds, 15 * 60);
    assert_eq!(added.len(), 2);
    assert_eq!(
        added[0].duration() + added[1].duration(),
        TimeDelta::minutes(25)
    );
    assert!(added.iter().all(|entry| entry.task == "Deep work"));
    assert_eq!(timer.view().await.phase, Phase::ShortBreak);
}
