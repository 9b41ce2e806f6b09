use crate::modules::time_entries::core::ports::TimeEntries;
use crate::modules::time_entries::core::report::summarize;
use crate::tests::fixtures::app_state::TestApp;
use crate::tests::fixtures::time_entries::TimeEntryBuilder;
use chrono::{TimeDelta, TimeZone, Utc};

#[tokio::test]
async fn summarizes_the_confirmed_collection_by_calendar_day() {
    let test_app = TestApp::new();
    let entries = test_app.state.entries.clone();
    let mut receiver = entries.watch();
    let _subscription = entries.connect().await;
    let starts = [
        ("Yesterday", Utc.with_ymd_and_hms(2024, 1, 9, 8, 0, 0).unwrap()),
        ("Last week", Utc.with_ymd_and_hms(2024, 1, 3, 8, 0, 0).unwrap()),
        ("Ages ago", Utc.with_ymd_and_hms(2023, 12, 20, 8, 0, 0).unwrap()),
        ("Yesterday", Utc.with_ymd_and_hms(2024, 1, 9, 15, 0, 0).unwrap()),
    ];
    for (task, start) in starts {
        entries
            .add_entry(
                TimeEntryBuilder::new()
                    .task(task)
                    .start_time(start)
                    .end_time(start + TimeDelta::minutes(20))
                    .build(),
            )
            .await
            .unwrap();
    }
    receiver
        .wait_for(|state| state.entries.len() == starts.len())
        .await
        .unwrap();

    let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
    let report = summarize(&entries.entries(), now, test_app.state.calendar_offset);

    let daily: Vec<(&str, i64)> = report
        .daily
        .iter()
        .map(|total| (total.task.as_str(), total.milliseconds))
        .collect();
    let weekly: Vec<(&str, i64)> = report
        .weekly
        .iter()
        .map(|total| (total.task.as_str(), total.milliseconds))
        .collect();
    assert_eq!(daily, vec![("Yesterday", 40 * 60_000)]);
    assert_eq!(
        weekly,
        vec![("Yesterday", 40 * 60_000), ("Last week", 20 * 60_000)]
    );
}
