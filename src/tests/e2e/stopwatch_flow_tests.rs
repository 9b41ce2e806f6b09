use crate::modules::time_entries::core::ports::TimeEntries;
use crate::shared::core::clock::Clock;
use crate::tests::fixtures::app_state::TestApp;
use chrono::TimeDelta;

#[tokio::test]
async fn records_a_stopwatch_segment_in_the_entry_store() {
    let test_app = TestApp::new();
    let entries = test_app.state.entries.clone();
    let mut receiver = entries.watch();
    let _subscription = entries.connect().await;
    let t0 = test_app.clock.now();

    test_app.state.stopwatch.start("Write spec").await.unwrap();
    test_app.clock.advance(TimeDelta::seconds(90));
    test_app.state.stopwatch.end().await.unwrap();

    let state = receiver
        .wait_for(|state| !state.entries.is_empty())
        .await
        .unwrap()
        .clone();
    assert_eq!(state.entries.len(), 1);
    let entry = &state.entries[0];
    assert_eq!(entry.task, "Write spec");
    assert_eq!(entry.start_time, t0);
    assert_eq!(entry.end_time, t0 + TimeDelta::seconds(90));
    assert_eq!(entry.created_at, Some(t0 + TimeDelta::seconds(90)));
    assert_eq!(test_app.documents.documents().await.len(), 1);
    assert!(!test_app.state.stopwatch.view().await.running);
    assert_eq!(entries.entries(), state.entries);
}
