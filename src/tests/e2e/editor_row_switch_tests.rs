use crate::modules::time_entries::core::edit_buffer::BufferEdit;
use crate::modules::time_entries::core::ports::TimeEntries;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::tests::fixtures::app_state::TestApp;
use crate::tests::fixtures::time_entries::TimeEntryBuilder;
use chrono::{NaiveTime, TimeDelta};

#[tokio::test]
async fn commits_the_edited_row_before_switching_to_the_next() {
    let test_app = TestApp::new();
    let entries = test_app.state.entries.clone();
    let editor = test_app.state.editor.clone();
    let mut receiver = entries.watch();
    let _subscription = entries.connect().await;
    let base = TimeEntryBuilder::new().build();
    for (task, hours) in [("Write spec", 0), ("Review", 2)] {
        entries
            .add_entry(
                TimeEntryBuilder::new()
                    .task(task)
                    .start_time(base.start_time + TimeDelta::hours(hours))
                    .end_time(base.end_time + TimeDelta::hours(hours))
                    .build(),
            )
            .await
            .unwrap();
    }
    let confirmed = receiver
        .wait_for(|state| state.entries.len() == 2)
        .await
        .unwrap()
        .entries
        .clone();
    let (a, b) = (confirmed[0].clone(), confirmed[1].clone());

    editor.select(Some(&a.key)).await.unwrap();
    editor
        .edit(BufferEdit {
            task: Some("Write spec v2".into()),
            end_time: NaiveTime::from_hms_opt(9, 50, 0),
            ..BufferEdit::default()
        })
        .await
        .unwrap();
    let loaded = editor.select(Some(&b.key)).await.unwrap().unwrap();

    let updated = receiver
        .wait_for(|state| state.entries.iter().any(|entry| entry.task == "Write spec v2"))
        .await
        .unwrap()
        .entries
        .clone();
    assert_eq!(loaded.key, b.key);
    assert_eq!(updated.len(), 2);
    let edited: &TimeEntry = updated.iter().find(|entry| entry.key == a.key).unwrap();
    assert_eq!(edited.start_time, a.start_time);
    assert_eq!(edited.end_time, a.start_time + TimeDelta::minutes(50));
    assert_eq!(edited.created_at, a.created_at);
    let untouched = updated.iter().find(|entry| entry.key == b.key).unwrap();
    assert_eq!(untouched, &b);
}

#[tokio::test]
async fn deletes_the_selected_row_without_committing_its_edits() {
    let test_app = TestApp::new();
    let entries = test_app.state.entries.clone();
    let editor = test_app.state.editor.clone();
    let mut receiver = entries.watch();
    let _subscription = entries.connect().await;
    entries
        .add_entry(TimeEntryBuilder::new().build())
        .await
        .unwrap();
    let key = receiver
        .wait_for(|state| !state.entries.is_empty())
        .await
        .unwrap()
        .entries[0]
        .key
        .clone();

    editor.select(Some(&key)).await.unwrap();
    editor
        .edit(BufferEdit {
            task: Some("Never saved".into()),
            ..BufferEdit::default()
        })
        .await
        .unwrap();
    editor.delete(&key).await.unwrap();

    receiver
        .wait_for(|state| state.entries.is_empty())
        .await
        .unwrap();
    assert!(test_app.documents.documents().await.is_empty());
    assert_eq!(editor.selection().await, None);
}
