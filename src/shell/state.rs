use crate::modules::time_entries::core::external_record::ExternalRecord;
use crate::modules::time_entries::use_cases::edit_time_entries::handler::EntryEditor;
use crate::modules::time_entries::use_cases::sync_time_entries::entry_store::EntryStore;
use crate::modules::time_entries::use_cases::track_with_pomodoro::handler::PomodoroTimer;
use crate::modules::time_entries::use_cases::track_with_stopwatch::handler::StopwatchTimer;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shell::config::Settings;
use chrono::FixedOffset;
use std::sync::Arc;

pub type Documents = InMemoryDocumentStore<ExternalRecord>;
pub type Entries = EntryStore<Documents>;

#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<Entries>,
    pub stopwatch: Arc<StopwatchTimer<Entries>>,
    pub pomodoro: Arc<PomodoroTimer<Entries>>,
    pub editor: Arc<EntryEditor<Entries>>,
    pub clock: Arc<dyn Clock>,
    pub calendar_offset: FixedOffset,
}

impl AppState {
    pub fn new(documents: Arc<Documents>, clock: Arc<dyn Clock>, settings: &Settings) -> Self {
        let entries = Arc::new(EntryStore::new(
            documents,
            clock.clone(),
            settings.tracking.user_id.clone(),
        ));
        let calendar_offset = settings.calendar_offset();
        Self {
            stopwatch: Arc::new(StopwatchTimer::new(
                entries.clone(),
                clock.clone(),
                settings.tick_period(),
            )),
            pomodoro: Arc::new(PomodoroTimer::new(
                entries.clone(),
                clock.clone(),
                settings.durations(),
                settings.tick_period(),
            )),
            editor: Arc::new(EntryEditor::new(entries.clone(), calendar_offset)),
            entries,
            clock,
            calendar_offset,
        }
    }
}
