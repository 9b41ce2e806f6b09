// Test double for the TimeEntries port.
//
// Responsibilities
// - Record every write request in call order.
// - Apply accepted writes immediately, as if the feed confirmed them at once.
// - Reject every write while offline.

use crate::modules::time_entries::core::ports::{EntryStoreError, TimeEntries};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::document_store::PersistenceError;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Add(TimeEntry),
    Update(TimeEntry),
    Delete(String),
}

#[derive(Default)]
pub struct RecordingTimeEntries {
    entries: Mutex<Vec<TimeEntry>>,
    calls: Mutex<Vec<Call>>,
    is_offline: AtomicBool,
}

impl RecordingTimeEntries {
    pub fn with_entries(entries: Vec<TimeEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<TimeEntry> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Add(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn record(&self, call: Call) -> Result<(), EntryStoreError> {
        self.calls.lock().unwrap().push(call);
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(PersistenceError::Backend("Time entries offline".into()).into());
        }
        Ok(())
    }

    fn position(&self, key: &str) -> Result<usize, EntryStoreError> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .position(|entry| entry.key == key)
            .ok_or_else(|| PersistenceError::NotFound(key.to_string()).into())
    }
}

#[async_trait::async_trait]
impl TimeEntries for RecordingTimeEntries {
    fn entries(&self) -> Vec<TimeEntry> {
        self.entries.lock().unwrap().clone()
    }

    async fn add_entry(&self, entry: TimeEntry) -> Result<(), EntryStoreError> {
        entry.validate()?;
        self.record(Call::Add(entry.clone()))?;
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    async fn update_entry(&self, entry: TimeEntry) -> Result<(), EntryStoreError> {
        entry.validate()?;
        self.record(Call::Update(entry.clone()))?;
        let position = self.position(&entry.key)?;
        self.entries.lock().unwrap()[position] = entry;
        Ok(())
    }

    async fn delete_entry(&self, key: &str) -> Result<(), EntryStoreError> {
        self.record(Call::Delete(key.to_string()))?;
        let position = self.position(key)?;
        self.entries.lock().unwrap().remove(position);
        Ok(())
    }
}
