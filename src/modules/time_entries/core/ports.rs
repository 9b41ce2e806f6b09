use crate::modules::time_entries::core::time_entry::{InvalidEntry, TimeEntry};
use crate::shared::infrastructure::document_store::PersistenceError;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EntryStoreError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("invalid time entry: {0}")]
    Invalid(#[from] InvalidEntry),
}

/// Write side of the time entry collection as seen by timers and the editor.
#[async_trait::async_trait]
pub trait TimeEntries: Send + Sync {
    /// Latest confirmed collection, in arrival order.
    fn entries(&self) -> Vec<TimeEntry>;

    async fn add_entry(&self, entry: TimeEntry) -> Result<(), EntryStoreError>;
    async fn update_entry(&self, entry: TimeEntry) -> Result<(), EntryStoreError>;
    async fn delete_entry(&self, key: &str) -> Result<(), EntryStoreError>;
}
