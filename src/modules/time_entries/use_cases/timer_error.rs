use crate::modules::time_entries::core::invalid_operation::InvalidOperation;
use crate::modules::time_entries::core::ports::EntryStoreError;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),

    /// The session already moved on; `entry` is the segment that could not be stored.
    #[error("time entry for '{}' was not stored: {source}", .entry.task)]
    Store {
        entry: TimeEntry,
        source: EntryStoreError,
    },
}
