// Single-row edit protocol over the time entries table.
//
// Responsibilities
// - Keep at most one selected row and its edit buffer.
// - Commit the previous row before another one is loaded or the selection is cleared.
// - Delete only the selected row, without committing its pending edits.

use crate::modules::time_entries::core::edit_buffer::{BufferEdit, EditBuffer};
use crate::modules::time_entries::core::ports::{EntryStoreError, TimeEntries};
use chrono::FixedOffset;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("no time entry is selected")]
    NothingSelected,

    #[error("time entry {0} is not the selected one")]
    NotSelected(String),

    #[error(transparent)]
    Store(#[from] EntryStoreError),
}

pub struct EntryEditor<TEntries>
where
    TEntries: TimeEntries + ?Sized + 'static,
{
    entries: Arc<TEntries>,
    offset: FixedOffset,
    selection: Mutex<Option<EditBuffer>>,
}

impl<TEntries> EntryEditor<TEntries>
where
    TEntries: TimeEntries + ?Sized + 'static,
{
    pub fn new(entries: Arc<TEntries>, offset: FixedOffset) -> Self {
        Self {
            entries,
            offset,
            selection: Mutex::new(None),
        }
    }

    pub async fn selection(&self) -> Option<EditBuffer> {
        self.selection.lock().await.clone()
    }

    /// Moves the selection to `key`, committing the previously selected row first.
    /// Selecting the row that is already selected keeps its pending edits. When the commit
    /// fails the previous row stays selected.
    pub async fn select(&self, key: Option<&str>) -> Result<Option<EditBuffer>, EditorError> {
        let mut selection = self.selection.lock().await;
        if let (Some(current), Some(key)) = (selection.as_ref(), key)
            && current.key == key
        {
            return Ok(selection.clone());
        }
        if let Some(previous) = selection.as_ref() {
            self.commit(previous).await?;
        }

        *selection = key.and_then(|key| {
            let loaded = self
                .entries
                .entries()
                .iter()
                .find(|entry| entry.key == key)
                .map(|entry| EditBuffer::from_entry(entry, self.offset));
            if loaded.is_none() {
                debug!(%key, "selected time entry is not in the collection");
            }
            loaded
        });
        Ok(selection.clone())
    }

    pub async fn edit(&self, edit: BufferEdit) -> Result<EditBuffer, EditorError> {
        let mut selection = self.selection.lock().await;
        let buffer = selection.as_mut().ok_or(EditorError::NothingSelected)?;
        buffer.edit(edit);
        Ok(buffer.clone())
    }

    pub async fn delete(&self, key: &str) -> Result<(), EditorError> {
        let mut selection = self.selection.lock().await;
        match selection.as_ref() {
            Some(current) if current.key == key => {}
            _ => return Err(EditorError::NotSelected(key.to_string())),
        }
        self.entries.delete_entry(key).await?;
        *selection = None;
        info!(%key, "time entry deleted from the table");
        Ok(())
    }

    async fn commit(&self, buffer: &EditBuffer) -> Result<(), EditorError> {
        let Some(original) = self
            .entries
            .entries()
            .into_iter()
            .find(|entry| entry.key == buffer.key)
        else {
            debug!(key = %buffer.key, "selected time entry vanished, nothing to commit");
            return Ok(());
        };
        let edited = buffer.apply_to(&original, self.offset);
        self.entries.update_entry(edited).await?;
        info!(key = %buffer.key, "time entry edit committed");
        Ok(())
    }
}
