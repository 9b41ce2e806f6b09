// Authoritative in-memory collection of the current user's time entries.
//
// Purpose
// - Mirror the document database's live query and expose it to timers, editor and views.
//
// Responsibilities
// - Replace the collection wholesale on every snapshot; never splice local writes in.
// - Forward writes to the database, stamping persistence metadata on the way out.
// - Track loading (until the first snapshot) and the last failure (until the next snapshot).

use crate::modules::time_entries::core::external_record::{
    ExternalRecord, from_external, to_external,
};
use crate::modules::time_entries::core::ports::{EntryStoreError, TimeEntries};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::sync_time_entries::subscription::SubscriptionHandle;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::document_store::{DocumentStore, PersistenceError, Snapshot};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntriesState {
    pub entries: Vec<TimeEntry>,
    pub loading: bool,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<PersistenceError>,
}

fn serialize_error<S: serde::Serializer>(
    error: &Option<PersistenceError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.serialize_some(&error.to_string()),
        None => serializer.serialize_none(),
    }
}

impl Default for EntriesState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

fn apply_update(
    state: &watch::Sender<EntriesState>,
    update: Result<Snapshot<ExternalRecord>, PersistenceError>,
) {
    match update {
        Ok(snapshot) => {
            let entries: Vec<TimeEntry> = snapshot
                .into_iter()
                .map(|document| from_external(&document.id, document.record))
                .collect();
            debug!(count = entries.len(), "time entries snapshot received");
            state.send_modify(|state| {
                state.entries = entries;
                state.loading = false;
                state.error = None;
            });
        }
        Err(error) => {
            warn!(%error, "time entries feed failed, keeping the last snapshot");
            state.send_modify(|state| state.error = Some(error));
        }
    }
}

pub struct EntryStore<TDocuments>
where
    TDocuments: DocumentStore<ExternalRecord> + 'static,
{
    documents: Arc<TDocuments>,
    clock: Arc<dyn Clock>,
    user_id: String,
    state: Arc<watch::Sender<EntriesState>>,
}

impl<TDocuments> EntryStore<TDocuments>
where
    TDocuments: DocumentStore<ExternalRecord> + 'static,
{
    pub fn new(
        documents: Arc<TDocuments>,
        clock: Arc<dyn Clock>,
        user_id: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(EntriesState::default());
        Self {
            documents,
            clock,
            user_id: user_id.into(),
            state: Arc::new(state),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Opens the live query for the bound user. A failed subscribe is recorded in `error`
    /// and yields an inert handle.
    pub async fn connect(&self) -> SubscriptionHandle {
        match self.documents.subscribe(&self.user_id).await {
            Ok(mut feed) => {
                info!(user_id = %self.user_id, "time entries subscription opened");
                let state = self.state.clone();
                SubscriptionHandle::spawn(async move {
                    while let Some(update) = feed.recv().await {
                        apply_update(&state, update);
                    }
                    debug!("time entries feed closed");
                })
            }
            Err(error) => {
                warn!(%error, "time entries subscription failed");
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(error);
                });
                SubscriptionHandle::inert()
            }
        }
    }

    pub fn watch(&self) -> watch::Receiver<EntriesState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> EntriesState {
        self.state.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<PersistenceError> {
        self.state.borrow().error.clone()
    }

    fn record_failure(&self, error: &PersistenceError) {
        self.state.send_modify(|state| state.error = Some(error.clone()));
    }
}

#[async_trait::async_trait]
impl<TDocuments> TimeEntries for EntryStore<TDocuments>
where
    TDocuments: DocumentStore<ExternalRecord> + 'static,
{
    fn entries(&self) -> Vec<TimeEntry> {
        self.state.borrow().entries.clone()
    }

    async fn add_entry(&self, entry: TimeEntry) -> Result<(), EntryStoreError> {
        entry.validate()?;
        let record = to_external(&entry, &self.user_id, self.clock.now());
        match self.documents.create(record).await {
            Ok(id) => {
                info!(%id, task = %entry.task, "time entry created");
                Ok(())
            }
            Err(error) => {
                warn!(%error, task = %entry.task, "time entry creation rejected");
                self.record_failure(&error);
                Err(error.into())
            }
        }
    }

    async fn update_entry(&self, entry: TimeEntry) -> Result<(), EntryStoreError> {
        entry.validate()?;
        let record = to_external(&entry, &self.user_id, self.clock.now());
        match self.documents.overwrite(&entry.key, record).await {
            Ok(()) => {
                info!(key = %entry.key, "time entry updated");
                Ok(())
            }
            Err(error) => {
                warn!(%error, key = %entry.key, "time entry update rejected");
                self.record_failure(&error);
                Err(error.into())
            }
        }
    }

    async fn delete_entry(&self, key: &str) -> Result<(), EntryStoreError> {
        match self.documents.delete(key).await {
            Ok(()) => {
                info!(%key, "time entry deleted");
                Ok(())
            }
            Err(error) => {
                warn!(%error, %key, "time entry deletion rejected");
                self.record_failure(&error);
                Err(error.into())
            }
        }
    }
}
