// In memory implementation of the DocumentStore port.
//
// Purpose
// - Stand in for the hosted document database in the binary and in tests.
//
// Responsibilities
// - Keep documents in arrival order and assign ids on create.
// - Push a full per-user snapshot to every live subscriber after each change.
// - Simulate outages: reject writes while offline and interrupt live feeds on demand.

use crate::shared::infrastructure::document_store::{
    Document, DocumentStore, PersistenceError, Snapshot, SnapshotFeed, UserScoped,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, mpsc};
use uuid::Uuid;

type FeedSender<Record> = mpsc::UnboundedSender<Result<Snapshot<Record>, PersistenceError>>;

struct Subscriber<Record> {
    user_id: String,
    sender: FeedSender<Record>,
}

struct Collection<Record> {
    documents: Vec<Document<Record>>,
    subscribers: Vec<Subscriber<Record>>,
}

fn snapshot_for<Record: Clone + UserScoped>(
    documents: &[Document<Record>],
    user_id: &str,
) -> Snapshot<Record> {
    documents
        .iter()
        .filter(|document| document.record.user_id() == user_id)
        .cloned()
        .collect()
}

impl<Record: Clone + UserScoped> Collection<Record> {
    fn publish(&mut self) {
        let documents = &self.documents;
        self.subscribers.retain(|subscriber| {
            subscriber
                .sender
                .send(Ok(snapshot_for(documents, &subscriber.user_id)))
                .is_ok()
        });
    }

    fn position(&self, id: &str) -> Result<usize, PersistenceError> {
        self.documents
            .iter()
            .position(|document| document.id == id)
            .ok_or_else(|| PersistenceError::NotFound(id.to_string()))
    }
}

pub struct InMemoryDocumentStore<Record> {
    collection: Mutex<Collection<Record>>,
    is_offline: AtomicBool,
}

impl<Record> Default for InMemoryDocumentStore<Record> {
    fn default() -> Self {
        Self {
            collection: Mutex::new(Collection {
                documents: Vec::new(),
                subscribers: Vec::new(),
            }),
            is_offline: AtomicBool::new(false),
        }
    }
}

impl<Record: Clone + UserScoped> InMemoryDocumentStore<Record> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Delivers `reason` as a failure to every live feed without closing them.
    pub async fn interrupt_feeds(&self, reason: impl Into<String>) {
        let reason = reason.into();
        let mut collection = self.collection.lock().await;
        collection.subscribers.retain(|subscriber| {
            subscriber
                .sender
                .send(Err(PersistenceError::Backend(reason.clone())))
                .is_ok()
        });
    }

    pub async fn documents(&self) -> Vec<Document<Record>> {
        self.collection.lock().await.documents.clone()
    }

    fn ensure_online(&self) -> Result<(), PersistenceError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(PersistenceError::Backend("Document store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Record> DocumentStore<Record> for InMemoryDocumentStore<Record>
where
    Record: Clone + UserScoped + Send + Sync + 'static,
{
    async fn subscribe(&self, user_id: &str) -> Result<SnapshotFeed<Record>, PersistenceError> {
        self.ensure_online()?;
        let (sender, feed) = mpsc::unbounded_channel();
        let mut collection = self.collection.lock().await;
        // The receiver is still in hand, so the initial send cannot fail.
        let _ = sender.send(Ok(snapshot_for(&collection.documents, user_id)));
        collection.subscribers.push(Subscriber {
            user_id: user_id.to_string(),
            sender,
        });
        Ok(feed)
    }

    async fn create(&self, record: Record) -> Result<String, PersistenceError> {
        self.ensure_online()?;
        let id = Uuid::now_v7().to_string();
        let mut collection = self.collection.lock().await;
        collection.documents.push(Document {
            id: id.clone(),
            record,
        });
        collection.publish();
        Ok(id)
    }

    async fn overwrite(&self, id: &str, record: Record) -> Result<(), PersistenceError> {
        self.ensure_online()?;
        let mut collection = self.collection.lock().await;
        let position = collection.position(id)?;
        collection.documents[position].record = record;
        collection.publish();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        self.ensure_online()?;
        let mut collection = self.collection.lock().await;
        let position = collection.position(id)?;
        collection.documents.remove(position);
        collection.publish();
        Ok(())
    }
}
