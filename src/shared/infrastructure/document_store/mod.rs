use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Native timestamp of the document database: whole seconds plus nanoseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl Timestamp {
    /// Nanos of a second or more carry into `seconds`. Values outside chrono's range
    /// saturate at its bounds.
    pub fn to_date_time(self) -> DateTime<Utc> {
        let carried = i64::from(self.nanos / NANOS_PER_SECOND);
        let nanos = self.nanos % NANOS_PER_SECOND;
        self.seconds
            .checked_add(carried)
            .and_then(|seconds| DateTime::from_timestamp(seconds, nanos))
            .unwrap_or(if self.seconds < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self {
            seconds: value.timestamp(),
            nanos: value.timestamp_subsec_nanos(),
        }
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.to_date_time()
    }
}

/// Records that belong to exactly one user, so live queries can be filtered by owner.
pub trait UserScoped {
    fn user_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<Record> {
    pub id: String,
    pub record: Record,
}

pub type Snapshot<Record> = Vec<Document<Record>>;
pub type SnapshotFeed<Record> = mpsc::UnboundedReceiver<Result<Snapshot<Record>, PersistenceError>>;

#[async_trait]
pub trait DocumentStore<Record: Clone + Send + Sync + 'static>: Send + Sync {
    /// Live query over every record of `user_id`. The current snapshot is delivered first,
    /// then a full snapshot after every change, in arrival order.
    async fn subscribe(&self, user_id: &str) -> Result<SnapshotFeed<Record>, PersistenceError>;
    async fn create(&self, record: Record) -> Result<String, PersistenceError>;
    async fn overwrite(&self, id: &str, record: Record) -> Result<(), PersistenceError>;
    async fn delete(&self, id: &str) -> Result<(), PersistenceError>;
}

pub mod in_memory;
