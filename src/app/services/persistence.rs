use crate::app::domain::PersistedSnapshot;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::storage::KeyValueStorage;

/// Called by the store after every applied mutation with the full state.
///
/// Implementations must not panic on backend failures: the store has already
/// applied the mutation and has no way to report a failed write.
pub trait PersistHook {
    fn persist(&mut self, snapshot: &PersistedSnapshot);
}

/// Writes each snapshot as JSON under one fixed key.
#[derive(Debug)]
pub struct StoragePersister<S> {
    storage: S,
    key: String,
    pretty: bool,
}

impl<S: KeyValueStorage> StoragePersister<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            pretty: false,
        }
    }

    /// Indent written snapshots
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Read and decode the snapshot stored under this persister's key.
    ///
    /// Never fails: a missing, unreadable or undecodable value yields `None`
    /// and the reason is logged.
    pub fn restore(&self) -> Option<PersistedSnapshot> {
        let contents = match self.storage.read(&self.key) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no persisted snapshot");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to read persisted snapshot: {}. Using defaults.", e);
                return None;
            }
        };

        match PersistedSnapshot::from_json(&contents) {
            Ok(snapshot) => {
                tracing::info!(key = %self.key, "restored persisted snapshot");
                Some(snapshot)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to parse persisted snapshot: {}. Using defaults.", e);
                None
            }
        }
    }

    fn write_snapshot(&mut self, snapshot: &PersistedSnapshot) -> Result<usize> {
        let json = snapshot.to_json(self.pretty)?;
        self.storage.write(&self.key, &json)?;
        Ok(json.len())
    }
}

impl<S: KeyValueStorage> PersistHook for StoragePersister<S> {
    fn persist(&mut self, snapshot: &PersistedSnapshot) {
        match self.write_snapshot(snapshot) {
            Ok(bytes) => tracing::debug!(key = %self.key, bytes, "persisted snapshot"),
            Err(e) => tracing::warn!(key = %self.key, "Failed to persist snapshot: {}", e),
        }
    }
}

/// Discards every snapshot. For stores that should not outlive the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPersister;

impl PersistHook for NoopPersister {
    fn persist(&mut self, _snapshot: &PersistedSnapshot) {}
}
