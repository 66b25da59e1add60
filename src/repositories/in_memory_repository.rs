use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::record::{IdPolicy, Record};
use crate::repositories::record_repository::{RecordChange, Repository, RepositoryError};

/// Process-lifetime store holding one entity type in insertion order
///
/// Each mutation holds the write guard for its whole scan-then-mutate
/// sequence, so id checks and id assignment cannot interleave.
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-filled with `records`, kept in the given order
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn position_of<T: Record>(records: &[T], id: i64) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, mut record: T) -> Result<T, RepositoryError> {
        let mut records = self.records.write().await;

        match T::ID_POLICY {
            IdPolicy::AutoIncrement => {
                let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
                record.set_id(next_id);
            }
            IdPolicy::CallerSupplied => {
                if position_of(&records, record.id()).is_some() {
                    return Err(RepositoryError::DuplicateId(record.id()));
                }
            }
        }

        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, mut record: T) -> Result<T, RepositoryError> {
        let mut records = self.records.write().await;
        let index = position_of(&records, id).ok_or(RepositoryError::NotFound(id))?;

        record.set_id(id);
        records[index] = record.clone();
        Ok(record)
    }

    async fn update_with(&self, id: i64, change: RecordChange<T>) -> Result<T, RepositoryError> {
        let mut records = self.records.write().await;
        let index = position_of(&records, id).ok_or(RepositoryError::NotFound(id))?;

        let mut record = change(&records[index]).map_err(RepositoryError::ChangeRejected)?;
        // The edit must not move the record to another id.
        record.set_id(id);
        records[index] = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<T, RepositoryError> {
        let mut records = self.records.write().await;
        let index = position_of(&records, id).ok_or(RepositoryError::NotFound(id))?;

        Ok(records.remove(index))
    }
}
