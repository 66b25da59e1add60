use async_trait::async_trait;

use crate::models::record::Record;

/// Repository errors for store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Resource not found: {0}")]
    NotFound(i64),

    #[error("Duplicate id: {0}")]
    DuplicateId(i64),

    #[error("Change rejected: {0}")]
    ChangeRejected(String),
}

/// Edit computed from the stored record while the store is locked
///
/// Returning `Err` leaves the stored record untouched.
pub type RecordChange<T> = Box<dyn FnOnce(&T) -> Result<T, String> + Send>;

/// Trait defining the operations every resource store supports
///
/// Order is insertion order; `find_all` returns records in the order they
/// were created.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Return every record in insertion order
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Find a record by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError>;

    /// Append a record, assigning or checking its id according to `T::ID_POLICY`
    async fn create(&self, record: T) -> Result<T, RepositoryError>;

    /// Replace the record stored under `id`; the stored copy always keeps `id`
    async fn update(&self, id: i64, record: T) -> Result<T, RepositoryError>;

    /// Replace the record stored under `id` with the output of `change`
    async fn update_with(&self, id: i64, change: RecordChange<T>) -> Result<T, RepositoryError>;

    /// Remove the record stored under `id` and return it
    async fn delete(&self, id: i64) -> Result<T, RepositoryError>;
}
