use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::models::record::Record;
use crate::repositories::record_repository::{Repository, RepositoryError};

/// Errors surfaced to API clients by every resource service
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ServiceError {
    #[error("{resource} with id {id} already exists")]
    DuplicateIdentifier { resource: &'static str, id: i64 },

    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ServiceError {
    /// Attach the resource name of `T` to a store error
    pub fn from_repository<T: Record>(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(id) => ServiceError::NotFound {
                resource: T::RESOURCE,
                id,
            },
            RepositoryError::DuplicateId(id) => ServiceError::DuplicateIdentifier {
                resource: T::RESOURCE,
                id,
            },
            RepositoryError::ChangeRejected(reason) => ServiceError::InvalidArgument(reason),
        }
    }
}

/// Trait defining the list/get/create/update/delete operations of a resource
#[async_trait]
pub trait RecordService<T: Record>: Send + Sync {
    /// All records in insertion order
    async fn list(&self) -> Result<Vec<T>, ServiceError>;

    /// A single record by ID
    async fn get(&self, id: i64) -> Result<T, ServiceError>;

    /// Store a new record following the entity's id policy
    async fn create(&self, record: T) -> Result<T, ServiceError>;

    /// Replace the record under `id`, forcing `id` onto the stored copy
    async fn update(&self, id: i64, record: T) -> Result<T, ServiceError>;

    /// Remove the record under `id`
    async fn delete(&self, id: i64) -> Result<T, ServiceError>;
}

/// Implementation of RecordService over any repository
pub struct RecordServiceImpl<T: Record> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: Record> RecordServiceImpl<T> {
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<T: Record> RecordService<T> for RecordServiceImpl<T> {
    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        self.repository
            .find_all()
            .await
            .map_err(ServiceError::from_repository::<T>)
    }

    async fn get(&self, id: i64) -> Result<T, ServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(ServiceError::from_repository::<T>)?
            .ok_or(ServiceError::NotFound {
                resource: T::RESOURCE,
                id,
            })
    }

    async fn create(&self, record: T) -> Result<T, ServiceError> {
        let created = self
            .repository
            .create(record)
            .await
            .map_err(ServiceError::from_repository::<T>)?;
        debug!(resource = T::RESOURCE, id = created.id(), "record created");
        Ok(created)
    }

    async fn update(&self, id: i64, record: T) -> Result<T, ServiceError> {
        let updated = self
            .repository
            .update(id, record)
            .await
            .map_err(ServiceError::from_repository::<T>)?;
        debug!(resource = T::RESOURCE, id, "record replaced");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<T, ServiceError> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(ServiceError::from_repository::<T>)?;
        debug!(resource = T::RESOURCE, id, "record deleted");
        Ok(removed)
    }
}
