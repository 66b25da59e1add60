pub mod in_memory_repository;
pub mod record_repository;
pub mod seed;

pub use in_memory_repository::InMemoryRepository;
pub use record_repository::{RecordChange, Repository, RepositoryError};
