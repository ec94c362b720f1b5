mod memory;
mod postgres;

pub use memory::MemoryEmployeeStore;
pub use postgres::PgEmployeeStore;

use crate::models::employee::{Employee, EmployeeFields};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Persists a new record under a freshly assigned id.
    async fn insert(&self, fields: &EmployeeFields) -> Result<Employee, StoreError>;

    /// Every record, in insertion order.
    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    /// Overwrites all fields of `id`. `None` when no such record exists.
    async fn replace(&self, id: Uuid, fields: &EmployeeFields) -> Result<Option<Employee>, StoreError>;

    /// Returns whether a record was removed.
    async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;
}
