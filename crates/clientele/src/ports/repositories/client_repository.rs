//! Client Repository Port
//!
//! Abstract interface for Client persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Client, PageRequest};
use crate::models::Page;

/// Repository interface for Client entities
///
/// Implementations must enforce name uniqueness atomically inside `save`:
/// two concurrent saves with the same name may never both succeed.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a Client by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, DomainError>;

    /// Find all Clients, ascending by id
    async fn find_all(&self) -> Result<Vec<Client>, DomainError>;

    /// Find one page of Clients plus the total count
    ///
    /// Fails with `InvalidPagination` for a non-positive size or negative offset.
    async fn find_all_paged(&self, request: &PageRequest) -> Result<Page<Client>, DomainError>;

    /// Save a Client (insert when `id` is unset, otherwise update by id)
    ///
    /// Fails with `DuplicateName` when a different client holds the same name.
    async fn save(&self, client: &Client) -> Result<Client, DomainError>;

    /// Delete a Client by its ID
    async fn delete(&self, client: &Client) -> Result<(), DomainError>;

    /// Make buffered writes visible to subsequent reads
    async fn flush(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
