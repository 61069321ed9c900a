//! Store contract
//!
//! The storage-agnostic interface every store implementation satisfies, plus
//! the per-verb option structs and the shared error taxonomy. The remote
//! implementation lives in [`crate::remote`]; alternative backends implement
//! the same trait.

mod error;
mod options;

pub use error::{ApiError, ApiErrorCause, BoxError, StoreError};
pub use options::{CreateOptions, DeleteOptions, GetOptions, ListOptions, UpdateOptions};

use async_trait::async_trait;

use crate::model::{Resource, ResourceList};

/// Uniform CRUD contract over resources.
///
/// Implementations are stateless across calls and safe for concurrent use;
/// on success each operation stamps server-confirmed identity onto the
/// caller's resource handle and retains no reference afterwards.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Create-or-replace the resource under the identity in `opts`.
    async fn create(
        &self,
        resource: &mut dyn Resource,
        opts: CreateOptions,
    ) -> Result<(), StoreError>;

    /// Replace the resource under its own meta identity.
    async fn update(
        &self,
        resource: &mut dyn Resource,
        opts: UpdateOptions,
    ) -> Result<(), StoreError>;

    /// Fetch the resource named in `opts` into the caller's handle.
    async fn get(&self, resource: &mut dyn Resource, opts: GetOptions) -> Result<(), StoreError>;

    /// Fetch the collection for the list's item type, in server order.
    async fn list(&self, list: &mut dyn ResourceList, opts: ListOptions)
        -> Result<(), StoreError>;

    /// Delete the resource named in `opts`.
    async fn delete(
        &self,
        resource: &mut dyn Resource,
        opts: DeleteOptions,
    ) -> Result<(), StoreError>;
}
