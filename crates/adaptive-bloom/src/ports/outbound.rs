//! Outbound Ports (Driven Ports)
//!
//! Dependencies the membership service needs from the outside world.

use async_trait::async_trait;

use crate::error::DirectoryError;

/// Authoritative identifier store (Driven Port)
///
/// The filter only ever answers "definitely absent" or "maybe present". A
/// "maybe" is settled here.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether the identifier is registered
    async fn exists(&self, identifier: &str) -> Result<bool, DirectoryError>;

    /// Persist the identifier
    ///
    /// Returns `false` if it was already registered.
    async fn insert(&self, identifier: &str) -> Result<bool, DirectoryError>;
}
