//! In-memory user directory
//!
//! A `HashSet` behind a read-write lock. Suitable for tests and the demo
//! runtime; it has no persistence.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashSet;

use crate::error::DirectoryError;
use crate::ports::UserDirectory;

#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    identifiers: RwLock<HashSet<String>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with identifiers, stored exactly as given
    pub fn with_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifiers: RwLock::new(identifiers.into_iter().map(Into::into).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.identifiers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.read().is_empty()
    }

    /// Sorted copy of every stored identifier
    pub fn identifiers(&self) -> Vec<String> {
        let mut all: Vec<String> = self.identifiers.read().iter().cloned().collect();
        all.sort_unstable();
        all
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, identifier: &str) -> Result<bool, DirectoryError> {
        Ok(self.identifiers.read().contains(identifier))
    }

    async fn insert(&self, identifier: &str) -> Result<bool, DirectoryError> {
        Ok(self.identifiers.write().insert(identifier.to_string()))
    }
}
