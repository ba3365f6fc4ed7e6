//! Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod in_memory_directory;

pub use in_memory_directory::InMemoryUserDirectory;
