//! Handler Layer
//!
//! Validates caller input before it reaches the service.

pub mod identifier_handler;

pub use identifier_handler::{
    IdentifierHandler, MAX_IDENTIFIER_LEN, MAX_SUGGESTIONS, MIN_IDENTIFIER_LEN,
};
