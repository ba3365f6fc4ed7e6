//! Service Layer
//!
//! Orchestrates the filter, identifier rules and the authoritative directory.

pub mod membership_service;

pub use membership_service::MembershipService;
