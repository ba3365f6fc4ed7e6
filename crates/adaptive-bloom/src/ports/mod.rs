//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for request handlers
//! - Driven Ports (outbound) - The authoritative directory

pub mod inbound;
pub mod outbound;

pub use inbound::{CheckOutcome, FilterStats, MembershipApi, Resolution};
pub use outbound::UserDirectory;
