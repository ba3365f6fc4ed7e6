//! # Adaptive Bloom Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (hash, add, contains, growth)
//! └── src/integration/  # Cross-module flows
//!     ├── growth.rs           # Growth trace, FPR bound, snapshot restore
//!     └── membership_flow.rs  # Service + directory end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p membership-tests
//!
//! # Benchmarks
//! cargo bench -p membership-tests
//! ```
