//! Integration test crate — see `tests/` for the scenarios.
//!
//! Kept as a workspace member so `cargo test` runs the cross-crate
//! pipelines alongside each crate's unit tests.
