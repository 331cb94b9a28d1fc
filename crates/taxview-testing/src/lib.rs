//! Testing infrastructure for taxview integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestFixture`: temp-dir test environment with a pre-seeded data file
//! - `fixtures`: canonical sample CSV content, well-formed and malformed

pub mod fixtures;
pub mod world;

pub use world::TestFixture;
