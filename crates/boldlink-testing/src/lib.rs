//! Testing infrastructure for boldlink integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated data directory plus configured CLI runner
//! - `StubServer`: Canned-response HTTP server standing in for the service
//! - `fixtures`: Wire-shaped sample records

pub mod fixtures;
pub mod server;
pub mod world;

pub use server::StubServer;
pub use world::TestWorld;
