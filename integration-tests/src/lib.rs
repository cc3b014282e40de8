//! Shared fixtures for the Arbor integration tests.

pub mod sources;
