//! Shared fixtures for the integration scenarios.

pub mod utils;
