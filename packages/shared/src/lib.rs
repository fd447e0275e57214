//! Shared utilities for Hibiki binaries.

pub mod logger;
