//! Factory methods for creating test data.
//!
//! This module provides factories for creating domain values with sensible
//! defaults, reducing boilerplate in tests. Each factory follows the builder
//! pattern: start from defaults, override what the test cares about, then
//! `build()`.

pub mod fix;
pub mod stats;
