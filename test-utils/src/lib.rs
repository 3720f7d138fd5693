//! Courier Bridge Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests
//! for the courier bridge. This crate offers builder-pattern factories for
//! domain values and in-memory fakes for the platform boundaries.
//!
//! # Overview
//!
//! The test utilities consist of two main components:
//! - **factory**: Builders for domain values (location fixes, stat snapshots)
//! - **fake**: In-memory stand-ins for the platform seams (location
//!   providers, permission probe, notification presenter, observers)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::fix::FixFactory;
//! use test_utils::fake::provider::ScriptedProvider;
//!
//! let provider = ScriptedProvider::new(ProviderKind::Gps);
//! provider.push_fix(FixFactory::new().build());
//! ```

pub mod backend;
pub mod factory;
pub mod fake;
