//! Orchestration core for the courier mobile bridge.
//!
//! This crate turns local device events (location fixes, chat sends, ratings,
//! document captures, experience and badge triggers) into calls against a
//! single remote backend, and turns the results into user-visible side
//! effects: observer callbacks and system notifications.
//!
//! The moving parts:
//! - [`backend::BackendClient`] issues asynchronous HTTP requests against one
//!   base URL and maps every round trip to a single success/failure outcome.
//! - [`location::LocationTracker`] arbitrates between concurrent location
//!   providers and surfaces the single freshest fix.
//! - [`notify::NotificationRouter`] renders notification side effects with a
//!   severity tier and correlation-id replacement.
//! - [`service`] holds the feature services (chat, rating, document,
//!   gamification) that validate domain events, delegate to the backend, and
//!   notify their observer exactly once per operation.
//!
//! Platform concerns (the embedded web UI, permission dialogs, notification
//! channel registration, image codecs) stay behind the trait boundaries in
//! [`location::provider`] and [`notify`].

pub mod backend;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod notify;
pub mod observer;
pub mod service;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
