//! Feature services.
//!
//! Each service owns a small domain model, validates a domain event
//! synchronously, delegates to the backend client, and delivers exactly one
//! terminal event (success or error) to its registered observer per
//! submitted operation. Validation failures short-circuit before any network
//! call. On success, user-facing operations additionally present a
//! confirmation notification; failures never do.
//!
//! Services are cheap to clone and hold a single observer slot each; they
//! are built once per signed-in session (see [`crate::state::Bridge`]).
//! Submit operations spawn their round trips onto the ambient Tokio runtime
//! and must be called from within one.

pub mod chat;
pub mod document;
pub mod gamification;
pub mod rating;
