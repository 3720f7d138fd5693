//! Domain values and wire DTOs shared across the bridge.
//!
//! Wire structs serialize to the exact column names the backend's REST layer
//! expects; domain values carry no serde derives unless they cross the wire.

pub mod badge;
pub mod document;
pub mod location;
pub mod message;
pub mod profile;
pub mod rating;
