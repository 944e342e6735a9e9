//! Payloads serialised over the host/UI boundary.
//!
//! All types derive `serde::Serialize` + `serde::Deserialize` with camelCase
//! field names so the wire shapes match the UI-side objects exactly.

pub mod events;
pub mod results;
