//! # wallboard-core
//!
//! Boundary contract between the privileged Agent Wallboard shell and the
//! sandboxed UI process.
//!
//! ## Architecture
//!
//! ```text
//! UI action → bridge channel → host handler → platform API
//!                                   │
//!              FileReadResult / FileWriteResult / NotificationResult
//!
//! tray menu → status change → "status-changed-from-tray" event → UI
//! ```
//!
//! Every request/response operation produces exactly one result object.
//! Cancellation and I/O failures are encoded in the result, never raised
//! across the process boundary.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod fileio;
pub mod ipc;
pub mod lifecycle;
pub mod notify;

// Convenience re-exports for downstream crates
pub use error::{Result, WallboardError};
pub use ipc::events::{AgentStatus, StatusChangedEvent};
pub use ipc::results::{FileReadResult, FileWriteResult, NotificationResult, Outcome};
pub use lifecycle::{CloseAction, Lifecycle};
pub use notify::{format_agent_event, AgentEvent, AgentEventDetails, NotificationRequest};
