//! Event payloads and channel names for the host/UI boundary.
//!
//! ## Channel catalog
//!
//! | Channel | Direction | Payload |
//! |---------|-----------|---------|
//! | `hide-to-tray` | UI → host | none |
//! | `show-app` | UI → host | none |
//! | `open-file` | UI → host | none |
//! | `save-file` | UI → host | `{content, fileName}` |
//! | `show-notification` | UI → host | `{title, body, urgent}` |
//! | `notify-agent-event` | UI → host | `{agentName, eventType, details}` |
//! | `status-changed-from-tray` | host → UI | [`StatusChangedEvent`] |
//!
//! The UI → host channels are Tauri commands; the single host → UI channel
//! is an unprompted event emitted to the main window.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The one host → UI push channel.
pub const EVENT_STATUS_CHANGED: &str = "status-changed-from-tray";

/// A fixed agent availability state selectable from the tray menu.
///
/// Wire strings are the capitalized variant names (`"Available"`, `"Busy"`,
/// `"Break"`), matching the labels the UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Available,
    Busy,
    Break,
}

impl AgentStatus {
    /// Every status, in tray-menu order.
    pub const ALL: [AgentStatus; 3] = [
        AgentStatus::Available,
        AgentStatus::Busy,
        AgentStatus::Break,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Available => "Available",
            AgentStatus::Busy => "Busy",
            AgentStatus::Break => "Break",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown agent status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for AgentStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw {
            "Available" => Ok(AgentStatus::Available),
            "Busy" => Ok(AgentStatus::Busy),
            "Break" => Ok(AgentStatus::Break),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Emitted on `"status-changed-from-tray"` when the user picks a status
/// from the tray submenu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangedEvent {
    pub new_status: AgentStatus,
    /// RFC 3339 timestamp taken when the menu item was clicked.
    pub timestamp: String,
}

impl StatusChangedEvent {
    pub fn now(new_status: AgentStatus) -> Self {
        Self {
            new_status,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_changed_event_serializes_with_camel_case_and_capitalized_status() {
        let event = StatusChangedEvent {
            new_status: AgentStatus::Busy,
            timestamp: "2026-08-29T10:00:00+00:00".into(),
        };

        let json = serde_json::to_value(&event).expect("serialize status event");
        assert_eq!(json["newStatus"], "Busy");
        assert_eq!(json["timestamp"], "2026-08-29T10:00:00+00:00");

        let round_trip: StatusChangedEvent =
            serde_json::from_value(json).expect("deserialize status event");
        assert_eq!(round_trip.new_status, AgentStatus::Busy);
    }

    #[test]
    fn status_changed_event_now_carries_a_parseable_timestamp() {
        let event = StatusChangedEvent::now(AgentStatus::Available);
        chrono::DateTime::parse_from_rfc3339(&event.timestamp)
            .expect("timestamp should be RFC 3339");
    }

    #[test]
    fn agent_status_round_trips_through_its_wire_string() {
        for status in AgentStatus::ALL {
            let parsed: AgentStatus = status.as_str().parse().expect("parse status");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn agent_status_rejects_unknown_and_lowercase_values() {
        assert!("Offline".parse::<AgentStatus>().is_err());
        assert!("busy".parse::<AgentStatus>().is_err());
        assert!(serde_json::from_str::<AgentStatus>(r#""busy""#).is_err());
    }
}
