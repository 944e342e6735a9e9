//! Notification payloads and agent-event message templates.

use serde::{Deserialize, Serialize};

/// Title used for every agent-event notification.
pub const AGENT_EVENT_TITLE: &str = "Agent Wallboard Update";

/// Payload of the `show-notification` channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    /// Urgent notifications get a persistent presentation with no
    /// auto-timeout; non-urgent ones use the platform default.
    #[serde(default)]
    pub urgent: bool,
}

/// Payload of the `notify-agent-event` channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentEvent {
    pub agent_name: String,
    /// One of `login`, `logout`, `status_change`, `call_received`,
    /// `call_ended`; anything else takes the generic fallback template.
    pub event_type: String,
    #[serde(default)]
    pub details: AgentEventDetails,
}

/// Optional detail fields consumed by the message templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentEventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status: Option<String>,
    /// Call duration in seconds, for `call_ended`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// Map an agent event to its human-readable notification body.
///
/// Unrecognised event kinds fall back to `"<agent>: <eventType>"` rather
/// than failing.
pub fn format_agent_event(event: &AgentEvent) -> String {
    match event.event_type.as_str() {
        "login" => format!("{} logged in", event.agent_name),
        "logout" => format!("{} logged out", event.agent_name),
        "status_change" => match event.details.new_status.as_deref() {
            Some(status) => format!("{} changed status to {}", event.agent_name, status),
            None => format!("{} changed status", event.agent_name),
        },
        "call_received" => format!("{} received a new call", event.agent_name),
        "call_ended" => match event.details.duration {
            Some(seconds) => format!("{} finished a call ({seconds}s)", event.agent_name),
            None => format!("{} finished a call", event.agent_name),
        },
        other => format!("{}: {}", event.agent_name, other),
    }
}
