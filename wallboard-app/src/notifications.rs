//! Native notification delivery and the tray status push.
//!
//! Notification failures degrade silently: they are counted, logged and
//! reported in the returned result, never propagated.

use std::sync::atomic::Ordering;

use tauri::{Emitter, Manager};
use tauri_plugin_notification::NotificationExt;
use tracing::{debug, info, warn};
use wallboard_core::ipc::events::EVENT_STATUS_CHANGED;
use wallboard_core::notify::AGENT_EVENT_TITLE;
use wallboard_core::{
    format_agent_event, AgentEvent, AgentStatus, NotificationRequest, NotificationResult,
    StatusChangedEvent, WallboardError,
};

use crate::state::AppState;
use crate::window;

const HIDDEN_TO_TRAY_TITLE: &str = "Agent Wallboard";
const HIDDEN_TO_TRAY_BODY: &str = "The app is still running in the system tray";
const STATUS_CHANGED_TITLE: &str = "Status changed";

/// Raise a native notification. Urgent requests get a persistent
/// presentation with no auto-timeout; non-urgent ones use the platform
/// default.
pub fn show_notification<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    request: &NotificationRequest,
) -> NotificationResult {
    let state = app.state::<AppState>();

    match deliver(app, request) {
        Ok(()) => {
            state.notifications_shown.fetch_add(1, Ordering::Relaxed);
            NotificationResult::ok()
        }
        Err(e) => {
            state.notifications_failed.fetch_add(1, Ordering::Relaxed);
            warn!("failed to show notification: {e}");
            NotificationResult::failure(e)
        }
    }
}

fn deliver<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    request: &NotificationRequest,
) -> wallboard_core::Result<()> {
    let mut builder = app
        .notification()
        .builder()
        .title(&request.title)
        .body(&request.body);
    builder = if request.urgent {
        builder.ongoing()
    } else {
        builder.auto_cancel()
    };

    builder
        .show()
        .map_err(|e| WallboardError::Notification(e.to_string()))
}

/// Raise an agent-event notification using the shared message templates.
pub fn notify_agent_event<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    event: &AgentEvent,
) -> NotificationResult {
    let request = NotificationRequest {
        title: AGENT_EVENT_TITLE.into(),
        body: format_agent_event(event),
        urgent: false,
    };
    show_notification(app, &request)
}

/// Push a status change into the UI and confirm it with a notification.
///
/// The two effects are independent: the push only happens while a live
/// main window exists, and a notification failure never suppresses it.
pub fn change_agent_status_from_tray<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    status: AgentStatus,
) {
    info!(status = %status, "status change requested from tray");

    match push_status_event(app, status) {
        Ok(()) => {}
        Err(e @ WallboardError::WindowUnavailable) => {
            debug!("status push skipped: {e}");
        }
        Err(e) => warn!("failed to push status change to UI: {e}"),
    }

    let request = NotificationRequest {
        title: STATUS_CHANGED_TITLE.into(),
        body: format!("You are now {status}"),
        urgent: false,
    };
    let _ = show_notification(app, &request);
}

fn push_status_event<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    status: AgentStatus,
) -> wallboard_core::Result<()> {
    if app.get_webview_window(window::MAIN_WINDOW_LABEL).is_none() {
        return Err(WallboardError::WindowUnavailable);
    }
    let event = StatusChangedEvent::now(status);
    app.emit_to(window::MAIN_WINDOW_LABEL, EVENT_STATUS_CHANGED, &event)
        .map_err(|e| WallboardError::EventPush(e.to_string()))
}

/// The "still running" notice raised when the window hides to the tray.
pub fn notify_hidden_to_tray<R: tauri::Runtime>(app: &tauri::AppHandle<R>) {
    let request = NotificationRequest {
        title: HIDDEN_TO_TRAY_TITLE.into(),
        body: HIDDEN_TO_TRAY_BODY.into(),
        urgent: false,
    };
    let _ = show_notification(app, &request);
}
