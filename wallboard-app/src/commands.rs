//! Tauri command handlers: the bridge between the UI and the host shell.
//!
//! Each function is registered with `tauri::Builder::invoke_handler` and
//! callable from the frontend via `invoke(...)`. Request/response channels
//! return their result object in the `Ok` branch; cancellation and I/O
//! failures are encoded in the result, never as command rejection. The
//! `Err(String)` branch is reserved for unexpected transport-level faults.

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use tauri::State;
use tauri_plugin_dialog::DialogExt;
use tracing::info;
use wallboard_core::{
    fileio, AgentEvent, AgentEventDetails, FileReadResult, FileWriteResult, NotificationRequest,
    NotificationResult,
};

use crate::notifications;
use crate::state::AppState;
use crate::window;

/// Fire-and-forget: hide the main window to the tray.
#[tauri::command]
pub async fn hide_to_tray(app: tauri::AppHandle) -> Result<(), String> {
    window::hide_main_window(&app);
    // Windows gives no other hint that the app is still alive.
    #[cfg(target_os = "windows")]
    notifications::notify_hidden_to_tray(&app);
    Ok(())
}

/// Fire-and-forget: show and focus the main window.
#[tauri::command]
pub async fn show_app(app: tauri::AppHandle) -> Result<(), String> {
    window::reveal_main_window(&app);
    Ok(())
}

/// Show the open dialog and read the chosen file as UTF-8 text.
#[tauri::command]
pub async fn open_file(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> Result<FileReadResult, String> {
    state.open_dialogs_shown.fetch_add(1, Ordering::Relaxed);

    let picked = app
        .dialog()
        .file()
        .add_filter("Text Files", fileio::TEXT_EXTENSIONS)
        .add_filter("All Files", &["*"])
        .blocking_pick_file();

    let Some(file_path) = picked else {
        return Ok(FileReadResult::cancelled());
    };

    let path = PathBuf::from(file_path.to_string());
    info!(path = %path.display(), "open dialog confirmed");
    Ok(fileio::read_text_file(&path))
}

/// Show the save dialog and write `content` to the chosen path.
#[tauri::command]
pub async fn save_file(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
    content: String,
    file_name: Option<String>,
) -> Result<FileWriteResult, String> {
    state.save_dialogs_shown.fetch_add(1, Ordering::Relaxed);

    let default_name = file_name.unwrap_or_else(|| fileio::DEFAULT_SAVE_NAME.into());
    let mut dialog = app.dialog().file().set_file_name(&default_name);
    for (name, extensions) in fileio::SAVE_FILTERS {
        dialog = dialog.add_filter(*name, extensions);
    }

    let Some(file_path) = dialog.blocking_save_file() else {
        return Ok(FileWriteResult::cancelled());
    };

    let path = PathBuf::from(file_path.to_string());
    info!(path = %path.display(), "save dialog confirmed");
    Ok(fileio::write_text_file(&path, &content))
}

/// Raise a native notification.
#[tauri::command]
pub async fn show_notification(
    app: tauri::AppHandle,
    title: String,
    body: String,
    urgent: Option<bool>,
) -> Result<NotificationResult, String> {
    let request = NotificationRequest {
        title,
        body,
        urgent: urgent.unwrap_or(false),
    };
    Ok(notifications::show_notification(&app, &request))
}

/// Raise a templated agent-event notification.
#[tauri::command]
pub async fn notify_agent_event(
    app: tauri::AppHandle,
    agent_name: String,
    event_type: String,
    details: Option<AgentEventDetails>,
) -> Result<NotificationResult, String> {
    let event = AgentEvent {
        agent_name,
        event_type,
        details: details.unwrap_or_default(),
    };
    info!(agent = %event.agent_name, kind = %event.event_type, "agent event");
    Ok(notifications::notify_agent_event(&app, &event))
}
