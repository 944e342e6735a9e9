//! Tauri application state.
//!
//! `AppState` is managed via `app.manage(...)` and injected into command
//! handlers by Tauri's `State<'_, AppState>` extractor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;
use wallboard_core::Lifecycle;

/// Shared application state, available in every `#[tauri::command]`.
pub struct AppState {
    /// Quit coordination consulted by the window close interceptor.
    pub lifecycle: Arc<Lifecycle>,
    /// Count of open dialogs shown.
    pub open_dialogs_shown: AtomicUsize,
    /// Count of save dialogs shown.
    pub save_dialogs_shown: AtomicUsize,
    /// Count of native notifications delivered.
    pub notifications_shown: AtomicUsize,
    /// Count of native notifications that failed to show.
    pub notifications_failed: AtomicUsize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            lifecycle: Arc::new(Lifecycle::new()),
            open_dialogs_shown: AtomicUsize::new(0),
            save_dialogs_shown: AtomicUsize::new(0),
            notifications_shown: AtomicUsize::new(0),
            notifications_failed: AtomicUsize::new(0),
        }
    }

    pub fn diagnostics_snapshot(&self) -> ShellDiagnostics {
        ShellDiagnostics {
            open_dialogs_shown: self.open_dialogs_shown.load(Ordering::Relaxed),
            save_dialogs_shown: self.save_dialogs_shown.load(Ordering::Relaxed),
            notifications_shown: self.notifications_shown.load(Ordering::Relaxed),
            notifications_failed: self.notifications_failed.load(Ordering::Relaxed),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell activity counters, logged when the user quits from the tray.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellDiagnostics {
    pub open_dialogs_shown: usize,
    pub save_dialogs_shown: usize,
    pub notifications_shown: usize,
    pub notifications_failed: usize,
}
