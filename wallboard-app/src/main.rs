//! Agent Wallboard desktop shell entry point.
//!
//! The shell owns the main window, the system tray and all native
//! dialog/notification access, and exposes them to the sandboxed UI
//! through the bridge commands in [`commands`].

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;
mod notifications;
mod state;
mod tray;
mod window;

use tauri::Manager;
use tracing::{info, warn};
use wallboard_core::CloseAction;

use crate::state::AppState;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallboard=info,wallboard_core=info".parse().unwrap()),
        )
        .init();

    info!("Agent Wallboard starting");

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_notification::init())
        .manage(AppState::new())
        .setup(|app| {
            let handle = app.handle().clone();

            // A failed tray leaves the window and bridge fully usable.
            if let Err(e) = tray::setup_system_tray(&handle) {
                warn!("tray setup failed: {e}");
            }

            window::ensure_main_window(&handle)?;
            Ok(())
        })
        .on_window_event(|win, event| {
            if win.label() != window::MAIN_WINDOW_LABEL {
                return;
            }
            if let tauri::WindowEvent::CloseRequested { api, .. } = event {
                let state = win.state::<AppState>();
                match state.lifecycle.close_action() {
                    CloseAction::HideToTray => {
                        api.prevent_close();
                        let _ = win.hide();
                        notifications::notify_hidden_to_tray(win.app_handle());
                    }
                    CloseAction::Destroy => {
                        info!("quitting, closing main window");
                    }
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            commands::hide_to_tray,
            commands::show_app,
            commands::open_file,
            commands::save_file,
            commands::show_notification,
            commands::notify_agent_event,
        ])
        .build(tauri::generate_context!())
        .expect("error while building Tauri application");

    app.run(|app_handle, event| {
        match event {
            // Application-level before-exit hook: once this fires the close
            // interceptor stands down and windows are torn down for real.
            tauri::RunEvent::ExitRequested { .. } => {
                app_handle.state::<AppState>().lifecycle.begin_quit();
            }
            // macOS dock activation re-creates or reveals the window.
            #[cfg(target_os = "macos")]
            tauri::RunEvent::Reopen { .. } => {
                if let Err(e) = window::ensure_main_window(app_handle) {
                    warn!("failed to reopen main window: {e}");
                }
            }
            _ => {}
        }
    });
}
