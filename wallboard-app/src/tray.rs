//! System tray setup and event handling.

use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, SubmenuBuilder},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    Manager,
};
use tracing::{info, warn};
use wallboard_core::{AgentStatus, WallboardError};

use crate::notifications;
use crate::state::AppState;
use crate::window;

const TRAY_ID: &str = "wallboard-tray";
const TRAY_TOOLTIP: &str = "Agent Wallboard";
const TRAY_SHOW_ID: &str = "tray_show";
const TRAY_SETTINGS_ID: &str = "tray_settings";
const TRAY_QUIT_ID: &str = "tray_quit";
const TRAY_STATUS_PREFIX: &str = "tray_status_";

/// Build the tray icon with its context menu.
///
/// The caller treats failure as non-fatal: a shell without a tray still has
/// a working window and bridge.
pub fn setup_system_tray<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
) -> wallboard_core::Result<()> {
    build_tray(app).map_err(|e| WallboardError::Tray(e.to_string()))
}

fn build_tray<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> tauri::Result<()> {
    let show_item = MenuItem::with_id(app, TRAY_SHOW_ID, "Show Wallboard", true, None::<&str>)?;

    let mut status_menu = SubmenuBuilder::new(app, "Change Status");
    for status in AgentStatus::ALL {
        let item = MenuItem::with_id(
            app,
            format!("{TRAY_STATUS_PREFIX}{}", status.as_str()),
            status.as_str(),
            true,
            None::<&str>,
        )?;
        status_menu = status_menu.item(&item);
    }
    let status_menu = status_menu.build()?;

    let settings_item = MenuItem::with_id(app, TRAY_SETTINGS_ID, "Settings", true, None::<&str>)?;
    let quit_item = MenuItem::with_id(app, TRAY_QUIT_ID, "Quit", true, None::<&str>)?;
    let separator = PredefinedMenuItem::separator(app)?;

    let menu = Menu::with_items(
        app,
        &[&show_item, &status_menu, &separator, &settings_item, &quit_item],
    )?;

    let mut tray = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .tooltip(TRAY_TOOLTIP)
        .show_menu_on_left_click(false)
        .on_menu_event(move |app, event| match event.id.as_ref() {
            TRAY_SHOW_ID => window::reveal_main_window(app),
            TRAY_SETTINGS_ID => {
                // Settings surface is not implemented; the entry is a placeholder.
                info!("settings selected from tray");
            }
            TRAY_QUIT_ID => {
                let state = app.state::<AppState>();
                state.lifecycle.begin_quit();
                let diagnostics = state.diagnostics_snapshot();
                info!(
                    open_dialogs = diagnostics.open_dialogs_shown,
                    save_dialogs = diagnostics.save_dialogs_shown,
                    notifications_shown = diagnostics.notifications_shown,
                    notifications_failed = diagnostics.notifications_failed,
                    "quitting from tray"
                );
                app.exit(0);
            }
            id => {
                if let Some(raw) = id.strip_prefix(TRAY_STATUS_PREFIX) {
                    match raw.parse::<AgentStatus>() {
                        Ok(status) => notifications::change_agent_status_from_tray(app, status),
                        Err(e) => warn!("ignoring tray menu entry: {e}"),
                    }
                }
            }
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                window::toggle_main_window(tray.app_handle());
            }
        });

    // Fall back to no icon (placeholder presentation) when the bundle
    // carries none; a missing asset must not fail tray creation.
    if let Some(icon) = app.default_window_icon().cloned() {
        tray = tray.icon(icon);
    }

    tray.build(app)?;
    Ok(())
}
