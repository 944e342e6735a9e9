//! Window lifecycle and quit coordination.
//!
//! The main window moves through `Created → Visible ⇄ Hidden → Destroyed`.
//! The only decision the host has to make is what a close request means:
//! while the process-wide quitting flag is unset, closing hides the window
//! to the tray; once the flag is set (tray quit or the application's
//! before-exit hook), the close interceptor stands down and the window is
//! torn down unconditionally.

use std::sync::atomic::{AtomicBool, Ordering};

/// What the close interceptor should do with a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Swallow the close, hide the window, keep the process alive.
    HideToTray,
    /// Let the close proceed; the process is shutting down.
    Destroy,
}

/// Process-scoped quit coordination, shared between the tray, the bridge
/// and the window event handler. Lives for the process lifetime.
#[derive(Debug, Default)]
pub struct Lifecycle {
    quitting: AtomicBool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the process as quitting. Idempotent.
    pub fn begin_quit(&self) {
        self.quitting.store(true, Ordering::SeqCst);
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::SeqCst)
    }

    /// Decide what a window close request should do right now.
    pub fn close_action(&self) -> CloseAction {
        if self.is_quitting() {
            CloseAction::Destroy
        } else {
            CloseAction::HideToTray
        }
    }
}
