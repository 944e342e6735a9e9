use thiserror::Error;

/// All errors produced by wallboard-core.
///
/// Expected boundary failures (dialog cancellation, file I/O errors) never
/// surface as this type; they are encoded inside the result objects in
/// [`crate::ipc::results`]. `WallboardError` covers the host's own faults.
#[derive(Debug, Error)]
pub enum WallboardError {
    #[error("main window is not available")]
    WindowUnavailable,

    #[error("tray construction error: {0}")]
    Tray(String),

    #[error("notification error: {0}")]
    Notification(String),

    #[error("event push error: {0}")]
    EventPush(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WallboardError>;
