//! Dialog Effect Handlers
//!
//! [`RecordingDialogHandler`] records every requested dialog instead of
//! rendering anything. Tests assert against the recorded sequence; headless
//! hosts use it to keep error routing observable in logs.

use async_trait::async_trait;
use parking_lot::Mutex;

use vela_core::effects::{DialogEffects, DialogError, ErrorDialog};

/// Dialog handler that records requests instead of presenting them
#[derive(Debug, Default)]
pub struct RecordingDialogHandler {
    shown: Mutex<Vec<ErrorDialog>>,
}

impl RecordingDialogHandler {
    /// Create a new recording handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Dialogs requested so far, in order
    pub fn shown(&self) -> Vec<ErrorDialog> {
        self.shown.lock().clone()
    }
}

#[async_trait]
impl DialogEffects for RecordingDialogHandler {
    async fn show_error(&self, dialog: ErrorDialog) -> Result<(), DialogError> {
        tracing::debug!(?dialog, severity = ?dialog.severity(), "error dialog requested");
        self.shown.lock().push(dialog);
        Ok(())
    }
}
