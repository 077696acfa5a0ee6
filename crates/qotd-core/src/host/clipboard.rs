//! Host clipboard service for the "Copy" menu action.
//!
//! Best-effort: the first available of `wl-copy`, `xclip` and `xsel` is fed
//! the text on stdin. Only the tool's own exit is awaited; the selection
//! owner it may fork keeps running in the background.

use std::future::Future;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::QotdError;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool found (tried: {tried})")]
    NoBackend { tried: String },

    #[error("Clipboard tool '{backend}' failed: {message}")]
    CommandFailed { backend: String, message: String },
}

impl QotdError for ClipboardError {
    fn error_code(&self) -> &'static str {
        match self {
            ClipboardError::NoBackend { .. } => "CLIPBOARD_NO_BACKEND",
            ClipboardError::CommandFailed { .. } => "CLIPBOARD_COMMAND_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ClipboardError::NoBackend { .. })
    }
}

/// Places text on the host clipboard.
pub trait Clipboard: Send + Sync + 'static {
    fn set_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// Command-line clipboard tools, in order of preference.
const BACKENDS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Clipboard backed by whichever clipboard tool is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn find_backend() -> Option<(&'static str, &'static [&'static str])> {
        BACKENDS.into_iter().find(|(program, _)| match which::which(program) {
            Ok(_) => true,
            Err(e) => {
                debug!(
                    event = "core.clipboard.backend_unavailable",
                    backend = program,
                    error = %e
                );
                false
            }
        })
    }
}

impl Clipboard for SystemClipboard {
    async fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let (program, args) = Self::find_backend().ok_or_else(|| ClipboardError::NoBackend {
            tried: BACKENDS
                .iter()
                .map(|(program, _)| *program)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

        pipe_to(program, args, text).await
    }
}

/// Feed `text` to `program` on stdin and wait for it to exit.
///
/// stdout and stderr are not captured: a forked selection owner would hold
/// the pipes open until it loses the selection.
async fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let command_failed = |message: String| ClipboardError::CommandFailed {
        backend: program.to_string(),
        message,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| command_failed(e.to_string()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| command_failed(e.to_string()))?;
    }

    let status = child
        .wait()
        .await
        .map_err(|e| command_failed(e.to_string()))?;

    if status.success() {
        info!(
            event = "core.clipboard.copy_completed",
            backend = program,
            length = text.len()
        );
        Ok(())
    } else {
        warn!(
            event = "core.clipboard.copy_failed",
            backend = program,
            status = %status
        );
        Err(command_failed(status.to_string()))
    }
}
