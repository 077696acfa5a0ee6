//! Config file watching.
//!
//! Plays the part of the host settings service's change notifications: any
//! write to the config file asks the run loop to reload settings.

use std::ffi::OsString;
use std::path::Path;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Keeps the underlying watcher alive. Dropping it stops notifications.
pub struct SettingsWatcher {
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Watch `config_path` and send `()` on `tx` whenever it changes.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors which save by replacing the file are still noticed.
    pub fn new(config_path: &Path, tx: UnboundedSender<()>) -> notify::Result<Self> {
        let dir = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let file_name = config_path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if is_relevant(&event, &file_name) => {
                debug!(event = "cli.watcher.change_detected", kind = ?event.kind);
                if tx.send(()).is_err() {
                    debug!(event = "cli.watcher.receiver_closed");
                }
            }
            Ok(_) => {}
            Err(e) => warn!(event = "cli.watcher.error", error = %e),
        })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(event = "cli.watcher.started", dir = %dir.display());

        Ok(Self { _watcher: watcher })
    }
}

/// Whether `event` touches the watched config file.
fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| path.file_name() == Some(file_name.as_os_str()))
}
