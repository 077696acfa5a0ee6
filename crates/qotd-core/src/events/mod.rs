//! Lifecycle events of the app and of the desklet it hosts.

use tracing::{error, info};

use crate::config::DeskletSettings;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// The desklet was added to the desktop with these settings.
pub fn log_desklet_added(settings: &DeskletSettings) {
    info!(
        event = "core.desklet.added",
        file = settings.file.as_deref().unwrap_or(""),
        delay_minutes = settings.delay,
        ignore_input_file = settings.ignore_input_file,
        fortune_params = %settings.fortune_params
    );
}

pub fn log_desklet_removed(last_text_len: usize) {
    info!(event = "core.desklet.removed", last_text_len = last_text_len);
}
