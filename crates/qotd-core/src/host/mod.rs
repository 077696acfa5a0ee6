//! The desklet as seen from its host shell.
//!
//! [`DeskletHost`] binds host events (settings changes, clicks, the Copy
//! menu action, removal) to a [`QuoteRefresher`].

pub mod clipboard;

pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::{DeskletSettings, SettingsGroup, SettingsKey, changed_keys};
use crate::errors::QotdError;
use crate::events;
use crate::quote::QuoteRunner;
use crate::refresher::{DisplaySink, QuoteRefresher, RefresherStatus};

pub struct DeskletHost<R, D> {
    refresher: QuoteRefresher<R, D>,
    settings: DeskletSettings,
}

impl<R: QuoteRunner, D: DisplaySink> DeskletHost<R, D> {
    pub fn new(runner: R, sink: D, settings: DeskletSettings) -> Self {
        let refresher = QuoteRefresher::new(runner, sink, settings.refresh_config());
        Self {
            refresher,
            settings,
        }
    }

    pub fn refresher(&self) -> &QuoteRefresher<R, D> {
        &self.refresher
    }

    pub fn settings(&self) -> &DeskletSettings {
        &self.settings
    }

    /// First refresh and styling, as done when the desklet is added.
    pub fn start(&self) {
        events::log_desklet_added(&self.settings);
        self.refresher.on_config_changed();
        self.on_style_changed();
    }

    /// Push the label CSS for the current style settings to the sink.
    pub fn on_style_changed(&self) {
        if self.refresher.status() == RefresherStatus::Removed {
            return;
        }
        let css = self.settings.label_style().to_css();
        debug!(event = "core.desklet.style_applied", css = %css);
        self.refresher.sink().set_style(&css);
    }

    /// Replace the settings and notify the callbacks bound to the changed keys.
    ///
    /// Each callback runs at most once, however many of its keys changed.
    /// Returns the changed keys.
    pub fn apply_settings(&mut self, settings: DeskletSettings) -> Vec<SettingsKey> {
        let changed = changed_keys(&self.settings, &settings);
        if changed.is_empty() {
            debug!(event = "core.desklet.settings_unchanged");
            return changed;
        }

        info!(
            event = "core.desklet.settings_changed",
            keys = ?changed.iter().map(SettingsKey::as_str).collect::<Vec<_>>()
        );

        self.settings = settings;

        if changed.iter().any(|k| k.group() == SettingsGroup::Refresh) {
            self.refresher.update_config(self.settings.refresh_config());
            self.refresher.on_config_changed();
        }
        if changed.iter().any(|k| k.group() == SettingsGroup::Style) {
            self.on_style_changed();
        }

        changed
    }

    /// The user clicked the desklet.
    pub fn activate(&self) {
        self.refresher.on_widget_activated();
    }

    /// The "Copy" menu action.
    ///
    /// Copies the text displayed now on a spawned task, so a slow clipboard
    /// tool never holds up the caller. Failures are logged and returned
    /// through the handle.
    pub fn copy_quote<C: Clipboard>(&self, clipboard: C) -> JoinHandle<Result<(), ClipboardError>> {
        let text = self.refresher.display_text();
        tokio::spawn(async move {
            clipboard.set_text(&text).await.inspect_err(|e| {
                warn!(
                    event = "core.desklet.copy_failed",
                    error = %e,
                    error_code = e.error_code()
                );
            })
        })
    }

    /// The desklet was removed from the desktop.
    pub fn remove(&self) {
        self.refresher.on_widget_removed();
        events::log_desklet_removed(self.refresher.display_text().len());
    }
}
