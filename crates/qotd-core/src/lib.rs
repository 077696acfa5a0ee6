//! qotd-core: Core library for the Quote of the Day desklet
//!
//! Periodically runs `fortune` and publishes the quote to a host-owned label.
//! The host shell (settings store, label, clipboard) is injected through
//! traits so the refresh cycle can run under any event loop built on Tokio.
//!
//! # Main Entry Points
//!
//! - [`refresher`] - The timer-driven refresh cycle
//! - [`host`] - Host event bindings (settings, click, copy, removal)
//! - [`quote`] - Fortune command construction and execution
//! - [`config`] - Configuration management
//! - [`style`] - Label CSS

pub mod config;
pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod quote;
pub mod refresher;
pub mod style;

// Re-export commonly used types at crate root for convenience
pub use config::{DeskletSettings, QotdConfig, SettingsGroup, SettingsKey};
pub use errors::{ConfigError, QotdError};
pub use host::{Clipboard, ClipboardError, DeskletHost, SystemClipboard};
pub use quote::{FortuneRunner, Quote, QuoteCommand, QuoteRunner, RefreshError};
pub use refresher::{DisplaySink, QuoteRefresher, RefreshConfig, RefresherStatus};
pub use style::LabelStyle;

// Re-export logging initialization
pub use logging::init_logging;
