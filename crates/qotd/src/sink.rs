//! Terminal stand-in for the desklet's label.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use qotd_core::DisplaySink;
use tracing::{debug, warn};

/// Separator printed after each quote, as in fortune's own files.
pub const QUOTE_SEPARATOR: &str = "%";

/// Writes each published quote followed by a separator line.
pub struct TerminalSink<W> {
    out: Mutex<W>,
}

impl<W: Write + Send + 'static> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

/// Render a quote the way the terminal label shows it.
pub fn format_quote(text: &str) -> String {
    let mut rendered = text.to_string();
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered.push_str(QUOTE_SEPARATOR);
    rendered.push('\n');
    rendered
}

impl<W: Write + Send + 'static> DisplaySink for TerminalSink<W> {
    fn set_text(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out
            .write_all(format_quote(text).as_bytes())
            .and_then(|()| out.flush())
        {
            warn!(event = "cli.sink.write_failed", error = %e);
        }
    }

    fn set_style(&self, css: &str) {
        // A terminal has no label to style.
        debug!(event = "cli.sink.style_ignored", css = %css);
    }
}
