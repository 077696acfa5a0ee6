use std::fmt;

use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};

use crate::config::defaults::DEFAULT_DELAY_MINUTES;

/// Settings that drive the refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshConfig {
    /// Quote file as a URI or local path. `None` or blank means unset.
    pub quote_file: Option<String>,
    /// Run fortune without the quote file.
    pub ignore_input_file: bool,
    /// Extra fortune arguments, whitespace separated.
    pub extra_args: String,
    /// Minutes between refreshes. Must be positive.
    pub interval_minutes: f64,
}

impl RefreshConfig {
    /// Time between refreshes.
    ///
    /// A non-positive or non-finite `interval_minutes` falls back to the
    /// default delay.
    pub fn interval(&self) -> Duration {
        let minutes = if self.interval_minutes.is_finite() && self.interval_minutes > 0.0 {
            self.interval_minutes
        } else {
            DEFAULT_DELAY_MINUTES
        };
        Duration::try_from_secs_f64(minutes * 60.0).unwrap_or(Duration::MAX)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            quote_file: None,
            ignore_input_file: false,
            extra_args: String::new(),
            interval_minutes: DEFAULT_DELAY_MINUTES,
        }
    }
}

/// Where a [`QuoteRefresher`](super::QuoteRefresher) is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefresherStatus {
    /// No timer pending and no configuration refresh running.
    Idle,
    /// A configuration-change refresh is running.
    RefreshInProgress,
    /// The next refresh is scheduled.
    TimerScheduled,
    /// The widget was removed. Terminal.
    Removed,
}

impl fmt::Display for RefresherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RefresherStatus::Idle => "idle",
            RefresherStatus::RefreshInProgress => "refresh_in_progress",
            RefresherStatus::TimerScheduled => "timer_scheduled",
            RefresherStatus::Removed => "removed",
        };
        write!(f, "{}", s)
    }
}

/// The single outstanding scheduled refresh.
#[derive(Debug)]
pub(crate) struct PendingTimer {
    pub(crate) id: u64,
    pub(crate) fires_at: Instant,
    handle: JoinHandle<()>,
}

impl PendingTimer {
    pub(crate) fn new(id: u64, fires_at: Instant, handle: JoinHandle<()>) -> Self {
        Self {
            id,
            fires_at,
            handle,
        }
    }

    /// Stop the timer before it fires. Dropping a `PendingTimer` without
    /// calling this leaves the task running.
    pub(crate) fn cancel(self) {
        self.handle.abort();
    }
}
