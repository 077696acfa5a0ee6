use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::traits::DisplaySink;
use super::types::{PendingTimer, RefreshConfig, RefresherStatus};
use crate::errors::QotdError;
use crate::quote::{QuoteCommand, QuoteRunner, build_command, check_quote_source};

/// Drives the periodic quote refresh for one desklet instance.
///
/// Cloning yields another handle to the same refresher. Every method must be
/// called from within a Tokio runtime: process runs and timers are spawned
/// as tasks on it.
///
/// # Semantics
///
/// - **Single timer**: scheduling a refresh cancels the previous timer, so at
///   most one is pending.
/// - **Configuration changes**: [`on_config_changed`](Self::on_config_changed)
///   is guarded against re-entry. A call made while a configuration-change
///   refresh is running is dropped.
/// - **Manual refreshes**: [`on_widget_activated`](Self::on_widget_activated)
///   never moves the pending timer's fire time.
/// - **No serialization otherwise**: manual, timer and configuration
///   refreshes may overlap. Whichever process finishes last sets the text.
/// - **Teardown**: after [`on_widget_removed`](Self::on_widget_removed) no
///   timer fires and results of in-flight runs are discarded.
pub struct QuoteRefresher<R, D> {
    inner: Arc<Inner<R, D>>,
}

impl<R, D> Clone for QuoteRefresher<R, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<R, D> {
    runner: R,
    sink: D,
    state: Mutex<RefresherState>,
    config_change_in_progress: AtomicBool,
    next_timer_id: AtomicU64,
}

struct RefresherState {
    config: RefreshConfig,
    display_text: String,
    pending_timer: Option<PendingTimer>,
    /// Liveness token. Bumped on removal; results carrying an older value
    /// are dropped.
    generation: u64,
    removed: bool,
}

/// What `schedule_next` does with an already pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reschedule {
    Replace,
    KeepPending,
}

/// Clears the configuration-change flag when the refresh returns.
struct ConfigChangeGuard<'a>(&'a AtomicBool);

impl Drop for ConfigChangeGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<R: QuoteRunner, D: DisplaySink> QuoteRefresher<R, D> {
    pub fn new(runner: R, sink: D, config: RefreshConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                runner,
                sink,
                state: Mutex::new(RefresherState {
                    config,
                    display_text: String::new(),
                    pending_timer: None,
                    generation: 0,
                    removed: false,
                }),
                config_change_in_progress: AtomicBool::new(false),
                next_timer_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn sink(&self) -> &D {
        &self.inner.sink
    }

    pub fn config(&self) -> RefreshConfig {
        self.lock_state().config.clone()
    }

    /// Replace the configuration used by subsequent refreshes.
    ///
    /// Does not refresh by itself; the host follows up with
    /// [`on_config_changed`](Self::on_config_changed).
    pub fn update_config(&self, config: RefreshConfig) {
        self.lock_state().config = config;
    }

    /// The last published quote.
    pub fn display_text(&self) -> String {
        self.lock_state().display_text.clone()
    }

    pub fn status(&self) -> RefresherStatus {
        let state = self.lock_state();
        if state.removed {
            RefresherStatus::Removed
        } else if self.inner.config_change_in_progress.load(Ordering::Acquire) {
            RefresherStatus::RefreshInProgress
        } else if state.pending_timer.is_some() {
            RefresherStatus::TimerScheduled
        } else {
            RefresherStatus::Idle
        }
    }

    pub fn has_pending_timer(&self) -> bool {
        self.lock_state().pending_timer.is_some()
    }

    /// When the pending timer fires, if one is scheduled.
    pub fn next_refresh_at(&self) -> Option<Instant> {
        self.lock_state()
            .pending_timer
            .as_ref()
            .map(|timer| timer.fires_at)
    }

    /// React to a change of a refresh setting.
    ///
    /// Cancels the pending timer and refreshes immediately. Re-entrant calls
    /// made while this refresh is running are no-ops.
    pub fn on_config_changed(&self) {
        if self
            .inner
            .config_change_in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(
                event = "core.refresh.config_change_skipped",
                reason = "config change refresh already in progress"
            );
            return;
        }
        let _guard = ConfigChangeGuard(&self.inner.config_change_in_progress);

        info!(event = "core.refresh.config_changed");

        self.cancel_pending_timer();
        self.refresh_once();
    }

    /// Run one refresh and schedule the next.
    ///
    /// The quote program runs on a spawned task; this returns immediately.
    /// When the quote file is required but unset, nothing runs and the
    /// display is cleared. The next refresh is scheduled either way,
    /// replacing any pending timer.
    pub fn refresh_once(&self) {
        if let Some((interval, generation)) = self.start_refresh() {
            self.schedule_next(interval, generation, Reschedule::Replace);
        }
    }

    /// Manual refresh, e.g. the user clicked the desklet.
    ///
    /// Runs the quote program now but leaves a pending timer where it is. A
    /// timer is only scheduled when none is pending.
    pub fn on_widget_activated(&self) {
        info!(event = "core.refresh.activated");
        if let Some((interval, generation)) = self.start_refresh() {
            self.schedule_next(interval, generation, Reschedule::KeepPending);
        }
    }

    /// Tear down: cancel the pending timer and ignore all later results.
    pub fn on_widget_removed(&self) {
        let timer = {
            let mut state = self.lock_state();
            if state.removed {
                return;
            }
            state.removed = true;
            state.generation = state.generation.wrapping_add(1);
            state.pending_timer.take()
        };

        if let Some(timer) = timer {
            let timer_id = timer.id;
            timer.cancel();
            info!(event = "core.timer.cancelled", timer_id = timer_id);
        }

        info!(event = "core.refresher.removed");
    }

    fn lock_state(&self) -> MutexGuard<'_, RefresherState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Start one run of the quote program for the current config.
    ///
    /// Returns the interval and generation the run belongs to, or `None`
    /// once the widget is removed.
    fn start_refresh(&self) -> Option<(Duration, u64)> {
        let (config, generation) = {
            let state = self.lock_state();
            if state.removed {
                debug!(event = "core.refresh.skipped", reason = "widget removed");
                return None;
            }
            (state.config.clone(), state.generation)
        };

        info!(
            event = "core.refresh.started",
            ignore_input_file = config.ignore_input_file,
            interval_minutes = config.interval_minutes
        );

        match build_command(&config) {
            Ok(command) => {
                check_quote_source(&command);
                self.spawn_invocation(command, generation);
            }
            Err(err) => {
                error!(
                    event = "core.refresh.missing_quote_source",
                    error = %err,
                    error_code = err.error_code()
                );
                self.publish(generation, String::new());
            }
        }

        Some((config.interval(), generation))
    }

    fn spawn_invocation(&self, command: QuoteCommand, generation: u64) {
        let refresher = self.clone();
        tokio::spawn(async move {
            match refresher.inner.runner.run(&command).await {
                Ok(output) => {
                    if let Some(err) = output.exit_error(&command) {
                        warn!(
                            event = "core.refresh.exit_failed",
                            error = %err,
                            error_code = err.error_code()
                        );
                    }
                    info!(
                        event = "core.refresh.completed",
                        command = %command,
                        length = output.stdout.len()
                    );
                    refresher.publish(generation, output.stdout);
                }
                Err(err) => {
                    error!(
                        event = "core.refresh.spawn_failed",
                        error = %err,
                        error_code = err.error_code()
                    );
                }
            }
        });
    }

    /// Set the display text unless the refresher was torn down since the
    /// refresh started.
    fn publish(&self, generation: u64, text: String) {
        {
            let mut state = self.lock_state();
            if state.removed || state.generation != generation {
                debug!(
                    event = "core.refresh.result_discarded",
                    generation = generation,
                    current_generation = state.generation
                );
                return;
            }
            state.display_text.clone_from(&text);
        }

        self.inner.sink.set_text(&text);
    }

    fn schedule_next(&self, delay: Duration, generation: u64, mode: Reschedule) {
        let now = Instant::now();
        let Some(fires_at) = now.checked_add(delay) else {
            warn!(
                event = "core.timer.schedule_skipped",
                reason = "interval out of range",
                delay_secs = delay.as_secs_f64()
            );
            return;
        };

        let mut state = self.lock_state();
        if state.removed || state.generation != generation {
            return;
        }
        if mode == Reschedule::KeepPending
            && let Some(pending) = &state.pending_timer
        {
            debug!(event = "core.timer.kept", timer_id = pending.id);
            return;
        }

        let timer_id = self.inner.next_timer_id.fetch_add(1, Ordering::Relaxed);
        let refresher = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(fires_at).await;
            refresher.on_timer_fired(timer_id);
        });

        let previous = state
            .pending_timer
            .replace(PendingTimer::new(timer_id, fires_at, handle));
        drop(state);

        if let Some(previous) = previous {
            let previous_id = previous.id;
            previous.cancel();
            debug!(event = "core.timer.replaced", timer_id = previous_id);
        }

        info!(
            event = "core.timer.scheduled",
            timer_id = timer_id,
            delay_secs = delay.as_secs_f64()
        );
    }

    fn cancel_pending_timer(&self) {
        let timer = self.lock_state().pending_timer.take();
        if let Some(timer) = timer {
            let timer_id = timer.id;
            timer.cancel();
            info!(event = "core.timer.cancelled", timer_id = timer_id);
        }
    }

    fn on_timer_fired(&self, timer_id: u64) {
        {
            let mut state = self.lock_state();
            match &state.pending_timer {
                Some(timer) if timer.id == timer_id => {
                    // Detach: this task is the timer being dropped.
                    state.pending_timer = None;
                }
                _ => {
                    debug!(event = "core.timer.stale", timer_id = timer_id);
                    return;
                }
            }
        }

        debug!(event = "core.timer.fired", timer_id = timer_id);
        self.refresh_once();
    }
}
