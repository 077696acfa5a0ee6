use std::io::Stdout;
use std::time::Duration;

use clap::ArgMatches;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use qotd_core::config::DeskletSettings;
use qotd_core::events;
use qotd_core::{DeskletHost, FortuneRunner, SystemClipboard};

use super::helpers::SettingsSource;
use crate::sink::TerminalSink;
use crate::watcher::SettingsWatcher;

/// Quiet period after a config file event before reloading, so that a burst
/// of writes from one save triggers a single reload.
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(100);

type TerminalHost = DeskletHost<FortuneRunner, TerminalSink<Stdout>>;

/// A line typed on stdin, standing in for the host's pointer and menu events.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HostInput {
    /// Click on the desklet.
    Activate,
    /// The "Copy" menu item.
    Copy,
    /// Remove the desklet.
    Quit,
    Unknown(String),
}

impl HostInput {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "n" | "next" => HostInput::Activate,
            "c" | "copy" => HostInput::Copy,
            "q" | "quit" | "exit" => HostInput::Quit,
            other => HostInput::Unknown(other.to_string()),
        }
    }
}

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let source = SettingsSource::from_matches(matches);
    let settings = source.load_with_warning()?;

    info!(
        event = "cli.run_started",
        file = ?settings.file,
        delay = settings.delay,
        ignore_input_file = settings.ignore_input_file
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_desklet(&source, settings));
    // A pending stdin read would otherwise hold up shutdown until Enter.
    runtime.shutdown_background();

    events::log_app_shutdown();
    info!(event = "cli.run_completed");
    Ok(())
}

async fn run_desklet(source: &SettingsSource, settings: DeskletSettings) {
    let mut host: TerminalHost = DeskletHost::new(
        FortuneRunner,
        TerminalSink::new(std::io::stdout()),
        settings,
    );
    host.start();

    let (reload_tx, mut reload_rx) = mpsc::unbounded_channel();
    let _watcher = source
        .watch_path()
        .and_then(|path| match SettingsWatcher::new(&path, reload_tx) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!(
                    event = "cli.run.watch_failed",
                    path = %path.display(),
                    error = %e
                );
                None
            }
        });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!(event = "cli.run.signal_failed", error = %e);
                }
                debug!(event = "cli.run.interrupted");
                break;
            }
            Some(()) = reload_rx.recv() => {
                tokio::time::sleep(RELOAD_DEBOUNCE).await;
                while reload_rx.try_recv().is_ok() {}
                reload_settings(&mut host, source);
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(line)) => {
                        if !handle_input(&host, HostInput::parse(&line)) {
                            break;
                        }
                    }
                    Ok(None) => {
                        debug!(event = "cli.run.stdin_closed");
                        stdin_open = false;
                    }
                    Err(e) => {
                        warn!(event = "cli.run.stdin_failed", error = %e);
                        stdin_open = false;
                    }
                }
            }
        }
    }

    host.remove();
}

fn reload_settings(host: &mut TerminalHost, source: &SettingsSource) {
    match source.reload() {
        Ok(settings) => {
            let changed = host.apply_settings(settings);
            info!(
                event = "cli.run.settings_reloaded",
                changed = ?changed.iter().map(|k| k.as_str()).collect::<Vec<_>>()
            );
        }
        Err(e) => {
            eprintln!(
                "Warning: Could not reload config: {}. Keeping current settings.",
                e
            );
            warn!(event = "cli.run.reload_failed", error = %e);
        }
    }
}

/// Apply one stdin command. Returns `false` when the desklet should stop.
fn handle_input(host: &TerminalHost, input: HostInput) -> bool {
    match input {
        HostInput::Activate => host.activate(),
        HostInput::Copy => {
            let copy = host.copy_quote(SystemClipboard);
            tokio::spawn(async move {
                match copy.await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => eprintln!("Warning: Could not copy quote: {}", e),
                    Err(e) => warn!(event = "cli.run.copy_task_failed", error = %e),
                }
            });
        }
        HostInput::Quit => return false,
        HostInput::Unknown(other) => {
            eprintln!(
                "Unknown command '{}'. Use <enter> or 'next', 'copy', 'quit'.",
                other
            );
        }
    }
    true
}
