//! Quote production: building the fortune command line, resolving the quote
//! file and running the program.

pub mod command;
pub mod errors;
pub mod runner;
pub mod source;

pub use command::{FORTUNE_PROGRAM, QuoteCommand, build_command};
pub use errors::RefreshError;
pub use runner::{FortuneRunner, QuoteOutput, QuoteRunner};
pub use source::QuoteSource;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::errors::QotdError;
use crate::refresher::RefreshConfig;

/// A quote fetched outside the refresh cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub text: String,
    pub command: String,
    pub fetched_at: DateTime<Utc>,
}

/// Log a missing quote file. The invocation still goes ahead.
pub(crate) fn check_quote_source(command: &QuoteCommand) {
    if let Some(source) = command.quote_source()
        && !source.exists()
    {
        let err = RefreshError::FileNotFound {
            path: source.uri().to_string(),
        };
        error!(
            event = "core.refresh.file_not_found",
            error = %err,
            error_code = err.error_code()
        );
    }
}

/// Fetch a single quote for `config`.
///
/// Unlike the refresh cycle this surfaces failures to the caller. A non-zero
/// exit is logged and its stdout is still returned, matching what the
/// desklet would display.
pub async fn fetch_quote<R: QuoteRunner>(
    runner: &R,
    config: &RefreshConfig,
) -> Result<Quote, RefreshError> {
    let command = build_command(config)?;
    check_quote_source(&command);

    info!(event = "core.quote.fetch_started", command = %command);

    let output = runner.run(&command).await?;
    if let Some(err) = output.exit_error(&command) {
        warn!(
            event = "core.quote.fetch_exit_failed",
            error = %err,
            error_code = err.error_code()
        );
    }

    info!(
        event = "core.quote.fetch_completed",
        command = %command,
        length = output.stdout.len()
    );

    Ok(Quote {
        text: output.stdout,
        command: command.to_string(),
        fetched_at: Utc::now(),
    })
}
