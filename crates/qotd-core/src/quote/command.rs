//! Construction of the fortune command line.

use std::fmt;

use super::errors::RefreshError;
use super::source::QuoteSource;
use crate::refresher::RefreshConfig;

/// Program invoked to produce quotes.
pub const FORTUNE_PROGRAM: &str = "fortune";

/// A fully built invocation of the quote program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteCommand {
    program: String,
    args: Vec<String>,
    source: Option<QuoteSource>,
}

impl QuoteCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            source: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The quote file passed as the last argument, if any.
    pub fn quote_source(&self) -> Option<&QuoteSource> {
        self.source.as_ref()
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for QuoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

/// Build the fortune command for a refresh.
///
/// Extra arguments are split on whitespace; an empty string adds nothing.
/// Unless `ignore_input_file` is set, the resolved quote file is appended
/// last.
///
/// # Errors
///
/// Returns `MissingQuoteSource` when the quote file is required but unset or
/// blank.
pub fn build_command(config: &RefreshConfig) -> Result<QuoteCommand, RefreshError> {
    let mut command = QuoteCommand::new(FORTUNE_PROGRAM, config.extra_args.split_whitespace());

    if config.ignore_input_file {
        return Ok(command);
    }

    let file = config
        .quote_file
        .as_deref()
        .map(str::trim)
        .filter(|file| !file.is_empty())
        .ok_or(RefreshError::MissingQuoteSource)?;

    let source = QuoteSource::resolve(file);
    command.args.push(source.argument());
    command.source = Some(source);
    Ok(command)
}
