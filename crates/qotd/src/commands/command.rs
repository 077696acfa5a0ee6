use clap::ArgMatches;
use tracing::{error, info};

use qotd_core::errors::QotdError;
use qotd_core::events;
use qotd_core::quote::build_command;

use super::helpers::SettingsSource;

pub(crate) fn handle_command_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.command_started");

    let settings = SettingsSource::from_matches(matches).load_with_warning()?;

    match build_command(&settings.refresh_config()) {
        Ok(command) => {
            println!("{}", command);
            if let Some(source) = command.quote_source()
                && !source.exists()
            {
                eprintln!("Warning: quote file not found: {}", source);
            }
            info!(event = "cli.command_completed", command = %command);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Tip: Set 'file' in your config, pass --file, or use --ignore-input-file.");
            error!(
                event = "cli.command_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
