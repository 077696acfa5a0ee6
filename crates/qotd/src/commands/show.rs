use clap::ArgMatches;
use tracing::{error, info};

use qotd_core::errors::QotdError;
use qotd_core::events;
use qotd_core::quote::{FortuneRunner, fetch_quote};

use super::helpers::SettingsSource;
use crate::sink::format_quote;

pub(crate) fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.show_started", json_output = json_output);

    let settings = SettingsSource::from_matches(matches).load_with_warning()?;
    let config = settings.refresh_config();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(fetch_quote(&FortuneRunner, &config)) {
        Ok(quote) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print!("{}", format_quote(&quote.text));
            }
            info!(event = "cli.show_completed", command = %quote.command);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: Failed to fetch quote: {}", e);
            error!(
                event = "cli.show_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
