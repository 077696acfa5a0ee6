use clap::ArgMatches;
use tracing::info;

use super::helpers::SettingsSource;

pub(crate) fn handle_style_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.style_started");

    let settings = SettingsSource::from_matches(matches).load_with_warning()?;
    println!("{}", settings.label_style().to_css());

    info!(event = "cli.style_completed");
    Ok(())
}
