use clap::ArgMatches;
use tracing::error;

use qotd_core::events;

pub mod helpers;

mod command;
mod run;
mod show;
mod style;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches),
        Some(("command", sub_matches)) => command::handle_command_command(sub_matches),
        Some(("style", sub_matches)) => style::handle_style_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
