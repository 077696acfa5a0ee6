use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("qotd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show a random fortune, refreshed on an interval")
        .long_about("qotd runs the Quote of the Day desklet outside the desktop shell. It periodically runs `fortune` against a quote file and shows the result, reloading its settings whenever the config file changes.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            with_settings_args(
                Command::new("run")
                    .about("Run the desklet: print a new quote every interval")
                    .long_about(
                        "Runs the desklet in the terminal. Each quote is printed to stdout followed by a '%' line.\n\n\
                        Commands read from stdin:\n  \
                        <enter> or 'next'   show a new quote now\n  \
                        'copy'              copy the current quote to the clipboard\n  \
                        'quit'              remove the desklet and exit\n\n\
                        The config file is watched; edits take effect immediately."
                    )
            )
        )
        .subcommand(
            with_settings_args(
                Command::new("show")
                    .about("Fetch one quote and print it")
                    .arg(
                        Arg::new("json")
                            .long("json")
                            .help("Output in JSON format")
                            .action(ArgAction::SetTrue)
                    )
            )
        )
        .subcommand(
            with_settings_args(
                Command::new("command")
                    .about("Print the fortune command the desklet would run")
            )
        )
        .subcommand(
            with_settings_args(
                Command::new("style")
                    .about("Print the label CSS for the configured style")
            )
        )
}

/// Arguments shared by every subcommand that resolves settings.
fn with_settings_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file to use instead of the user config")
                .value_parser(clap::value_parser!(std::path::PathBuf))
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Quote file for fortune, as a path or file:// URI (overrides config)")
        )
        .arg(
            Arg::new("delay")
                .long("delay")
                .short('d')
                .help("Minutes between quotes (overrides config)")
                .value_parser(clap::value_parser!(f64))
        )
        .arg(
            Arg::new("params")
                .long("params")
                .short('p')
                .num_args(1)
                .allow_hyphen_values(true) // Allow values starting with hyphens (e.g., -s -n 200)
                .help("Extra fortune arguments (use --params '-s' or --params='-s')")
        )
        .arg(
            Arg::new("ignore-input-file")
                .long("ignore-input-file")
                .help("Run fortune without the quote file")
                .action(ArgAction::SetTrue)
        )
}
