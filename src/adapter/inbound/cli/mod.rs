//! CLI module graph.

pub mod command;
pub mod config;
pub mod optimize;
pub mod output;

use command::{Cli, ColorChoice, Commands, ConfigCommand};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Apply global flags and run the selected subcommand.
///
/// # Errors
///
/// Returns the first error raised by the handler.
pub fn run(cli: &Cli) -> Result<()> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::Mode::from_flags(cli.json, cli.quiet), cli.verbose);

    match &cli.command {
        Commands::Optimize(args) => optimize::execute(args),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(arg.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(arg)) => {
            config::execute_validate(arg.config.as_deref())
        }
    }
}

/// Start logging for a command, raising the level for each `-v`.
pub(crate) fn init_logging(config: &Config) {
    let mut logging = config.logging.clone();
    match output::verbosity() {
        0 => {}
        1 => logging.level = "debug".into(),
        _ => logging.level = "trace".into(),
    }
    logging.init();
}
