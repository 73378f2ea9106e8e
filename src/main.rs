use clap::Parser;

use hotspots::adapter::inbound::cli::{self, command::Cli, output};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli::run(&cli) {
        output::failure(&e.to_string());
        std::process::exit(1);
    }
}
