use wsc_core::logging;

mod cli;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logging is best effort; the command still runs without it.
    if let Err(err) = logging::init_logging(cli.command.name()) {
        eprintln!("wsc: logging disabled: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("wsc error: {:#}", err);
        std::process::exit(1);
    }
}
