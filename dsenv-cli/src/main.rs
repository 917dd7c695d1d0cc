//! dsenv - command-line interface for datasource resolution.

use clap::Parser;

use dsenv_cli::cli::{Cli, Command};
use dsenv_cli::commands;
use dsenv_cli::error::CliResult;
use dsenv_cli::output;

fn main() {
    dsenv_config::logging::init();

    if let Err(e) = run() {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => commands::resolve::run(args),
        Command::Sources(args) => commands::sources::run(args),
        Command::Version => commands::version::run(),
    }
}
