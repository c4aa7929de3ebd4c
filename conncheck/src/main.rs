//! `conncheck`: print a diagnostic report for environment smoke tests.

use anyhow::Result;
use clap::Parser;

use conncheck::check::run_check;
use conncheck::cli::Cli;
use conncheck::{exit_codes, logging};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--help` and `--version` land here too and go to stdout.
            let code = if err.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init();

    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config();
    tracing::debug!(?config, "configuration built");
    let stdout = std::io::stdout();
    run_check(&config, &mut stdout.lock())
}
