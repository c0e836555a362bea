//! Main entry point for the flightdesk console.
//!
//! `flightdesk <database> <port> <user>` opens (or creates) the airline
//! database and runs the interactive main menu on stdin/stdout:
//! - adding planes, pilots, technicians, customers, flights and repairs
//! - booking customers onto flights
//! - seat, repair and passenger reports
//! - looking up records by id or name

mod cli;
mod commands;
mod error;
mod session;
mod utils;

use std::io::{self, Write};

use clap::Parser;
use cli::Cli;
use error::CliError;
use flightdesk::{IdAllocators, Logger, Prompter};
use session::Session;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir.clone(),
        max_retries: cli.max_retries,
        output: cli.output.map(Into::into),
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Initialize logging based on verbosity
    let logger = flightdesk::install_logger(global.verbose, global.quiet);

    // Handle errors and set exit code
    match run(&cli, &global, logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli, global: &GlobalOptions, logger: Logger) -> Result<(), CliError> {
    let config = utils::load_configuration(global)?;
    let path = utils::database_path(global, &cli.database_name)?;
    let port = cli.port.get();

    let mut out = io::stdout().lock();
    write!(out, "Connecting to database...")?;
    writeln!(out, "Connection URL: {}\n", utils::connection_url(&path, port, &cli.user))?;
    out.flush()?;
    let db = utils::open_database(&path, &config)?;
    writeln!(out, "Done")?;
    logger.info(&format!(
        "connected to {} as {} (port {port})",
        path.display(),
        cli.user
    ));

    let prompter = Prompter::new(io::stdin().lock(), out).with_max_attempts(config.retry_limit());
    let seeded = IdAllocators::seed(db.connection());
    let (db, mut out, outcome) = match seeded {
        Ok(ids) => {
            let mut session = Session::new(db, ids, prompter, config.format(), logger);
            let outcome = session.run();
            let Session { db, prompter, .. } = session;
            (db, prompter.into_parts().1, outcome)
        }
        Err(e) => (db, prompter.into_parts().1, Err(e.into())),
    };

    write!(out, "Disconnecting from database...")?;
    let closed = db.close();
    writeln!(out, "Done\n\nBye !")?;

    outcome?;
    closed.map_err(CliError::from)
}
