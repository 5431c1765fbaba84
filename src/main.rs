use std::io;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use benchparse::cliopt::CliOpt;
use benchparse::output::writer::LineWriter;
use benchparse::runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let default_level = if opt.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    tracing::debug!(?opt, "parsed CLI arguments");

    runner::run(
        opt.command,
        Box::new(io::stdin()),
        Box::new(LineWriter::new(io::stdout())),
    )?;

    Ok(())
}
