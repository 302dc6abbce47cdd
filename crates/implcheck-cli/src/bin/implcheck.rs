use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use implcheck_cli::args::CliArgs;
use implcheck_cli::driver;

/// Exit status when contract diagnostics were reported. Load failures
/// return an error from `main` and exit with status 1.
const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS: i32 = 2;

fn main() -> Result<()> {
    // Installs a subscriber only when IMPLCHECK_LOG or RUST_LOG is set.
    implcheck_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let outcome = driver::run(&args)?;

    let pretty = args
        .pretty
        .unwrap_or_else(|| std::io::stdout().is_terminal());
    let output = driver::render(&outcome, args.format, pretty)?;
    if !output.is_empty() {
        println!("{output}");
    }

    if outcome.diagnostics.is_empty() {
        std::process::exit(EXIT_SUCCESS);
    }
    std::process::exit(EXIT_DIAGNOSTICS);
}
