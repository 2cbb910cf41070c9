use clap::Parser;
use ephem_golden::cli::{Cli, Commands};
use ephem_golden::commands::{handle_check, handle_eval, handle_show};
use ephem_golden::error::CliExitCode;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            CliExitCode::Structural.into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<CliExitCode> {
    match &cli.command {
        Commands::Check {
            golden,
            manifests,
            tol,
        } => handle_check(cli.json, golden, manifests, *tol),
        Commands::Show { manifest } => handle_show(cli.json, manifest),
        Commands::Eval {
            manifests,
            body,
            date,
        } => handle_eval(cli.json, manifests, body, date),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
